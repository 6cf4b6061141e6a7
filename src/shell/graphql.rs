use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;

use crate::modules::estimates::use_cases::create_estimate::inbound::graphql::CreateEstimateMutation;
pub use crate::modules::estimates::use_cases::list_estimates_by_project::inbound::graphql::QueryRoot;
use crate::modules::estimates::use_cases::revise_estimate::inbound::graphql::ReviseEstimateMutation;
use crate::modules::estimates::use_cases::transition_estimate_status::inbound::graphql::TransitionEstimateStatusMutation;
use crate::shell::identity::CallerIdentity;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    CreateEstimateMutation,
    ReviseEstimateMutation,
    TransitionEstimateStatusMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn handle(
    Extension(schema): Extension<AppSchema>,
    caller: CallerIdentity,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(caller)).await.into()
}
