use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::estimates::use_cases::list_estimates_by_project::inbound::graphql::{
    GqlEstimate, GqlLineItemInput,
};
use crate::modules::estimates::use_cases::revise_estimate::command::ReviseEstimate;
use crate::shell::error::into_graphql_error;
use crate::shell::identity::caller_from_context;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ReviseEstimateMutation;

#[Object]
impl ReviseEstimateMutation {
    async fn revise_estimate(
        &self,
        context: &Context<'_>,
        project_id: String,
        estimate_id: String,
        items: Vec<GqlLineItemInput>,
        notes: Option<String>,
    ) -> GqlResult<GqlEstimate> {
        let state = context.data_unchecked::<AppState>();

        let command = ReviseEstimate {
            estimate_id,
            project_id,
            items: items.into_iter().map(Into::into).collect(),
            notes,
            revised_at: Utc::now().timestamp_millis(),
            revised_by: caller_from_context(context),
        };

        let estimate = state
            .revise_handler
            .handle(command)
            .await
            .map_err(into_graphql_error)?;
        state
            .project_latest(&estimate)
            .await
            .map_err(into_graphql_error)?;

        Ok(estimate.into())
    }
}
