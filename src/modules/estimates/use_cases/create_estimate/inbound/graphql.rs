use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::estimates::use_cases::create_estimate::command::CreateEstimate;
use crate::modules::estimates::use_cases::list_estimates_by_project::inbound::graphql::{
    GqlEstimate, GqlLineItemInput,
};
use crate::shell::error::into_graphql_error;
use crate::shell::identity::caller_from_context;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEstimateMutation;

#[Object]
impl CreateEstimateMutation {
    #[allow(clippy::too_many_arguments)]
    async fn create_estimate(
        &self,
        context: &Context<'_>,
        project_id: String,
        title: String,
        description: String,
        amount: Decimal,
        items: Option<Vec<GqlLineItemInput>>,
        notes: Option<String>,
        terms: Option<String>,
        valid_until: Option<i64>,
    ) -> GqlResult<GqlEstimate> {
        let state = context.data_unchecked::<AppState>();

        let command = CreateEstimate {
            estimate_id: Uuid::now_v7().to_string(),
            project_id,
            title,
            description,
            amount,
            items: items.map(|items| items.into_iter().map(Into::into).collect()),
            notes,
            terms,
            valid_until,
            created_at: Utc::now().timestamp_millis(),
            created_by: caller_from_context(context),
        };

        let estimate = state
            .create_handler
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
