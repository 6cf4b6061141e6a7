use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::estimates::use_cases::list_estimates_by_project::inbound::graphql::{
    GqlEstimate, GqlEstimateStatus,
};
use crate::modules::estimates::use_cases::transition_estimate_status::command::TransitionEstimateStatus;
use crate::shell::error::into_graphql_error;
use crate::shell::identity::caller_from_context;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct TransitionEstimateStatusMutation;

#[Object]
impl TransitionEstimateStatusMutation {
    async fn transition_estimate_status(
        &self,
        context: &Context<'_>,
        estimate_id: String,
        status: GqlEstimateStatus,
        project_id: Option<String>,
        rejection_reason: Option<String>,
        user_id: Option<String>,
    ) -> GqlResult<GqlEstimate> {
        let state = context.data_unchecked::<AppState>();

        let command = TransitionEstimateStatus {
            estimate_id,
            project_id,
            status: status.into(),
            rejection_reason,
            approver_id: user_id,
            changed_at: Utc::now().timestamp_millis(),
            changed_by: caller_from_context(context),
        };

        let estimate = state
            .transition_handler
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
