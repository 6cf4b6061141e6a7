use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::estimates::core::estimate::Estimate;
use crate::modules::estimates::core::status::EstimateStatus;
use crate::modules::estimates::use_cases::transition_estimate_status::command::TransitionEstimateStatus;
use crate::shared::application::errors::ApplicationError;
use crate::shell::error::{json_body, required_text};
use crate::shell::identity::CallerIdentity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionEstimateStatusBody {
    pub estimate_id: Option<String>,
    pub status: Option<String>,
    pub rejection_reason: Option<String>,
    pub user_id: Option<String>,
    pub project_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    body: Result<Json<TransitionEstimateStatusBody>, JsonRejection>,
) -> Result<Json<Estimate>, ApplicationError> {
    let body = json_body(body)?;

    let estimate_id = required_text(body.estimate_id, "estimateId")?;
    let status = required_text(body.status, "status")?
        .parse::<EstimateStatus>()
        .map_err(|e| ApplicationError::Validation(e.to_string()))?;

    let command = TransitionEstimateStatus {
        estimate_id,
        project_id: body.project_id.filter(|p| !p.trim().is_empty()),
        status,
        rejection_reason: body.rejection_reason,
        approver_id: body.user_id,
        changed_at: Utc::now().timestamp_millis(),
        changed_by: caller,
    };

    let estimate = state.transition_handler.handle(command).await?;
    state.project_latest(&estimate).await?;
    Ok(Json(estimate))
}
