use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::estimates::core::estimate::Estimate;
use crate::modules::estimates::core::line_items::LineItemInput;
use crate::modules::estimates::use_cases::revise_estimate::command::ReviseEstimate;
use crate::shared::application::errors::ApplicationError;
use crate::shell::error::{json_body, required, required_text};
use crate::shell::identity::CallerIdentity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviseEstimateBody {
    pub estimate_id: Option<String>,
    pub items: Option<Vec<LineItemInput>>,
    pub notes: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    CallerIdentity(caller): CallerIdentity,
    body: Result<Json<ReviseEstimateBody>, JsonRejection>,
) -> Result<Json<Estimate>, ApplicationError> {
    let body = json_body(body)?;

    let command = ReviseEstimate {
        estimate_id: required_text(body.estimate_id, "estimateId")?,
        project_id,
        items: required(body.items, "items")?,
        notes: body.notes,
        revised_at: Utc::now().timestamp_millis(),
        revised_by: caller,
    };

    let estimate = state.revise_handler.handle(command).await?;
    state.project_latest(&estimate).await?;
    Ok(Json(estimate))
}
