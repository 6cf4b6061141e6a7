use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::estimates::core::estimate::Estimate;
use crate::modules::estimates::core::line_items::LineItemInput;
use crate::modules::estimates::use_cases::create_estimate::command::CreateEstimate;
use crate::shared::application::errors::ApplicationError;
use crate::shell::error::{json_body, required, required_text};
use crate::shell::identity::CallerIdentity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEstimateBody {
    pub project_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub items: Option<Vec<LineItemInput>>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub valid_until: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    body: Result<Json<CreateEstimateBody>, JsonRejection>,
) -> Result<Json<Estimate>, ApplicationError> {
    let body = json_body(body)?;

    let command = CreateEstimate {
        estimate_id: Uuid::now_v7().to_string(),
        project_id: required_text(body.project_id, "projectId")?,
        title: required_text(body.title, "title")?,
        description: required_text(body.description, "description")?,
        amount: required(body.amount, "amount")?,
        items: body.items,
        notes: body.notes,
        terms: body.terms,
        valid_until: body.valid_until,
        created_at: Utc::now().timestamp_millis(),
        created_by: caller,
    };

    let estimate = state.create_handler.handle(command).await?;
    state.project_latest(&estimate).await?;
    Ok(Json(estimate))
}
