use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::estimates::core::estimate::Estimate;
use crate::modules::estimates::use_cases::list_estimates_by_project::queries_port::EstimateQueries;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<Estimate>>, ApplicationError> {
    let estimates = state
        .queries
        .list_by_project_id(&project_id)
        .await
        .map_err(|e| ApplicationError::Projection(e.to_string()))?;
    tracing::debug!(%project_id, count = estimates.len(), "listed estimates");
    Ok(Json(estimates))
}
