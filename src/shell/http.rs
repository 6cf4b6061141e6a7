use async_graphql::http::GraphiQLSource;
use axum::{
    Extension, Json, Router,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde_json::json;

use crate::modules::estimates::use_cases::create_estimate::inbound::http as create_http;
use crate::modules::estimates::use_cases::list_estimates_by_project::inbound::http as list_http;
use crate::modules::estimates::use_cases::revise_estimate::inbound::http as revise_http;
use crate::modules::estimates::use_cases::transition_estimate_status::inbound::http as transition_http;
use crate::shell::graphql::{self, AppSchema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema: AppSchema = graphql::build_schema(state.clone());
    Router::new()
        .route("/health", get(health))
        .route(
            "/estimates",
            post(create_http::handle).patch(transition_http::handle),
        )
        .route(
            "/projects/{project_id}/estimates",
            get(list_http::handle).post(revise_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql::handle))
        .layer(Extension(schema))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
