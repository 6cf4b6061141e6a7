use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

use crate::shell::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Who is making the request. Taken from the `x-user-id` header, falling
/// back to the configured default user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity(pub String);

impl CallerIdentity {
    pub fn from_parts(parts: &Parts, default_user_id: &str) -> Self {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());
        Self(header.unwrap_or(default_user_id).to_string())
    }
}

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts, &state.default_user_id))
    }
}

/// Identity for GraphQL resolvers, attached to each request by the shell.
pub fn caller_from_context(context: &async_graphql::Context<'_>) -> String {
    match context.data_opt::<CallerIdentity>() {
        Some(CallerIdentity(user_id)) => user_id.clone(),
        None => context.data_unchecked::<AppState>().default_user_id.clone(),
    }
}
