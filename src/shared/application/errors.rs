use crate::modules::estimates::core::decision::DecideError;
use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Store(#[from] EventStoreError),

    #[error("projection failed: {0}")]
    Projection(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    /// Sorts a domain rejection into the error the caller can act on.
    pub fn rejected(reason: DecideError, estimate_id: &str) -> Self {
        match reason {
            DecideError::NotFound => ApplicationError::NotFound(format!("estimate {estimate_id}")),
            DecideError::AlreadyExists
            | DecideError::IllegalTransition { .. }
            | DecideError::RevisionLimitReached => {
                ApplicationError::Conflict(reason.to_string())
            }
            DecideError::MissingField { .. }
            | DecideError::NegativeAmount
            | DecideError::ValidityOutOfRange { .. }
            | DecideError::InvalidLineItems(_) => ApplicationError::Validation(reason.to_string()),
        }
    }
}
