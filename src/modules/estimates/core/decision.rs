use crate::modules::estimates::core::events::EstimateEvent;
use crate::modules::estimates::core::line_items::LineItemError;
use crate::modules::estimates::core::status::EstimateStatus;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("estimate already exists")]
    AlreadyExists,

    #[error("estimate not found")]
    NotFound,

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("amount must not be negative")]
    NegativeAmount,

    #[error("estimate has reached the revision limit")]
    RevisionLimitReached,

    #[error("a validity of {days} days is out of range")]
    ValidityOutOfRange { days: i64 },

    #[error(transparent)]
    InvalidLineItems(#[from] LineItemError),

    #[error("cannot move estimate from {from} to {to}")]
    IllegalTransition {
        from: EstimateStatus,
        to: EstimateStatus,
    },
}

pub enum Decision {
    Accepted { events: Vec<EstimateEvent> },
    Rejected { reason: DecideError },
}

impl Decision {
    pub fn accept(event: EstimateEvent) -> Self {
        Decision::Accepted {
            events: vec![event],
        }
    }

    pub fn reject(reason: impl Into<DecideError>) -> Self {
        Decision::Rejected {
            reason: reason.into(),
        }
    }
}

/// Blank and whitespace-only values count as missing.
pub fn require_text(value: &str, field: &'static str) -> Result<(), DecideError> {
    if value.trim().is_empty() {
        Err(DecideError::MissingField { field })
    } else {
        Ok(())
    }
}
