use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateStatus {
    Draft,
    Sent,
    Approved,
    Rejected,
}

impl EstimateStatus {
    pub const ALL: [EstimateStatus; 4] = [
        EstimateStatus::Draft,
        EstimateStatus::Sent,
        EstimateStatus::Approved,
        EstimateStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EstimateStatus::Draft => "draft",
            EstimateStatus::Sent => "sent",
            EstimateStatus::Approved => "approved",
            EstimateStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for EstimateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown estimate status '{0}', expected one of: draft, sent, approved, rejected")]
pub struct UnknownStatus(pub String);

impl FromStr for EstimateStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EstimateStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value.trim())
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Which status changes the `transition` operation accepts.
///
/// `Permissive` allows any status to be set from any other. `Strict` only
/// allows the forward workflow; returning to draft then requires a revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    Strict,
}

impl TransitionPolicy {
    pub fn allows(&self, from: EstimateStatus, to: EstimateStatus) -> bool {
        match self {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::Strict => matches!(
                (from, to),
                (EstimateStatus::Draft, EstimateStatus::Sent)
                    | (EstimateStatus::Sent, EstimateStatus::Approved)
                    | (EstimateStatus::Sent, EstimateStatus::Rejected)
            ),
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "strict" => Ok(TransitionPolicy::Strict),
            other => Err(anyhow::anyhow!(
                "unknown transition policy '{other}', expected 'permissive' or 'strict'"
            )),
        }
    }
}
