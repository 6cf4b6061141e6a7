use crate::modules::estimates::core::status::EstimateStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EstimateStatusChangedV1 {
    pub estimate_id: String,
    pub from: EstimateStatus,
    pub to: EstimateStatus,
    pub approved_by: Option<String>,
    pub approved_at: Option<i64>,
    pub rejection_reason: Option<String>,
    pub changed_at: i64,
    pub changed_by: String,
}
