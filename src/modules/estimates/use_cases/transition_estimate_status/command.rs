use crate::modules::estimates::core::status::EstimateStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEstimateStatus {
    pub estimate_id: String,
    /// When present the estimate must belong to this project.
    pub project_id: Option<String>,
    pub status: EstimateStatus,
    pub rejection_reason: Option<String>,
    /// Recorded as `approved_by`; falls back to `changed_by`.
    pub approver_id: Option<String>,
    pub changed_at: i64,
    pub changed_by: String,
}
