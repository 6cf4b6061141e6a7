// Shared test fixture for the TransitionEstimateStatus command.

use crate::modules::estimates::core::status::EstimateStatus;
use crate::modules::estimates::use_cases::transition_estimate_status::command::TransitionEstimateStatus;

pub struct TransitionEstimateStatusBuilder {
    inner: TransitionEstimateStatus,
}

impl Default for TransitionEstimateStatusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TransitionEstimateStatusBuilder {
    pub fn new() -> Self {
        Self {
            inner: TransitionEstimateStatus {
                estimate_id: "est-fixed-0001".to_string(),
                project_id: None,
                status: EstimateStatus::Sent,
                rejection_reason: None,
                approver_id: None,
                changed_at: 1_700_000_300_000,
                changed_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn estimate_id(mut self, v: impl Into<String>) -> Self {
        self.inner.estimate_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = Some(v.into());
        self
    }

    pub fn status(mut self, v: EstimateStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn rejection_reason(mut self, v: impl Into<String>) -> Self {
        self.inner.rejection_reason = Some(v.into());
        self
    }

    pub fn approver_id(mut self, v: impl Into<String>) -> Self {
        self.inner.approver_id = Some(v.into());
        self
    }

    pub fn changed_at(mut self, v: i64) -> Self {
        self.inner.changed_at = v;
        self
    }

    pub fn changed_by(mut self, v: impl Into<String>) -> Self {
        self.inner.changed_by = v.into();
        self
    }

    pub fn build(self) -> TransitionEstimateStatus {
        self.inner
    }
}
