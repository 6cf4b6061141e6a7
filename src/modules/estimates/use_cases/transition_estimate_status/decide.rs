use crate::modules::estimates::core::decision::{DecideError, Decision};
use crate::modules::estimates::core::events::{
    EstimateEvent, v1::estimate_status_changed::EstimateStatusChangedV1,
};
use crate::modules::estimates::core::state::EstimateState;
use crate::modules::estimates::core::status::{EstimateStatus, TransitionPolicy};
use crate::modules::estimates::use_cases::transition_estimate_status::command::TransitionEstimateStatus;

pub fn decide_transition(
    state: &EstimateState,
    command: TransitionEstimateStatus,
    policy: TransitionPolicy,
) -> Decision {
    let estimate = match state.estimate() {
        Some(estimate)
            if command
                .project_id
                .as_deref()
                .is_none_or(|project_id| estimate.belongs_to(project_id)) =>
        {
            estimate
        }
        _ => return Decision::reject(DecideError::NotFound),
    };

    let from = estimate.status;
    let to = command.status;
    if !policy.allows(from, to) {
        return Decision::reject(DecideError::IllegalTransition { from, to });
    }

    let (approved_by, approved_at, rejection_reason) = match to {
        EstimateStatus::Approved => (
            Some(
                command
                    .approver_id
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| command.changed_by.clone()),
            ),
            Some(command.changed_at),
            None,
        ),
        EstimateStatus::Rejected => (
            None,
            None,
            command
                .rejection_reason
                .filter(|reason| !reason.trim().is_empty()),
        ),
        EstimateStatus::Draft | EstimateStatus::Sent => (None, None, None),
    };

    Decision::accept(EstimateEvent::EstimateStatusChangedV1(
        EstimateStatusChangedV1 {
            estimate_id: estimate.estimate_id.clone(),
            from,
            to,
            approved_by,
            approved_at,
            rejection_reason,
            changed_at: command.changed_at,
            changed_by: command.changed_by,
        },
    ))
}
