use crate::modules::estimates::core::estimate::Estimate;
use crate::modules::estimates::core::events::EstimateEvent;
use crate::modules::estimates::core::state::EstimateState;
use crate::modules::estimates::core::status::EstimateStatus;

pub fn evolve(state: EstimateState, event: EstimateEvent) -> EstimateState {
    match (state, event) {
        (EstimateState::None, EstimateEvent::EstimateCreatedV1(e)) => {
            EstimateState::Recorded(Box::new(Estimate {
                estimate_id: e.estimate_id,
                project_id: e.project_id,
                title: e.title,
                description: e.description,
                amount: e.amount,
                items: e.items,
                status: EstimateStatus::Draft,
                valid_until: e.valid_until,
                notes: e.notes,
                terms: e.terms,
                approved_by: None,
                approved_at: None,
                rejection_reason: None,
                revisions: Vec::new(),
                created_at: e.created_at,
                created_by: e.created_by.clone(),
                updated_at: e.created_at,
                updated_by: e.created_by,
            }))
        }
        (EstimateState::Recorded(mut estimate), EstimateEvent::EstimateRevisedV1(e)) => {
            estimate.revisions.push(e.revision);
            estimate.items = e.items;
            estimate.amount = e.amount;
            estimate.notes = e.notes;
            estimate.status = EstimateStatus::Draft;
            estimate.approved_by = None;
            estimate.approved_at = None;
            estimate.rejection_reason = None;
            estimate.updated_at = e.revised_at;
            estimate.updated_by = e.revised_by;
            EstimateState::Recorded(estimate)
        }
        (EstimateState::Recorded(mut estimate), EstimateEvent::EstimateStatusChangedV1(e)) => {
            estimate.status = e.to;
            estimate.approved_by = e.approved_by;
            estimate.approved_at = e.approved_at;
            estimate.rejection_reason = e.rejection_reason;
            estimate.updated_at = e.changed_at;
            estimate.updated_by = e.changed_by;
            EstimateState::Recorded(estimate)
        }
        (state, _) => state,
    }
}
