use crate::modules::estimates::core::decision::{DecideError, Decision};
use crate::modules::estimates::core::events::{
    EstimateEvent, v1::estimate_revised::EstimateRevisedV1,
};
use crate::modules::estimates::core::line_items::calculate;
use crate::modules::estimates::core::revision::next_revision;
use crate::modules::estimates::core::state::EstimateState;
use crate::modules::estimates::use_cases::revise_estimate::command::ReviseEstimate;

pub fn decide_revise(state: &EstimateState, command: ReviseEstimate) -> Decision {
    let calculation = match calculate(command.items) {
        Ok(calculation) => calculation,
        Err(reason) => return Decision::reject(reason),
    };
    let estimate = match state.estimate() {
        Some(estimate) if estimate.belongs_to(&command.project_id) => estimate,
        _ => return Decision::reject(DecideError::NotFound),
    };

    let revision = match next_revision(
        &estimate.revisions,
        estimate.amount,
        estimate.items.clone(),
        estimate.notes.clone(),
        command.revised_at,
    ) {
        Ok(revision) => revision,
        Err(reason) => return Decision::reject(reason),
    };

    Decision::accept(EstimateEvent::EstimateRevisedV1(EstimateRevisedV1 {
        estimate_id: estimate.estimate_id.clone(),
        revision,
        items: calculation.items,
        amount: calculation.amount,
        notes: command.notes.filter(|notes| !notes.trim().is_empty()),
        revised_at: command.revised_at,
        revised_by: command.revised_by,
    }))
}
