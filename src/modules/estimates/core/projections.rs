use crate::modules::estimates::core::events::EstimateEvent;
use crate::modules::estimates::core::evolve::evolve;
use crate::modules::estimates::core::state::EstimateState;
use crate::modules::estimates::use_cases::list_estimates_by_project::projection::EstimateRow;

pub enum Mutation {
    Upsert(EstimateRow),
}

/// Folds one event onto the current read model row of its estimate. Events at
/// or below the row's version were already folded and yield no mutation.
pub fn apply(
    stream_id: &str,
    version: i64,
    current: Option<EstimateRow>,
    event: &EstimateEvent,
) -> Vec<Mutation> {
    if current.as_ref().is_some_and(|row| row.version() >= version) {
        return Vec::new();
    }
    let stream_key = format!("{stream_id}:{version}");
    let state = match current {
        Some(row) => EstimateState::Recorded(Box::new(row.estimate)),
        None => EstimateState::None,
    };
    match evolve(state, event.clone()).into_estimate() {
        Some(estimate) => vec![Mutation::Upsert(EstimateRow {
            estimate,
            last_event_id: Some(stream_key),
        })],
        None => Vec::new(),
    }
}
