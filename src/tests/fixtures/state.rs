use crate::modules::estimates::core::estimate::Estimate;
use crate::modules::estimates::core::events::EstimateEvent;
use crate::modules::estimates::core::evolve::evolve;
use crate::modules::estimates::core::state::EstimateState;
use crate::tests::fixtures::events::estimate_created_v1::make_estimate_created_v1_event;

/// A freshly created draft estimate, folded from the canonical created event.
pub fn make_recorded_state() -> EstimateState {
    evolve(
        EstimateState::None,
        EstimateEvent::EstimateCreatedV1(make_estimate_created_v1_event()),
    )
}

pub fn make_recorded_estimate() -> Estimate {
    make_recorded_state().into_estimate().unwrap()
}
