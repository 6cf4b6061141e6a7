use crate::modules::estimates::core::estimate::Estimate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateState {
    None,
    Recorded(Box<Estimate>),
}

impl EstimateState {
    pub fn estimate(&self) -> Option<&Estimate> {
        match self {
            EstimateState::None => None,
            EstimateState::Recorded(estimate) => Some(estimate),
        }
    }

    pub fn into_estimate(self) -> Option<Estimate> {
        match self {
            EstimateState::None => None,
            EstimateState::Recorded(estimate) => Some(*estimate),
        }
    }
}
