pub mod v1 {
    pub mod estimate_created;
    pub mod estimate_revised;
    pub mod estimate_status_changed;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum EstimateEvent {
    EstimateCreatedV1(v1::estimate_created::EstimateCreatedV1),
    EstimateRevisedV1(v1::estimate_revised::EstimateRevisedV1),
    EstimateStatusChangedV1(v1::estimate_status_changed::EstimateStatusChangedV1),
}

impl EstimateEvent {
    pub fn estimate_id(&self) -> &str {
        match self {
            EstimateEvent::EstimateCreatedV1(e) => &e.estimate_id,
            EstimateEvent::EstimateRevisedV1(e) => &e.estimate_id,
            EstimateEvent::EstimateStatusChangedV1(e) => &e.estimate_id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EstimateEvent::EstimateCreatedV1(_) => "EstimateCreated",
            EstimateEvent::EstimateRevisedV1(_) => "EstimateRevised",
            EstimateEvent::EstimateStatusChangedV1(_) => "EstimateStatusChanged",
        }
    }
}
