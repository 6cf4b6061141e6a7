use crate::modules::estimates::core::estimate::Estimate;

/// Read model row for one estimate. `last_event_id` is `{stream_id}:{version}`
/// of the last event folded into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateRow {
    pub estimate: Estimate,
    pub last_event_id: Option<String>,
}

impl EstimateRow {
    /// Stream version of the last folded event, 0 when unknown.
    pub fn version(&self) -> i64 {
        self.last_event_id
            .as_deref()
            .and_then(|id| id.rsplit_once(':'))
            .and_then(|(_, version)| version.parse().ok())
            .unwrap_or(0)
    }
}
