use crate::modules::estimates::core::decision::Decision;
use crate::modules::estimates::core::estimate::{Estimate, stream_id_for};
use crate::modules::estimates::core::events::EstimateEvent;
use crate::modules::estimates::core::evolve::evolve;
use crate::modules::estimates::core::state::EstimateState;
use crate::modules::estimates::use_cases::revise_estimate::command::ReviseEstimate;
use crate::modules::estimates::use_cases::revise_estimate::decide::decide_revise;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct ReviseEstimateHandler<TEventStore>
where
    TEventStore: EventStore<EstimateEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> ReviseEstimateHandler<TEventStore>
where
    TEventStore: EventStore<EstimateEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }

    /// The snapshot, the new items and the reset to draft land in a single
    /// append. A concurrent write to the same estimate surfaces as a version
    /// mismatch and nothing is stored.
    pub async fn handle(&self, command: ReviseEstimate) -> Result<Estimate, ApplicationError> {
        let estimate_id = command.estimate_id.clone();
        let stream_id = stream_id_for(&estimate_id);
        let stream = self.event_store.load(&stream_id).await?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(EstimateState::None, evolve);

        match decide_revise(&state, command) {
            Decision::Accepted { events } => {
                self.event_store
                    .append(&stream_id, stream.version, &events)
                    .await?;
                let estimate = events
                    .into_iter()
                    .fold(state, evolve)
                    .into_estimate()
                    .ok_or_else(|| {
                        ApplicationError::Unexpected("revised estimate did not fold".into())
                    })?;
                tracing::info!(
                    %estimate_id,
                    revision = estimate.revisions.len(),
                    amount = %estimate.amount,
                    "estimate revised"
                );
                Ok(estimate)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%estimate_id, %reason, "revise estimate rejected");
                Err(ApplicationError::rejected(reason, &estimate_id))
            }
        }
    }
}
