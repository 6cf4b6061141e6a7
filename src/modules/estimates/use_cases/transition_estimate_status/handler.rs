use crate::modules::estimates::core::decision::Decision;
use crate::modules::estimates::core::estimate::{Estimate, stream_id_for};
use crate::modules::estimates::core::events::EstimateEvent;
use crate::modules::estimates::core::evolve::evolve;
use crate::modules::estimates::core::state::EstimateState;
use crate::modules::estimates::core::status::TransitionPolicy;
use crate::modules::estimates::use_cases::transition_estimate_status::command::TransitionEstimateStatus;
use crate::modules::estimates::use_cases::transition_estimate_status::decide::decide_transition;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct TransitionEstimateStatusHandler<TEventStore>
where
    TEventStore: EventStore<EstimateEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    policy: TransitionPolicy,
}

impl<TEventStore> TransitionEstimateStatusHandler<TEventStore>
where
    TEventStore: EventStore<EstimateEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>, policy: TransitionPolicy) -> Self {
        Self {
            event_store,
            policy,
        }
    }

    pub async fn handle(
        &self,
        command: TransitionEstimateStatus,
    ) -> Result<Estimate, ApplicationError> {
        let estimate_id = command.estimate_id.clone();
        let stream_id = stream_id_for(&estimate_id);
        let stream = self.event_store.load(&stream_id).await?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(EstimateState::None, evolve);

        match decide_transition(&state, command, self.policy) {
            Decision::Accepted { events } => {
                self.event_store
                    .append(&stream_id, stream.version, &events)
                    .await?;
                let estimate = events
                    .into_iter()
                    .fold(state, evolve)
                    .into_estimate()
                    .ok_or_else(|| {
                        ApplicationError::Unexpected("transitioned estimate did not fold".into())
                    })?;
                tracing::info!(
                    %estimate_id,
                    status = %estimate.status,
                    changed_by = %estimate.updated_by,
                    "estimate status changed"
                );
                Ok(estimate)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%estimate_id, %reason, "estimate status change rejected");
                Err(ApplicationError::rejected(reason, &estimate_id))
            }
        }
    }
}
