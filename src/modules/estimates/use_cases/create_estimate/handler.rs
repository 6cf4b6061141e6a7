use crate::modules::estimates::core::decision::Decision;
use crate::modules::estimates::core::estimate::{DEFAULT_VALIDITY_DAYS, Estimate, stream_id_for};
use crate::modules::estimates::core::events::EstimateEvent;
use crate::modules::estimates::core::evolve::evolve;
use crate::modules::estimates::core::state::EstimateState;
use crate::modules::estimates::use_cases::create_estimate::command::CreateEstimate;
use crate::modules::estimates::use_cases::create_estimate::decide::decide_create;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct CreateEstimateHandler<TEventStore>
where
    TEventStore: EventStore<EstimateEvent> + Send + Sync + 'static,
{
    event_store: Arc<TEventStore>,
    validity_days: i64,
}

impl<TEventStore> CreateEstimateHandler<TEventStore>
where
    TEventStore: EventStore<EstimateEvent> + Send + Sync + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self {
            event_store,
            validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }

    pub fn with_validity_days(mut self, validity_days: i64) -> Self {
        self.validity_days = validity_days;
        self
    }

    pub async fn handle(&self, command: CreateEstimate) -> Result<Estimate, ApplicationError> {
        let estimate_id = command.estimate_id.clone();
        let stream_id = stream_id_for(&estimate_id);
        let stream = self.event_store.load(&stream_id).await?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(EstimateState::None, evolve);

        match decide_create(&state, command, self.validity_days) {
            Decision::Accepted { events } => {
                self.event_store
                    .append(&stream_id, stream.version, &events)
                    .await?;
                let estimate = events
                    .into_iter()
                    .fold(state, evolve)
                    .into_estimate()
                    .ok_or_else(|| {
                        ApplicationError::Unexpected("created estimate did not fold".into())
                    })?;
                tracing::info!(
                    estimate_id = %estimate.estimate_id,
                    project_id = %estimate.project_id,
                    amount = %estimate.amount,
                    "estimate created"
                );
                Ok(estimate)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%estimate_id, %reason, "create estimate rejected");
                Err(ApplicationError::rejected(reason, &estimate_id))
            }
        }
    }
}
