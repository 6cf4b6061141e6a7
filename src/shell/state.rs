use crate::modules::estimates::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::estimates::core::estimate::{Estimate, stream_id_for};
use crate::modules::estimates::core::events::EstimateEvent;
use crate::modules::estimates::use_cases::create_estimate::handler::CreateEstimateHandler;
use crate::modules::estimates::use_cases::list_estimates_by_project::handler::Projector;
use crate::modules::estimates::use_cases::list_estimates_by_project::queries_port::EstimateQueries;
use crate::modules::estimates::use_cases::revise_estimate::handler::ReviseEstimateHandler;
use crate::modules::estimates::use_cases::transition_estimate_status::handler::TransitionEstimateStatusHandler;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::config::EstimateSettings;
use std::sync::Arc;

pub type EstimateEventStore = InMemoryEventStore<EstimateEvent>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn EstimateQueries + Send + Sync>,
    pub create_handler: Arc<CreateEstimateHandler<EstimateEventStore>>,
    pub revise_handler: Arc<ReviseEstimateHandler<EstimateEventStore>>,
    pub transition_handler: Arc<TransitionEstimateStatusHandler<EstimateEventStore>>,
    pub event_store: Arc<EstimateEventStore>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
    pub default_user_id: String,
}

impl AppState {
    pub fn in_memory(settings: &EstimateSettings) -> Self {
        Self::with_stores(
            Arc::new(EstimateEventStore::new()),
            Arc::new(InMemoryProjections::new()),
            settings,
        )
    }

    pub fn with_stores(
        event_store: Arc<EstimateEventStore>,
        projections: Arc<InMemoryProjections>,
        settings: &EstimateSettings,
    ) -> Self {
        let projector = Arc::new(Projector::new(
            "estimates-by-project",
            projections.clone(),
            projections.clone(),
        ));
        Self {
            queries: projections,
            create_handler: Arc::new(
                CreateEstimateHandler::new(event_store.clone())
                    .with_validity_days(settings.validity_days),
            ),
            revise_handler: Arc::new(ReviseEstimateHandler::new(event_store.clone())),
            transition_handler: Arc::new(TransitionEstimateStatusHandler::new(
                event_store.clone(),
                settings.transition_policy,
            )),
            event_store,
            projector,
            default_user_id: settings.default_user_id.clone(),
        }
    }

    /// Inline projection: brings the estimate's read model row up to the
    /// stream head, folding any events an earlier write failed to project.
    pub async fn project_latest(&self, estimate: &Estimate) -> Result<(), ApplicationError> {
        let stream_id = stream_id_for(&estimate.estimate_id);
        let loaded = self.event_store.load(&stream_id).await?;
        self.projector
            .catch_up(&stream_id, &loaded.events)
            .await
            .map_err(|e| ApplicationError::Projection(e.to_string()))
    }
}
