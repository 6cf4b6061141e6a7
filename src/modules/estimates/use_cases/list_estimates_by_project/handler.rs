use crate::modules::estimates::adapters::outbound::projections::{
    EstimateProjectionRepository, WatermarkRepository,
};
use crate::modules::estimates::core::events::EstimateEvent;
use crate::modules::estimates::core::projections::{Mutation, apply};
use crate::modules::estimates::use_cases::list_estimates_by_project::projection::EstimateRow;
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: EstimateProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: EstimateProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    /// Folds every event of `events` (the full stream, oldest first) that the
    /// stored row has not seen yet, then writes the row once.
    pub async fn catch_up(&self, stream_id: &str, events: &[EstimateEvent]) -> anyhow::Result<()> {
        let Some(first) = events.first() else {
            return Ok(());
        };
        let stored = self.repository.find(first.estimate_id()).await?;
        let from = stored.as_ref().map_or(0, EstimateRow::version);

        let mut row = stored;
        for (index, event) in events.iter().enumerate() {
            let version = i64::try_from(index + 1)?;
            for mutation in apply(stream_id, version, row.clone(), event) {
                match mutation {
                    Mutation::Upsert(next) => row = Some(next),
                }
            }
        }

        let Some(row) = row.filter(|row| row.version() > from) else {
            return Ok(());
        };
        let version = row.version();
        let last_event_id = row.last_event_id.clone().unwrap_or_default();
        self.repository.upsert(row).await?;
        self.watermark_repository
            .set(&self.name, &last_event_id)
            .await?;
        tracing::debug!(
            projector = %self.name,
            %stream_id,
            from,
            version,
            event = events.last().map_or("none", EstimateEvent::name),
            "projected"
        );
        Ok(())
    }
}
