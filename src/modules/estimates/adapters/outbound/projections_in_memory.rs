use crate::modules::estimates::adapters::outbound::projections::{
    EstimateProjectionRepository, WatermarkRepository,
};
use crate::modules::estimates::core::estimate::Estimate;
use crate::modules::estimates::use_cases::list_estimates_by_project::projection::EstimateRow;
use crate::modules::estimates::use_cases::list_estimates_by_project::queries_port::EstimateQueries;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Rows {
    by_id: HashMap<String, (u64, EstimateRow)>,
    next_sequence: u64,
}

/// Read model rows keyed by estimate id. Each row keeps the sequence number of
/// its first insert so listings stay stable when creation times collide.
#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<Rows>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl EstimateProjectionRepository for InMemoryProjections {
    async fn find(&self, estimate_id: &str) -> anyhow::Result<Option<EstimateRow>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        Ok(self
            .rows
            .read()
            .await
            .by_id
            .get(estimate_id)
            .map(|(_, row)| row.clone()))
    }

    async fn upsert(&self, row: EstimateRow) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let mut guard = self.rows.write().await;
        let rows = &mut *guard;
        let existing = rows
            .by_id
            .get(&row.estimate.estimate_id)
            .map(|(sequence, stored)| (*sequence, stored.version()));
        let sequence = match existing {
            // a racing writer that folded fewer events must not roll the row back
            Some((_, stored_version)) if stored_version > row.version() => return Ok(()),
            Some((sequence, _)) => sequence,
            None => {
                rows.next_sequence += 1;
                rows.next_sequence
            }
        };
        rows.by_id
            .insert(row.estimate.estimate_id.clone(), (sequence, row));
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl EstimateQueries for InMemoryProjections {
    async fn list_by_project_id(&self, project_id: &str) -> anyhow::Result<Vec<Estimate>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let guard = self.rows.read().await;
        let mut items: Vec<&(u64, EstimateRow)> = guard
            .by_id
            .values()
            .filter(|(_, row)| row.estimate.project_id == project_id)
            .collect();

        items.sort_by_key(|(sequence, row)| (row.estimate.created_at, *sequence));
        items.reverse();

        Ok(items
            .into_iter()
            .map(|(_, row)| row.estimate.clone())
            .collect())
    }
}
