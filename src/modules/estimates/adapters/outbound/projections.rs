use crate::modules::estimates::use_cases::list_estimates_by_project::projection::EstimateRow;
use async_trait::async_trait;

#[async_trait]
pub trait EstimateProjectionRepository: Send + Sync {
    async fn find(&self, estimate_id: &str) -> anyhow::Result<Option<EstimateRow>>;
    async fn upsert(&self, row: EstimateRow) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
