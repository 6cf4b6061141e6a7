use crate::modules::estimates::core::estimate::Estimate;
use async_trait::async_trait;

#[async_trait]
pub trait EstimateQueries {
    /// Newest first by creation time; estimates created in the same
    /// millisecond keep the reverse of their insertion order.
    async fn list_by_project_id(&self, project_id: &str) -> anyhow::Result<Vec<Estimate>>;
}
