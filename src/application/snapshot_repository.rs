// Repository trait for dashboard snapshot access
use crate::domain::snapshot::DashboardSnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Fetch one complete snapshot from the data source.
    async fn fetch_snapshot(&self) -> anyhow::Result<DashboardSnapshot>;
}
