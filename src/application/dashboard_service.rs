// Dashboard service - Use case for loading the snapshot to render
use crate::application::snapshot_repository::SnapshotRepository;
use crate::domain::fallback::fallback_snapshot;
use crate::domain::snapshot::DashboardSnapshot;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn SnapshotRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn SnapshotRepository>) -> Self {
        Self { repository }
    }

    /// Obtain the snapshot for one render pass.
    ///
    /// Total from the caller's perspective: any source failure (network,
    /// bad status, malformed payload) is logged and answered with the
    /// built-in fallback dataset, so a page always renders.
    pub async fn load(&self) -> DashboardSnapshot {
        match self.repository.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("snapshot load failed, using fallback data: {:#}", e);
                fallback_snapshot()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl SnapshotRepository for FailingRepository {
        async fn fetch_snapshot(&self) -> anyhow::Result<DashboardSnapshot> {
            anyhow::bail!("connection refused")
        }
    }

    struct FixedRepository(DashboardSnapshot);

    #[async_trait]
    impl SnapshotRepository for FixedRepository {
        async fn fetch_snapshot(&self) -> anyhow::Result<DashboardSnapshot> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn load_falls_back_when_the_source_fails() {
        let service = DashboardService::new(Arc::new(FailingRepository));
        assert_eq!(service.load().await, fallback_snapshot());
    }

    #[tokio::test]
    async fn load_returns_the_fetched_snapshot_untouched() {
        let mut snapshot = fallback_snapshot();
        snapshot.recent_orders.truncate(2);
        let service = DashboardService::new(Arc::new(FixedRepository(snapshot.clone())));
        assert_eq!(service.load().await, snapshot);
    }
}
