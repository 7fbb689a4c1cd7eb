// HTTP snapshot source implementation
use crate::application::snapshot_repository::SnapshotRepository;
use crate::domain::snapshot::DashboardSnapshot;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Fetches the snapshot from a JSON endpoint. One GET per load, default
/// client timeouts, no retries; the fallback policy lives in the service.
#[derive(Debug, Clone)]
pub struct HttpSnapshotRepository {
    url: String,
    client: reqwest::Client,
}

/// The snapshot document nests the dashboard under a root key.
#[derive(Debug, Deserialize)]
struct SnapshotEnvelope {
    dashboard: DashboardSnapshot,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("snapshot endpoint returned status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("malformed snapshot payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl HttpSnapshotRepository {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_envelope(&self) -> Result<SnapshotEnvelope, SnapshotError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| SnapshotError::Request {
                url: self.url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SnapshotError::Status {
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SnapshotError::Request {
                url: self.url.clone(),
                source,
            })?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SnapshotRepository for HttpSnapshotRepository {
    async fn fetch_snapshot(&self) -> Result<DashboardSnapshot> {
        let envelope = self
            .fetch_envelope()
            .await
            .context("failed to load dashboard snapshot")?;
        Ok(envelope.dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_requires_the_dashboard_root_key() {
        let raw = r#"{ "dashboard": { "recentOrders": [] } }"#;
        let envelope: SnapshotEnvelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.dashboard.recent_orders.is_empty());

        let missing = serde_json::from_str::<SnapshotEnvelope>("{}");
        assert!(missing.is_err());
    }

    #[test]
    fn malformed_payload_maps_to_a_parse_error() {
        let err = serde_json::from_str::<SnapshotEnvelope>("not json")
            .map_err(SnapshotError::from)
            .unwrap_err();
        assert!(matches!(err, SnapshotError::Malformed(_)));
    }
}
