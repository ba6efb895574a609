//! Committer that records every batch and always succeeds.

use async_trait::async_trait;
use safe_route::{CommitError, RouteCommitter, RouteSpec};
use tokio::sync::Mutex;

/// Accepts every commit and keeps the batches for later assertions.
#[derive(Default)]
pub struct RecordingCommitter {
    batches: Mutex<Vec<Vec<RouteSpec>>>,
}

impl RecordingCommitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Batches committed so far, in call order.
    pub async fn batches(&self) -> Vec<Vec<RouteSpec>> {
        self.batches.lock().await.clone()
    }

    pub async fn commit_count(&self) -> usize {
        self.batches.lock().await.len()
    }
}

#[async_trait]
impl RouteCommitter for RecordingCommitter {
    async fn commit(&self, routes: &[RouteSpec]) -> Result<(), CommitError> {
        self.batches.lock().await.push(routes.to_vec());
        Ok(())
    }
}
