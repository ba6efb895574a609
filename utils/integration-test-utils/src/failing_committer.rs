//! Committer that always raises a configured error.

use async_trait::async_trait;
use safe_route::{CommitError, RouteCommitter, RouteSpec};

/// Fails every commit with the error given at construction, for exercising
/// the guard's pass-through contract.
pub struct FailingCommitter {
    error: CommitError,
}

impl FailingCommitter {
    pub fn new(error: CommitError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl RouteCommitter for FailingCommitter {
    async fn commit(&self, _routes: &[RouteSpec]) -> Result<(), CommitError> {
        Err(self.error.clone())
    }
}
