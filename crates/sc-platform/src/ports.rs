//! Platform-internal ports.

use anyhow::Result;
use async_trait::async_trait;

/// Lifecycle of one background watch runtime.
///
/// Both operations are idempotent; the platform runtime starts and stops
/// every registered runtime as a group.
#[async_trait]
pub trait WatcherRuntimePort: Send + Sync {
    async fn start(&self) -> Result<()>;
    async fn stop(&self) -> Result<()>;
}
