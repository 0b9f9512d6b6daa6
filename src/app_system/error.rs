use thiserror::Error;
use super::config::ConfigError;
use crate::report_sync::SyncError;

/// Errors surfaced by system startup, the demo flow, and shutdown.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error("Seeding products failed: {0}")]
    Seed(String),
    #[error("Task failed: {0}")]
    TaskFailed(String),
}
