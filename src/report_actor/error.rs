use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during report operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReportError {
    #[error("Report not found: {0}")]
    NotFound(String),
    #[error("Report rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ReportError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => ReportError::NotFound(id),
            FrameworkError::Rejected(reason) => ReportError::Rejected(reason),
            other => ReportError::ActorCommunicationError(other.to_string()),
        }
    }
}
