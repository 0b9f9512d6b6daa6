//! User-facing toasts derived from [`SyncEvent`]s.
//!
//! The sync slice only publishes events; a subscriber task turns them into
//! notifications and hands them to a [`NotificationSink`].

use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use crate::report_sync::SyncEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }

    /// The toast shown for `event`, if any. A successful load is silent.
    pub fn from_event(event: &SyncEvent) -> Option<Self> {
        match event {
            SyncEvent::ReportsLoaded { .. } => None,
            SyncEvent::ReportsLoadFailed { .. } => Some(Self::error("Failed to load reports")),
            SyncEvent::ReportAdded { .. } => Some(Self::success("Report created successfully")),
            SyncEvent::ReportAddFailed { .. } => Some(Self::error("Failed to create report")),
            SyncEvent::ReportDeleted { .. } => Some(Self::success("Report deleted successfully")),
            SyncEvent::ReportDeleteFailed { .. } => Some(Self::error("Failed to delete report")),
        }
    }
}

/// Fire-and-forget toast display.
pub trait NotificationSink: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);

    fn notify(&self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Success => self.success(&notification.message),
            NotificationLevel::Error => self.error(&notification.message),
        }
    }
}

/// Writes toasts to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn success(&self, message: &str) {
        info!(target: "toast", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(target: "toast", "{message}");
    }
}

/// Forwards events to `sink` until every event sender is gone.
pub fn spawn_notifier(
    mut events: broadcast::Receiver<SyncEvent>,
    sink: Arc<dyn NotificationSink>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Some(notification) = Notification::from_event(&event) {
                        sink.notify(&notification);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Notifier lagged behind, events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        debug!("Notifier stopped");
    })
}
