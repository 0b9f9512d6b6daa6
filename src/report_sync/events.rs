use tokio::sync::broadcast;
use tracing::trace;

/// What happened to the report list, published after every slice operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    ReportsLoaded { count: usize },
    ReportsLoadFailed { error: String },
    ReportAdded { report_id: String, updated_products: Vec<String> },
    ReportAddFailed { error: String },
    ReportDeleted { report_id: String },
    ReportDeleteFailed { report_id: String, error: String },
}

/// Broadcast channel carrying [`SyncEvent`]s to any number of subscribers.
#[derive(Debug, Clone)]
pub struct SyncEvents {
    sender: broadcast::Sender<SyncEvent>,
}

impl SyncEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.sender.subscribe()
    }

    /// Publishes without waiting. Having no subscribers is not an error.
    pub fn emit(&self, event: SyncEvent) {
        if let Err(broadcast::error::SendError(event)) = self.sender.send(event) {
            trace!(?event, "No subscribers for sync event");
        }
    }
}
