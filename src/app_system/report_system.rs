use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::{ProductClient, ReportClient};
use crate::domain::{Product, Report};
use crate::notifications::{spawn_notifier, NotificationSink};
use crate::report_sync::{ReportSyncSlice, SyncEvents};
use super::config::SystemConfig;
use super::error::SystemError;
use super::store::{AppStore, ProductSlice};

fn id_generator(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

/// Owns the report and product services and the store built on top of them.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct ReportSystem {
    pub store: AppStore,
    pub report_client: ReportClient,
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ReportSystem {
    pub fn new(config: &SystemConfig, sink: Arc<dyn NotificationSink>) -> Self {
        info!(channel_buffer = config.channel_buffer, "Starting report system");

        // 1. Report service
        let (report_actor, report_resource_client) =
            ResourceActor::<Report>::new(config.channel_buffer, id_generator("report"));
        let report_client = ReportClient::new(report_resource_client);
        let report_handle = tokio::spawn(report_actor.run());

        // 2. Product service
        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.channel_buffer, id_generator("product"));
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        // 3. Store and notifier
        let events = SyncEvents::new(config.event_capacity);
        let notifier_handle = spawn_notifier(events.subscribe(), sink);

        let reports = ReportSyncSlice::new(
            Arc::new(report_client.clone()),
            Arc::new(product_client.clone()),
            events,
        );
        let products = ProductSlice::new(Arc::new(product_client.clone()));

        Self {
            store: AppStore::new(reports, products),
            report_client,
            product_client,
            handles: vec![report_handle, product_handle, notifier_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Dropping every client closes the actor channels, and dropping the
        // store closes the event channel the notifier listens on.
        drop(self.store);
        drop(self.report_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
