mod domain;
mod clients;
mod notifications;
mod report_sync;

mod app_system;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

mod actor_framework;
mod product_actor;
mod report_actor;

use std::sync::Arc;
use tracing::{error, info, Instrument};
use crate::domain::{ProductCreate, ReportDraft, Sale};
use crate::app_system::{ReportSystem, SystemConfig, SystemError, setup_tracing};
use crate::notifications::TracingSink;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = SystemConfig::load()?;
    setup_tracing(&config.log_filter);

    info!("Starting report sync");

    let mut system = ReportSystem::new(&config, Arc::new(TracingSink));

    // Seed the product service
    let span = tracing::info_span!("seed_products");
    let seeded = async {
        let coffee = system.product_client
            .create_product(ProductCreate { name: "Coffee".into(), price: 2.5, quantity: Some(40) })
            .await;
        let gift_card = system.product_client
            .create_product(ProductCreate { name: "Gift card".into(), price: 20.0, quantity: None })
            .await;
        coffee.and_then(|coffee| gift_card.map(|gift_card| (coffee, gift_card)))
    }
    .instrument(span)
    .await;
    let (coffee, gift_card) = seeded.map_err(|e| SystemError::Seed(e.to_string()))?;

    let store = &mut system.store;
    if let Err(e) = store.load_products().await {
        error!(error = %e, "Products unavailable, stock will not be decremented");
    }
    if let Some(e) = store.load_reports().await.error() {
        error!(error = %e, "Starting with an empty report list");
    }

    let draft = ReportDraft::new(chrono::Local::now().date_naive(), vec![
        Sale::new(&coffee.id, &coffee.name, 3, coffee.price),
        Sale::new(&coffee.id, &coffee.name, 2, coffee.price),
        Sale::new(&gift_card.id, &gift_card.name, 1, gift_card.price),
    ]);

    let span = tracing::info_span!("report_flow");
    async {
        let report = store.add_report(draft).await?;
        info!(report_id = %report.id, total = report.total, "Report stored");

        if let Some(product) = store.products.find(&coffee.id) {
            info!(product_id = %product.id, quantity = ?product.quantity, "Stock after report");
        }

        store.delete_report(&report.id).await;
        info!(reports = store.report_list().len(), "Report flow finished");
        Ok::<_, SystemError>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
