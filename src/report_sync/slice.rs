use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, instrument, warn};
use crate::domain::{Product, Report, ReportDraft};
use super::error::SyncError;
use super::events::{SyncEvent, SyncEvents};
use super::ports::{ProductService, ReportService};
use super::stock::StockUpdates;

/// Result of an operation that recovers locally instead of failing its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The remote call succeeded and local state now reflects it.
    Applied(T),
    /// The remote call failed; local state was recovered and the error reported.
    Recovered(SyncError),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn error(&self) -> Option<&SyncError> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Recovered(err) => Some(err),
        }
    }
}

/// Cached report list kept in step with the report service.
///
/// Newest reports come first. Operations are expected to be driven one at a
/// time; concurrent `add_report` calls against the same product cache are not
/// coordinated.
pub struct ReportSyncSlice {
    reports: Vec<Report>,
    report_service: Arc<dyn ReportService>,
    product_service: Arc<dyn ProductService>,
    events: SyncEvents,
}

impl ReportSyncSlice {
    pub fn new(
        report_service: Arc<dyn ReportService>,
        product_service: Arc<dyn ProductService>,
        events: SyncEvents,
    ) -> Self {
        Self {
            reports: Vec::new(),
            report_service,
            product_service,
            events,
        }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Replaces the cached list with the remote one.
    ///
    /// On failure the cache is emptied rather than left stale.
    #[instrument(skip(self))]
    pub async fn load_reports(&mut self) -> Outcome<usize> {
        match self.report_service.get_all().await {
            Ok(reports) => {
                let count = reports.len();
                self.reports = reports;
                info!(count, "Reports loaded");
                self.events.emit(SyncEvent::ReportsLoaded { count });
                Outcome::Applied(count)
            }
            Err(e) => {
                error!(error = %e, "Error loading reports");
                self.reports.clear();
                let err = SyncError::Load(e);
                self.events.emit(SyncEvent::ReportsLoadFailed { error: err.to_string() });
                Outcome::Recovered(err)
            }
        }
    }

    /// Persists stock decrements for every product sold in `draft`, then the
    /// report itself.
    ///
    /// `products` is the caller's product cache. It is read to compute the new
    /// stock levels and is only written once every remote call has succeeded,
    /// in the same step that prepends the new report. On failure neither the
    /// reports nor `products` change and the error is returned.
    #[instrument(skip(self, draft, products), fields(sales = draft.sales.len()))]
    pub async fn add_report(
        &mut self,
        draft: ReportDraft,
        products: &mut [Product],
    ) -> Result<Report, SyncError> {
        let stock_updates = StockUpdates::compute(&draft.sales, products);

        match self.persist_report(draft, &stock_updates).await {
            Ok(report) => {
                self.reports.insert(0, report.clone());
                stock_updates.apply(products);
                info!(report_id = %report.id, updated_products = stock_updates.len(), "Report added");
                self.events.emit(SyncEvent::ReportAdded {
                    report_id: report.id.clone(),
                    updated_products: stock_updates.product_ids(),
                });
                Ok(report)
            }
            Err(e) => {
                error!(error = %e, "Error adding report");
                self.events.emit(SyncEvent::ReportAddFailed { error: e.to_string() });
                Err(e)
            }
        }
    }

    async fn persist_report(
        &self,
        draft: ReportDraft,
        stock_updates: &StockUpdates,
    ) -> Result<Report, SyncError> {
        self.push_stock_updates(stock_updates).await?;

        self.report_service.add(draft).await.map_err(|e| {
            if !stock_updates.is_empty() {
                warn!(products = ?stock_updates.product_ids(), "Report creation failed after stock was updated; stock is not restored");
            }
            SyncError::Create(e)
        })
    }

    /// Sends one update per affected product concurrently and waits for all of them.
    async fn push_stock_updates(&self, stock_updates: &StockUpdates) -> Result<(), SyncError> {
        let mut pending = JoinSet::new();
        for product in stock_updates.products() {
            let service = Arc::clone(&self.product_service);
            let product = product.clone();
            pending.spawn(async move {
                let product_id = product.id.clone();
                match service.update(product).await {
                    Ok(()) => Ok(product_id),
                    Err(source) => Err(SyncError::StockUpdate { product_id, source }),
                }
            });
        }

        let mut persisted = Vec::new();
        let mut failure = None;
        while let Some(joined) = pending.join_next().await {
            match joined {
                Ok(Ok(product_id)) => persisted.push(product_id),
                Ok(Err(err)) => {
                    error!(error = %err, "Stock update failed");
                    if failure.is_none() {
                        failure = Some(err);
                    }
                }
                Err(join_err) => {
                    error!(error = %join_err, "Stock update task failed");
                    if failure.is_none() {
                        failure = Some(SyncError::StockTask(join_err.to_string()));
                    }
                }
            }
        }

        match failure {
            Some(err) => {
                if !persisted.is_empty() {
                    persisted.sort();
                    warn!(products = ?persisted, "Stock updates already persisted are not rolled back");
                }
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Deletes the report remotely, then drops it from the cache.
    ///
    /// On failure the cache is left as it was.
    #[instrument(skip(self))]
    pub async fn delete_report(&mut self, id: &str) -> Outcome<()> {
        match self.report_service.delete(id).await {
            Ok(()) => {
                if let Some(position) = self.reports.iter().position(|r| r.id == id) {
                    self.reports.remove(position);
                }
                info!(report_id = %id, "Report deleted");
                self.events.emit(SyncEvent::ReportDeleted { report_id: id.to_string() });
                Outcome::Applied(())
            }
            Err(source) => {
                error!(report_id = %id, error = %source, "Error deleting report");
                let err = SyncError::Delete { id: id.to_string(), source };
                self.events.emit(SyncEvent::ReportDeleteFailed {
                    report_id: id.to_string(),
                    error: err.to_string(),
                });
                Outcome::Recovered(err)
            }
        }
    }
}
