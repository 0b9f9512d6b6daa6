use std::sync::Arc;
use tracing::{error, info, instrument};
use crate::domain::{Product, Report, ReportDraft};
use crate::product_actor::ProductError;
use crate::report_sync::{Outcome, ProductService, ReportSyncSlice, SyncError};

/// Cached product list. Owned here, read and patched by report sync.
pub struct ProductSlice {
    items: Vec<Product>,
    service: Arc<dyn ProductService>,
}

impl ProductSlice {
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { items: Vec::new(), service }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Replaces the cached products with the remote list, or empties the cache on failure.
    #[instrument(skip(self))]
    pub async fn load_products(&mut self) -> Result<usize, ProductError> {
        match self.service.get_all().await {
            Ok(products) => {
                self.items = products;
                info!(count = self.items.len(), "Products loaded");
                Ok(self.items.len())
            }
            Err(e) => {
                error!(error = %e, "Error loading products");
                self.items.clear();
                Err(e)
            }
        }
    }
}

/// Application state: the report slice and the product slice it depends on.
pub struct AppStore {
    pub reports: ReportSyncSlice,
    pub products: ProductSlice,
}

impl AppStore {
    pub fn new(reports: ReportSyncSlice, products: ProductSlice) -> Self {
        Self { reports, products }
    }

    pub fn report_list(&self) -> &[Report] {
        self.reports.reports()
    }

    pub async fn load_products(&mut self) -> Result<usize, ProductError> {
        self.products.load_products().await
    }

    pub async fn load_reports(&mut self) -> Outcome<usize> {
        self.reports.load_reports().await
    }

    /// Adds a report against the currently cached products.
    ///
    /// Call [`load_products`](Self::load_products) first; uncached products are
    /// not decremented.
    pub async fn add_report(&mut self, draft: ReportDraft) -> Result<Report, SyncError> {
        self.reports.add_report(draft, &mut self.products.items).await
    }

    pub async fn delete_report(&mut self, id: &str) -> Outcome<()> {
        self.reports.delete_report(id).await
    }
}
