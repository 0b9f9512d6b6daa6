use async_trait::async_trait;
use crate::domain::{Product, Report, ReportDraft};
use crate::product_actor::ProductError;
use crate::report_actor::ReportError;

/// Remote persistence for reports.
#[async_trait]
pub trait ReportService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Report>, ReportError>;

    /// Persists a draft and returns it with its server-assigned id.
    async fn add(&self, draft: ReportDraft) -> Result<Report, ReportError>;

    async fn delete(&self, id: &str) -> Result<(), ReportError>;
}

/// Remote persistence for products.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Persists the product's current attributes.
    async fn update(&self, product: Product) -> Result<(), ProductError>;
}
