use thiserror::Error;
use crate::product_actor::ProductError;
use crate::report_actor::ReportError;

/// A failed remote call made while synchronising reports.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SyncError {
    #[error("Loading reports failed: {0}")]
    Load(#[source] ReportError),
    #[error("Stock update for product {product_id} failed: {source}")]
    StockUpdate {
        product_id: String,
        #[source]
        source: ProductError,
    },
    #[error("Stock update task failed: {0}")]
    StockTask(String),
    #[error("Creating report failed: {0}")]
    Create(#[source] ReportError),
    #[error("Deleting report {id} failed: {source}")]
    Delete {
        id: String,
        #[source]
        source: ReportError,
    },
}
