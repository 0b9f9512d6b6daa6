use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::domain::{Report, ReportDraft};
use crate::report_actor::ReportError;
use crate::actor_framework::ResourceClient;
use crate::report_sync::ReportService;

/// Client for interacting with the Report actor.
#[derive(Clone)]
pub struct ReportClient {
    inner: ResourceClient<Report>,
}

impl_basic_client!(ReportClient, Report, ReportError, report);

impl ReportClient {
    #[instrument(skip(self, draft), fields(sales = draft.sales.len()))]
    pub async fn create_report(&self, draft: ReportDraft) -> Result<Report, ReportError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(ReportError::from)
    }
}

#[async_trait]
impl ReportService for ReportClient {
    async fn get_all(&self) -> Result<Vec<Report>, ReportError> {
        self.list_reports().await
    }

    async fn add(&self, draft: ReportDraft) -> Result<Report, ReportError> {
        self.create_report(draft).await
    }

    async fn delete(&self, id: &str) -> Result<(), ReportError> {
        self.delete_report(id.to_string()).await
    }
}
