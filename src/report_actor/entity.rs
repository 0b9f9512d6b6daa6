use crate::actor_framework::Entity;
use crate::domain::{Report, ReportDraft};

impl Entity for Report {
    type Id = String;
    type CreateParams = ReportDraft;
    type Patch = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new Report from a draft.
    ///
    /// # Notes
    /// A report without sales is rejected.
    fn from_create_params(id: String, draft: ReportDraft) -> Result<Self, String> {
        if draft.sales.is_empty() {
            return Err("Report must contain at least one sale".to_string());
        }
        Ok(Self {
            id,
            date: draft.date,
            sales: draft.sales,
            total: draft.total,
        })
    }

    /// Reports are never updated in place.
    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Err(format!("Report {} cannot be modified", self.id))
    }
}
