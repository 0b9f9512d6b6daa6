use chrono::NaiveDate;

/// One line item of a sales report.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl Sale {
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// A persisted batch of sales. The `id` is assigned by the report service.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: String,
    pub date: NaiveDate,
    pub sales: Vec<Sale>,
    pub total: f64,
}

/// A report that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub date: NaiveDate,
    pub sales: Vec<Sale>,
    pub total: f64,
}

impl ReportDraft {
    /// Creates a draft whose total is the sum of the sale subtotals.
    pub fn new(date: NaiveDate, sales: Vec<Sale>) -> Self {
        let total: f64 = sales.iter().map(Sale::subtotal).sum();
        Self { date, sales, total }
    }
}
