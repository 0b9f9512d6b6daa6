/// Represents a product in the inventory.
///
/// `quantity` is `None` when stock is not tracked for the product. Quantities
/// are signed: sales are trusted, so stock may be driven below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: Option<i64>,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub quantity: Option<i64>,
}

/// Payload for updating an existing product. Absent fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: Option<i64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Whether stock is tracked for this product.
    pub fn tracks_stock(&self) -> bool {
        self.quantity.is_some()
    }
}

impl From<&Product> for ProductPatch {
    /// Full patch carrying every attribute of `product`.
    fn from(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            price: Some(product.price),
            quantity: product.quantity,
        }
    }
}
