use std::collections::BTreeMap;
use tracing::debug;
use crate::domain::{Product, Sale};

/// The per-product stock levels that result from the sales of one report.
///
/// Keyed by product id so the outcome and the order of update calls do not
/// depend on the order of the sales.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockUpdates {
    updated: BTreeMap<String, Product>,
}

impl StockUpdates {
    /// Folds `sales` over the cached `products`.
    ///
    /// The first sale touching a product starts from its cached quantity and
    /// later sales for the same product keep subtracting. Sales for products
    /// that are not cached or do not track stock are skipped.
    pub fn compute(sales: &[Sale], products: &[Product]) -> Self {
        let mut updated: BTreeMap<String, Product> = BTreeMap::new();

        for sale in sales {
            let Some(product) = products.iter().find(|p| p.id == sale.product_id) else {
                debug!(product_id = %sale.product_id, "Sale references an uncached product, skipping");
                continue;
            };
            if !product.tracks_stock() {
                debug!(product_id = %product.id, "Stock not tracked, skipping");
                continue;
            }

            let entry = updated
                .entry(product.id.clone())
                .or_insert_with(|| product.clone());
            if let Some(quantity) = entry.quantity.as_mut() {
                *quantity -= i64::from(sale.quantity);
            }
        }

        Self { updated }
    }

    pub fn is_empty(&self) -> bool {
        self.updated.is_empty()
    }

    pub fn len(&self) -> usize {
        self.updated.len()
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.updated.get(product_id)
    }

    /// Updated products in product id order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.updated.values()
    }

    pub fn product_ids(&self) -> Vec<String> {
        self.updated.keys().cloned().collect()
    }

    /// Replaces every cached product that has an update, leaving the rest untouched.
    pub fn apply(&self, products: &mut [Product]) {
        for product in products.iter_mut() {
            if let Some(updated) = self.updated.get(&product.id) {
                *product = updated.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("product_1", "Coffee", 4.0, Some(10)),
            Product::new("product_2", "Tea", 3.0, Some(4)),
            Product::new("product_3", "Gift card", 20.0, None),
        ]
    }

    #[test]
    fn test_repeated_sales_accumulate_into_one_update() {
        let sales = vec![
            Sale::new("product_1", "Coffee", 3, 4.0),
            Sale::new("product_1", "Coffee", 2, 4.0),
        ];
        let updates = StockUpdates::compute(&sales, &catalog());

        assert_eq!(updates.len(), 1);
        assert_eq!(updates.get("product_1").and_then(|p| p.quantity), Some(5));
    }

    #[test]
    fn test_unknown_and_untracked_products_are_skipped() {
        let sales = vec![
            Sale::new("product_9", "Ghost", 1, 1.0),
            Sale::new("product_3", "Gift card", 1, 20.0),
        ];
        let updates = StockUpdates::compute(&sales, &catalog());
        assert!(updates.is_empty());
    }

    #[test]
    fn test_result_does_not_depend_on_sale_order() {
        let mut sales = vec![
            Sale::new("product_2", "Tea", 1, 3.0),
            Sale::new("product_1", "Coffee", 4, 4.0),
            Sale::new("product_2", "Tea", 2, 3.0),
        ];
        let forward = StockUpdates::compute(&sales, &catalog());
        sales.reverse();
        let backward = StockUpdates::compute(&sales, &catalog());

        assert_eq!(forward, backward);
        assert_eq!(forward.product_ids(), vec!["product_1", "product_2"]);
        assert_eq!(forward.get("product_2").and_then(|p| p.quantity), Some(1));
    }

    #[test]
    fn test_overselling_goes_negative() {
        let sales = vec![Sale::new("product_2", "Tea", 6, 3.0)];
        let updates = StockUpdates::compute(&sales, &catalog());
        assert_eq!(updates.get("product_2").and_then(|p| p.quantity), Some(-2));
    }

    #[test]
    fn test_apply_replaces_only_updated_products() {
        let mut products = catalog();
        let sales = vec![Sale::new("product_2", "Tea", 1, 3.0)];
        StockUpdates::compute(&sales, &products).apply(&mut products);

        assert_eq!(products[0], catalog()[0]);
        assert_eq!(products[1].quantity, Some(3));
        assert_eq!(products[2], catalog()[2]);
    }
}
