#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::NaiveDate;
    use crate::app_system::{ReportSystem, SystemConfig};
    use crate::domain::{Product, ProductCreate, ReportDraft, Sale};
    use crate::notifications::Notification;
    use crate::notifications::testing::RecordingSink;
    use crate::report_sync::{Outcome, SyncError};

    fn start() -> (ReportSystem, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let system = ReportSystem::new(&SystemConfig::default(), sink.clone());
        (system, sink)
    }

    async fn seed(system: &ReportSystem, name: &str, quantity: Option<i64>) -> Product {
        system.product_client
            .create_product(ProductCreate { name: name.to_string(), price: 5.0, quantity })
            .await
            .unwrap()
    }

    fn draft(sales: Vec<Sale>) -> ReportDraft {
        ReportDraft::new(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(), sales)
    }

    #[tokio::test]
    async fn test_report_lifecycle_against_live_services() {
        let (mut system, sink) = start();
        let coffee = seed(&system, "Coffee", Some(10)).await;
        let gift_card = seed(&system, "Gift card", None).await;

        let store = &mut system.store;
        assert_eq!(store.load_products().await, Ok(2));
        assert_eq!(store.load_reports().await, Outcome::Applied(0));

        let report = store.add_report(draft(vec![
            Sale::new(&coffee.id, "Coffee", 3, 5.0),
            Sale::new(&coffee.id, "Coffee", 2, 5.0),
            Sale::new(&gift_card.id, "Gift card", 1, 20.0),
        ])).await.unwrap();

        assert_eq!(report.id, "report_1");
        assert_eq!(store.report_list()[0], report);
        assert_eq!(store.products.find(&coffee.id).and_then(|p| p.quantity), Some(5));
        assert_eq!(store.products.find(&gift_card.id).and_then(|p| p.quantity), None);

        let remote = system.product_client.get_product(coffee.id.clone()).await.unwrap().unwrap();
        assert_eq!(remote.quantity, Some(5));

        // Deleting the report never restores stock.
        let store = &mut system.store;
        assert!(store.delete_report(&report.id).await.is_applied());
        assert!(store.report_list().is_empty());
        let remote = system.product_client.get_product(coffee.id.clone()).await.unwrap().unwrap();
        assert_eq!(remote.quantity, Some(5));

        system.shutdown().await.unwrap();
        assert_eq!(sink.notifications(), vec![
            Notification::success("Report created successfully"),
            Notification::success("Report deleted successfully"),
        ]);
    }

    #[tokio::test]
    async fn test_add_then_delete_returns_to_previous_list() {
        let (mut system, _sink) = start();
        let tea = seed(&system, "Tea", Some(50)).await;
        let store = &mut system.store;
        store.load_products().await.unwrap();

        for quantity in [1, 2] {
            store.add_report(draft(vec![Sale::new(&tea.id, "Tea", quantity, 5.0)])).await.unwrap();
        }
        let before = store.report_list().to_vec();

        let added = store.add_report(draft(vec![Sale::new(&tea.id, "Tea", 4, 5.0)])).await.unwrap();
        assert_eq!(store.report_list()[0].id, added.id);
        store.delete_report(&added.id).await;

        assert_eq!(store.report_list(), before.as_slice());
        assert_eq!(store.products.find(&tea.id).and_then(|p| p.quantity), Some(43));

        // A fresh load sees the same collection, oldest first.
        store.load_reports().await;
        let mut reloaded = store.report_list().to_vec();
        reloaded.reverse();
        assert_eq!(reloaded, before);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_failures_are_reported_without_touching_state() {
        let (mut system, sink) = start();
        let tea = seed(&system, "Tea", Some(3)).await;
        let store = &mut system.store;
        store.load_products().await.unwrap();

        let outcome = store.delete_report("report_404").await;
        assert!(matches!(outcome.error(), Some(SyncError::Delete { .. })));

        // The report service rejects a report without sales.
        let err = store.add_report(draft(vec![])).await.unwrap_err();
        assert!(matches!(err, SyncError::Create(_)));
        assert!(store.report_list().is_empty());
        assert_eq!(store.products.find(&tea.id).and_then(|p| p.quantity), Some(3));

        system.shutdown().await.unwrap();
        assert_eq!(sink.notifications(), vec![
            Notification::error("Failed to delete report"),
            Notification::error("Failed to create report"),
        ]);
    }
}
