//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use atelier::orders::{NewOrder, Order, OrderStatus, OrderUuid};
use jiff::Timestamp;
use mockall::automock;
use serde_json::json;

use crate::{
    domain::orders::errors::OrdersServiceError,
    store::{
        CatalogStore, Direction, Filter, Query, Table,
        rows::{decode, decode_all, decode_first, encode},
    },
};

#[derive(Clone)]
pub struct StoreOrdersService {
    store: Arc<dyn CatalogStore>,
}

impl StoreOrdersService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrdersService for StoreOrdersService {
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let rows = self
            .store
            .select(
                Table::Orders,
                Query::new().order_by("created_at", Direction::Desc),
            )
            .await?;

        Ok(decode_all(rows)?)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let rows = self
            .store
            .select(Table::Orders, Query::new().eq("id", order).limit(1))
            .await?;

        Ok(decode_first(rows)?)
    }

    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let row = self.store.insert(Table::Orders, encode(&order)?).await?;

        Ok(decode(row)?)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
        at: Timestamp,
    ) -> Result<Order, OrdersServiceError> {
        let rows = self
            .store
            .update(
                Table::Orders,
                Filter::eq("id", order),
                json!({ "status": status, "updated_at": at }),
            )
            .await?;

        Ok(decode_first(rows)?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves all orders, newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Inserts a checked-out order. This is the only write made at checkout.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Sets an order's status, stamping `updated_at` with `at`.
    async fn update_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
        at: Timestamp,
    ) -> Result<Order, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use atelier::orders::OrderNumber;
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        store::MockCatalogStore,
        test::{order_row, rejected},
    };

    use super::*;

    fn service(store: MockCatalogStore) -> StoreOrdersService {
        StoreOrdersService::new(Arc::new(store))
    }

    fn new_order(number: &str) -> NewOrder {
        NewOrder {
            order_number: OrderNumber::from(number.to_string()),
            customer_name: "Mina Hart".to_string(),
            customer_email: "mina@example.com".to_string(),
            customer_phone: "555-0199".to_string(),
            items: Vec::new(),
            total_price: Decimal::new(9500, 2),
            shipping_address: "12 Orchard Lane".to_string(),
            special_instructions: None,
            status: OrderStatus::Pending,
        }
    }

    #[tokio::test]
    async fn create_order_inserts_snapshot_once() -> TestResult {
        let mut store = MockCatalogStore::new();
        let id = OrderUuid::new();

        store
            .expect_insert()
            .once()
            .withf(|table, row| {
                *table == Table::Orders
                    && row["order_number"] == "ORD-1-AAAA"
                    && row["total_price"] == 95.0
                    && row["status"] == "pending"
            })
            .return_once(move |_, _| Ok(order_row(id, "ORD-1-AAAA", OrderStatus::Pending)));

        let order = service(store).create_order(new_order("ORD-1-AAAA")).await?;

        assert_eq!(order.id, id);
        assert_eq!(order.total_price, Decimal::new(95, 0));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_order_number_is_already_exists() {
        let mut store = MockCatalogStore::new();

        store
            .expect_insert()
            .once()
            .return_once(|_, _| Err(rejected("23505")));

        let result = service(store).create_order(new_order("ORD-1-AAAA")).await;

        assert!(
            matches!(result, Err(OrdersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_status_patches_status_and_timestamp() -> TestResult {
        let mut store = MockCatalogStore::new();
        let id = OrderUuid::new();
        let at: Timestamp = "2024-06-11T08:00:00Z".parse()?;

        store
            .expect_update()
            .once()
            .withf(move |table, filter, patch| {
                *table == Table::Orders
                    && *filter == Filter::eq("id", id)
                    && patch["status"] == "shipped"
                    && patch["updated_at"] == "2024-06-11T08:00:00Z"
            })
            .return_once(move |_, _, _| Ok(vec![order_row(id, "ORD-1-AAAA", OrderStatus::Shipped)]));

        let order = service(store)
            .update_status(id, OrderStatus::Shipped, at)
            .await?;

        assert_eq!(order.status, OrderStatus::Shipped);

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_order_is_not_found() {
        let mut store = MockCatalogStore::new();

        store
            .expect_select()
            .once()
            .return_once(|_, _| Ok(Vec::new()));

        let result = service(store).get_order(OrderUuid::new()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
