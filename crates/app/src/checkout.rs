//! Checkout
//!
//! Turns a shopper's cart into a stored order. The cart is emptied only once
//! the order has been stored; any failure leaves it as it was so the shopper
//! can try again.

use std::sync::Arc;

use atelier::{
    cart::Cart,
    orders::{CustomerDetails, NewOrder, Order, OrderNumber, OrderValidationError},
};
use jiff::Timestamp;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::orders::{OrdersService, OrdersServiceError};

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] OrderValidationError),

    #[error("error submitting order, please try again")]
    Submission(#[source] OrdersServiceError),
}

impl CheckoutError {
    /// Whether resubmitting the same cart may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Submission(_))
    }
}

/// A stored order and the message shown to the shopper.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order: Order,
    pub message: String,
}

impl OrderConfirmation {
    fn new(order: Order) -> Self {
        let message = format!("Order placed successfully! Order #: {}", order.order_number);

        Self { order, message }
    }
}

#[derive(Clone)]
pub struct Checkout {
    orders: Arc<dyn OrdersService>,
}

impl Checkout {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersService>) -> Self {
        Self { orders }
    }

    /// Validate the cart and customer details, store the order with a single
    /// insert and clear the cart.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Validation`]: nothing was sent to the store.
    /// - [`CheckoutError::Submission`]: the insert failed; the cart is untouched.
    pub async fn submit(
        &self,
        cart: &mut Cart,
        customer: CustomerDetails,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let order_number = OrderNumber::generate(Timestamp::now(), &mut rand::thread_rng());
        let order = NewOrder::from_cart(cart, customer, order_number)?;

        let order_number = order.order_number.clone();
        let total = order.total_price;
        let lines = order.items.len();

        let stored = self.orders.create_order(order).await.map_err(|error| {
            error!(%order_number, %error, "order submission failed");

            CheckoutError::Submission(error)
        })?;

        info!(order_number = %stored.order_number, %total, lines, "order placed");

        cart.clear();

        Ok(OrderConfirmation::new(stored))
    }
}

#[cfg(test)]
mod tests {
    use atelier::{
        catalog::{InventoryItem, InventoryItemUuid, Photo, PhotoUuid},
        orders::{OrderStatus, OrderUuid},
    };
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::orders::MockOrdersService,
        store::{StoreError, rows::decode},
        test::order_row,
    };

    use super::*;

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name: "Mina Hart".to_string(),
            email: "mina@example.com".to_string(),
            phone: "555-0199".to_string(),
            shipping_address: "12 Orchard Lane".to_string(),
            special_instructions: None,
        }
    }

    fn filled_cart() -> Result<Cart, Box<dyn std::error::Error>> {
        let photo = Photo {
            id: PhotoUuid::new(),
            title: "Harbour Fog".to_string(),
            description: String::new(),
            category: "Landscape".to_string(),
            image_url: "https://cdn.example/harbour.jpg".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
        };
        let paper = InventoryItem {
            id: InventoryItemUuid::new(),
            photo_id: photo.id,
            size: "8x10".to_string(),
            material: "Fine Art Paper".to_string(),
            quantity: 4,
            price: Decimal::new(2500, 2),
            created_at: Timestamp::UNIX_EPOCH,
        };
        let canvas = InventoryItem {
            id: InventoryItemUuid::new(),
            size: "11x14".to_string(),
            material: "Canvas".to_string(),
            price: Decimal::new(4500, 2),
            ..paper.clone()
        };

        let mut cart = Cart::default();
        cart.add_item(&photo, &paper, 2)?;
        cart.add_item(&photo, &canvas, 1)?;

        Ok(cart)
    }

    fn stored(order: &NewOrder) -> Result<Order, StoreError> {
        let mut row = order_row(OrderUuid::new(), order.order_number.as_str(), OrderStatus::Pending);
        row["total_price"] = serde_json::json!(95.0);

        decode(row)
    }

    #[tokio::test]
    async fn empty_cart_makes_no_store_call() {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let result = Checkout::new(Arc::new(orders))
            .submit(&mut Cart::default(), customer())
            .await;

        assert!(
            matches!(result, Err(CheckoutError::Validation(OrderValidationError::EmptyCart))),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[tokio::test]
    async fn successful_submit_inserts_once_and_clears_cart() -> TestResult {
        let mut cart = filled_cart()?;
        let expected_items = cart.items().to_vec();
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(move |order| {
                order.items == expected_items
                    && order.total_price == Decimal::new(9500, 2)
                    && order.status == OrderStatus::Pending
                    && order.order_number.as_str().starts_with("ORD-")
            })
            .returning(|order| Ok(stored(&order)?));

        let confirmation = Checkout::new(Arc::new(orders))
            .submit(&mut cart, customer())
            .await?;

        assert!(cart.is_empty());
        assert_eq!(cart.total()?, Decimal::ZERO);
        assert_eq!(
            confirmation.message,
            format!(
                "Order placed successfully! Order #: {}",
                confirmation.order.order_number
            )
        );

        Ok(())
    }

    #[tokio::test]
    async fn failed_submit_keeps_cart_and_is_retryable() -> TestResult {
        let mut cart = filled_cart()?;
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::Store(StoreError::Empty)));

        let result = Checkout::new(Arc::new(orders))
            .submit(&mut cart, customer())
            .await;

        assert!(
            result.as_ref().is_err_and(CheckoutError::is_retryable),
            "expected retryable error, got {result:?}"
        );
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total()?, Decimal::new(9500, 2));

        Ok(())
    }

    #[tokio::test]
    async fn invalid_customer_is_not_retryable() -> TestResult {
        let mut cart = filled_cart()?;
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let result = Checkout::new(Arc::new(orders))
            .submit(
                &mut cart,
                CustomerDetails {
                    email: "nobody".to_string(),
                    ..customer()
                },
            )
            .await;

        assert!(
            result.as_ref().is_err_and(|error| !error.is_retryable()),
            "expected validation error, got {result:?}"
        );
        assert_eq!(cart.len(), 2);

        Ok(())
    }
}
