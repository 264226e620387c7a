//! Orders
//!
//! An order is a snapshot: the cart's lines are copied into it verbatim
//! together with the total computed from them, and it never looks at the
//! live inventory again.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::Cart, catalog::lenient, items::LineItem, pricing::TotalPriceError, uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

const ORDER_NUMBER_PREFIX: &str = "ORD-";
const ORDER_NUMBER_SUFFIX_LEN: usize = 4;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Completed,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
        }
    }

    /// The status that follows this one, if any.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Processing),
            Self::Processing => Some(Self::Shipped),
            Self::Shipped => Some(Self::Completed),
            Self::Completed => None,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown order status.
#[derive(Debug, Error, PartialEq)]
#[error("unknown order status `{0}`")]
pub struct UnknownOrderStatus(String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "completed" => Ok(Self::Completed),
            _ => Err(UnknownOrderStatus(s.to_string())),
        }
    }
}

/// Human readable order reference, e.g. `ORD-1718000000000-K3Q9`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Unix milliseconds of `at` followed by a short random base-36 suffix,
    /// so two sessions ordering in the same millisecond still differ.
    pub fn generate<R: Rng>(at: Timestamp, rng: &mut R) -> Self {
        let suffix: String = (0..ORDER_NUMBER_SUFFIX_LEN)
            .filter_map(|_| char::from_digit(rng.gen_range(0..36), 36))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        Self(format!(
            "{ORDER_NUMBER_PREFIX}{}-{suffix}",
            at.as_millisecond()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Contact and delivery details collected at checkout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub shipping_address: String,
    pub special_instructions: Option<String>,
}

impl CustomerDetails {
    /// Check required fields are present.
    ///
    /// # Errors
    ///
    /// Returns the first failing field as an [`OrderValidationError`].
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        let required = [
            ("customer_name", &self.name),
            ("customer_email", &self.email),
            ("customer_phone", &self.phone),
            ("shipping_address", &self.shipping_address),
        ];

        if let Some((field, _)) = required
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(OrderValidationError::MissingField(field));
        }

        let looks_like_email = self
            .email
            .trim()
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());

        if !looks_like_email {
            return Err(OrderValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

/// Reasons an order cannot be built. Nothing is sent to the store when any
/// of these occur.
#[derive(Debug, Error, PartialEq)]
pub enum OrderValidationError {
    #[error("please add items to your cart")]
    EmptyCart,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),

    #[error(transparent)]
    Total(#[from] TotalPriceError),
}

/// The order document inserted at checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub items: Vec<LineItem>,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    pub shipping_address: String,
    pub special_instructions: Option<String>,
    pub status: OrderStatus,
}

impl NewOrder {
    /// Snapshot `cart` into a pending order.
    ///
    /// # Errors
    ///
    /// - [`OrderValidationError::EmptyCart`]: the cart has no lines.
    /// - [`OrderValidationError::MissingField`] / [`OrderValidationError::InvalidEmail`]:
    ///   the customer details are incomplete.
    /// - [`OrderValidationError::Total`]: the total overflowed.
    pub fn from_cart(
        cart: &Cart,
        customer: CustomerDetails,
        order_number: OrderNumber,
    ) -> Result<Self, OrderValidationError> {
        if cart.is_empty() {
            return Err(OrderValidationError::EmptyCart);
        }

        customer.validate()?;

        let total_price = cart.total()?;

        Ok(Self {
            order_number,
            customer_name: customer.name.trim().to_string(),
            customer_email: customer.email.trim().to_string(),
            customer_phone: customer.phone.trim().to_string(),
            items: cart.items().to_vec(),
            total_price,
            shipping_address: customer.shipping_address.trim().to_string(),
            special_instructions: customer
                .special_instructions
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty()),
            status: OrderStatus::Pending,
        })
    }
}

/// A placed order as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderUuid,
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub customer_email: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub customer_phone: String,

    #[serde(default)]
    pub items: Vec<LineItem>,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    #[serde(default, deserialize_with = "lenient::text")]
    pub shipping_address: String,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub special_instructions: Option<String>,

    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
