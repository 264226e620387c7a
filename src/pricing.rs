//! Pricing

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::items::LineItem;

/// Errors that can occur while calculating totals.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Decimal arithmetic overflowed.
    #[error("price arithmetic overflowed")]
    Overflow,

    /// The amount does not fit in the currency's minor units.
    #[error("amount {0} cannot be expressed in minor units")]
    Unrepresentable(Decimal),
}

/// Price of a single line: unit price times quantity.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the multiplication overflows.
pub fn line_total(item: &LineItem) -> Result<Decimal, TotalPriceError> {
    item.price
        .checked_mul(Decimal::from(item.quantity))
        .ok_or(TotalPriceError::Overflow)
}

/// Sum of [`line_total`] over all items; zero when there are none.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if any step overflows.
pub fn total_price(items: &[LineItem]) -> Result<Decimal, TotalPriceError> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        total
            .checked_add(line_total(item)?)
            .ok_or(TotalPriceError::Overflow)
    })
}

/// Convert an exact amount into money, rounding half away from zero to the
/// currency's minor unit.
///
/// # Errors
///
/// Returns a [`TotalPriceError`] when the amount is out of range.
pub fn to_money(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, TotalPriceError> {
    let scale = 10_i64
        .checked_pow(currency.exponent)
        .ok_or(TotalPriceError::Overflow)?;

    let minor = amount
        .checked_mul(Decimal::from(scale))
        .ok_or(TotalPriceError::Overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(TotalPriceError::Unrepresentable(amount))?;

    Ok(Money::from_minor(minor, currency))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::catalog::{InventoryItemUuid, PhotoUuid};

    use super::*;

    fn line(price: Decimal, quantity: u32) -> LineItem {
        LineItem {
            inventory_id: InventoryItemUuid::new(),
            photo_id: PhotoUuid::new(),
            photo_title: "Dusk".to_string(),
            size: "5x7".to_string(),
            material: "Matte".to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_total_price() -> TestResult {
        let items = [
            line(Decimal::new(1999, 2), 3),
            line(Decimal::new(1, 1), 1),
        ];

        assert_eq!(total_price(&items)?, Decimal::new(6007, 2));

        Ok(())
    }

    #[test]
    fn test_total_price_empty() -> TestResult {
        assert_eq!(total_price(&[])?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn test_total_price_overflow() {
        let items = [line(Decimal::MAX, 2)];

        assert_eq!(total_price(&items), Err(TotalPriceError::Overflow));
    }

    #[test]
    fn test_to_money_rounds_to_cents() -> TestResult {
        let money = to_money(Decimal::new(95005, 3), iso::USD)?;

        assert_eq!(money, Money::from_minor(9501, iso::USD));

        Ok(())
    }
}
