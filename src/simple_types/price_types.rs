//! Money types: `Price` and `BillingAmount`.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::railway::Outcome;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// Price
// =============================================================================

/// A price constrained to 0.00 through 1000.00.
///
/// Covers both a unit price and a line total; multiplying revalidates the
/// product against the same bound.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::Price;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert!(Price::create(Decimal::from_str("99.99").unwrap()).is_success());
/// assert!(Price::create(Decimal::from_str("1000.01").unwrap()).is_failure());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    const FIELD_NAME: &'static str = "Price";

    fn min_value() -> Decimal {
        Decimal::ZERO
    }

    fn max_value() -> Decimal {
        Decimal::from_str("1000.00").expect("Valid decimal literal")
    }

    /// Validates a raw decimal into a `Price`.
    pub fn create(value: Decimal) -> Outcome<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            Self,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// Creates a `Price` from a value known to be in bounds.
    ///
    /// Only for constants controlled by the caller, never for input.
    ///
    /// # Panics
    ///
    /// Panics if the value is out of bounds.
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        match Self::create(value) {
            Outcome::Success(price) => price,
            Outcome::Failure(error) => {
                panic!("Not expecting Price to be out of bounds: {error}")
            }
        }
    }

    /// Multiplies by a quantity, revalidating the product.
    ///
    /// A line total above the bound surfaces as the same `ValidationError`
    /// an out-of-range unit price would.
    pub fn multiply(&self, quantity: Decimal) -> Outcome<Self, ValidationError> {
        Self::create(quantity * self.0)
    }

    /// Returns the inner decimal.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// BillingAmount
// =============================================================================

/// An order total constrained to 0.00 through 10000.00.
///
/// Produced by summing line prices; the sum is revalidated against the
/// bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BillingAmount(Decimal);

impl BillingAmount {
    const FIELD_NAME: &'static str = "BillingAmount";

    fn min_value() -> Decimal {
        Decimal::ZERO
    }

    fn max_value() -> Decimal {
        Decimal::from_str("10000.00").expect("Valid decimal literal")
    }

    /// Validates a raw decimal into a `BillingAmount`.
    pub fn create(value: Decimal) -> Outcome<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            Self,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// Sums line prices into a `BillingAmount`, revalidating the total.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::simple_types::{BillingAmount, Price};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let prices = vec![
    ///     Price::create(Decimal::from_str("100.00").unwrap()).success().unwrap(),
    ///     Price::create(Decimal::from_str("200.00").unwrap()).success().unwrap(),
    /// ];
    ///
    /// let total = BillingAmount::sum_prices(&prices).success().unwrap();
    /// assert_eq!(total.value(), Decimal::from_str("300.00").unwrap());
    /// ```
    pub fn sum_prices(prices: &[Price]) -> Outcome<Self, ValidationError> {
        let total = prices
            .iter()
            .fold(Decimal::ZERO, |accumulator, price| accumulator + price.value());
        Self::create(total)
    }

    /// Returns the inner decimal.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}
