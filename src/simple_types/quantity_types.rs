//! Quantity types: `UnitQuantity`, `KilogramQuantity` and the
//! `OrderQuantity` sum.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

use crate::railway::Outcome;

use super::constrained_type;
use super::error::ValidationError;
use super::product_types::ProductCode;

// =============================================================================
// UnitQuantity
// =============================================================================

/// A whole-unit count between 1 and 1000, used for widget lines.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::UnitQuantity;
///
/// assert!(UnitQuantity::create("Quantity", 100).is_success());
/// assert!(UnitQuantity::create("Quantity", 0).is_failure());
/// assert!(UnitQuantity::create("Quantity", 1001).is_failure());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitQuantity(u32);

const UNIT_QUANTITY_MIN: u32 = 1;
const UNIT_QUANTITY_MAX: u32 = 1000;

impl UnitQuantity {
    /// Validates a raw count into a `UnitQuantity`.
    pub fn create(field_name: &str, value: u32) -> Outcome<Self, ValidationError> {
        constrained_type::create_integer(
            field_name,
            Self,
            UNIT_QUANTITY_MIN,
            UNIT_QUANTITY_MAX,
            value,
        )
    }

    /// Returns the inner count.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// KilogramQuantity
// =============================================================================

/// A weight between 0.05 and 100.00 kilograms, used for gizmo lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KilogramQuantity(Decimal);

impl KilogramQuantity {
    fn min_value() -> Decimal {
        Decimal::from_str("0.05").expect("Valid decimal literal")
    }

    fn max_value() -> Decimal {
        Decimal::from_str("100.00").expect("Valid decimal literal")
    }

    /// Validates a raw weight into a `KilogramQuantity`.
    pub fn create(field_name: &str, value: Decimal) -> Outcome<Self, ValidationError> {
        constrained_type::create_decimal(
            field_name,
            Self,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// Returns the inner weight.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// OrderQuantity
// =============================================================================

/// Sum of the quantity representations.
///
/// The representation is chosen by the product code of the line: widgets
/// count in whole units, gizmos weigh in kilograms.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::{OrderQuantity, ProductCode};
/// use rust_decimal::Decimal;
///
/// let widget = ProductCode::create("ProductCode", "W1234").success().unwrap();
/// let quantity = OrderQuantity::create("Quantity", &widget, Decimal::from(10));
/// assert!(matches!(quantity.success(), Some(OrderQuantity::Unit(_))));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderQuantity {
    /// A widget unit count.
    Unit(UnitQuantity),
    /// A gizmo weight.
    Kilogram(KilogramQuantity),
}

impl OrderQuantity {
    /// Validates a raw quantity against the representation the product code
    /// selects.
    ///
    /// Takes an already-validated [`ProductCode`] so an unparsed code can
    /// never reach quantity validation. Widget quantities must be integral;
    /// a fractional or negative raw value is rejected before the range
    /// check.
    pub fn create(
        field_name: &str,
        product_code: &ProductCode,
        quantity: Decimal,
    ) -> Outcome<Self, ValidationError> {
        match product_code {
            ProductCode::Widget(widget_code) => {
                let Some(integer_quantity) =
                    quantity.to_u32().filter(|_| quantity.is_integer())
                else {
                    return Outcome::Failure(ValidationError::new(
                        field_name,
                        &format!(
                            "Quantity '{}' must be a valid integer for Widget product '{}'. \
                             Widget products require a whole number quantity between 1 and 1000.",
                            quantity,
                            widget_code.value()
                        ),
                    ));
                };
                UnitQuantity::create(field_name, integer_quantity).map(Self::Unit)
            }
            ProductCode::Gizmo(_) => {
                KilogramQuantity::create(field_name, quantity).map(Self::Kilogram)
            }
        }
    }

    /// Returns the quantity as a decimal regardless of representation.
    #[must_use]
    pub fn value(&self) -> Decimal {
        match self {
            Self::Unit(unit_quantity) => Decimal::from(unit_quantity.value()),
            Self::Kilogram(kilogram_quantity) => kilogram_quantity.value(),
        }
    }
}
