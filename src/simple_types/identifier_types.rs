//! Identifier types: `OrderId` and `OrderLineId`.

use crate::railway::Outcome;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// OrderId
// =============================================================================

/// Uniquely identifies an order.
///
/// A non-empty string of at most 50 characters. `Hash` is derived so it can
/// key a map.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::OrderId;
///
/// let id = OrderId::create("OrderId", "ORD-2026-001").success().unwrap();
/// assert_eq!(id.value(), "ORD-2026-001");
///
/// assert!(OrderId::create("OrderId", "").is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderId(String);

const ORDER_ID_MAX_LENGTH: usize = 50;

impl OrderId {
    /// Validates a raw string into an `OrderId`.
    pub fn create(field_name: &str, value: &str) -> Outcome<Self, ValidationError> {
        constrained_type::create_string(field_name, Self, ORDER_ID_MAX_LENGTH, value)
    }

    /// Returns the inner id string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// OrderLineId
// =============================================================================

/// Uniquely identifies a line within an order.
///
/// Same constraints as [`OrderId`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderLineId(String);

const ORDER_LINE_ID_MAX_LENGTH: usize = 50;

impl OrderLineId {
    /// Validates a raw string into an `OrderLineId`.
    pub fn create(field_name: &str, value: &str) -> Outcome<Self, ValidationError> {
        constrained_type::create_string(field_name, Self, ORDER_LINE_ID_MAX_LENGTH, value)
    }

    /// Returns the inner id string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}
