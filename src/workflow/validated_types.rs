//! Validated order types and the address-service boundary types.

use thiserror::Error;

use crate::compound_types::{Address, CustomerInfo};
use crate::simple_types::{OrderId, OrderLineId, OrderQuantity, ProductCode};
use crate::workflow::unvalidated_types::UnvalidatedAddress;

// =============================================================================
// AddressValidationError
// =============================================================================

/// The two ways the address verification service can reject an address.
///
/// # Examples
///
/// ```rust
/// use order_railway::workflow::AddressValidationError;
///
/// assert!(AddressValidationError::InvalidFormat.is_invalid_format());
/// assert!(AddressValidationError::NotFound.is_not_found());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AddressValidationError {
    /// The address does not parse as an address at all.
    #[error("Invalid address format")]
    InvalidFormat,

    /// The address parses but does not exist.
    #[error("Address not found")]
    NotFound,
}

impl AddressValidationError {
    /// Returns `true` for the `InvalidFormat` variant.
    #[must_use]
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat)
    }

    /// Returns `true` for the `NotFound` variant.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

// =============================================================================
// CheckedAddress
// =============================================================================

/// An address the verification service has accepted.
///
/// A thin wrapper over the raw address: the type records the fact that the
/// service said yes, nothing more. Field-level validation still happens
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedAddress(UnvalidatedAddress);

impl CheckedAddress {
    /// Marks an address as verified.
    ///
    /// Only the address verification collaborator should produce this.
    #[must_use]
    pub const fn new(address: UnvalidatedAddress) -> Self {
        Self(address)
    }

    /// Returns the wrapped raw address.
    #[must_use]
    pub const fn value(&self) -> &UnvalidatedAddress {
        &self.0
    }

    /// Unwraps the raw address.
    #[must_use]
    pub fn into_inner(self) -> UnvalidatedAddress {
        self.0
    }
}

// =============================================================================
// ValidatedOrderLine
// =============================================================================

/// An order line whose every field has been validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrderLine {
    order_line_id: OrderLineId,
    product_code: ProductCode,
    quantity: OrderQuantity,
}

impl ValidatedOrderLine {
    /// Assembles a line from already-validated parts.
    #[must_use]
    pub const fn new(
        order_line_id: OrderLineId,
        product_code: ProductCode,
        quantity: OrderQuantity,
    ) -> Self {
        Self {
            order_line_id,
            product_code,
            quantity,
        }
    }

    /// Returns the line id.
    #[must_use]
    pub const fn order_line_id(&self) -> &OrderLineId {
        &self.order_line_id
    }

    /// Returns the product code.
    #[must_use]
    pub const fn product_code(&self) -> &ProductCode {
        &self.product_code
    }

    /// Returns the quantity.
    #[must_use]
    pub const fn quantity(&self) -> &OrderQuantity {
        &self.quantity
    }
}

// =============================================================================
// ValidatedOrder
// =============================================================================

/// An order whose every field has been validated, the output of the
/// validation step and the input of pricing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrder {
    order_id: OrderId,
    customer_info: CustomerInfo,
    shipping_address: Address,
    billing_address: Address,
    lines: Vec<ValidatedOrderLine>,
}

impl ValidatedOrder {
    /// Assembles an order from already-validated parts.
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        customer_info: CustomerInfo,
        shipping_address: Address,
        billing_address: Address,
        lines: Vec<ValidatedOrderLine>,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            lines,
        }
    }

    /// Returns the order id.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the customer info.
    #[must_use]
    pub const fn customer_info(&self) -> &CustomerInfo {
        &self.customer_info
    }

    /// Returns the shipping address.
    #[must_use]
    pub const fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    /// Returns the billing address.
    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    /// Returns the validated lines.
    #[must_use]
    pub fn lines(&self) -> &[ValidatedOrderLine] {
        &self.lines
    }
}
