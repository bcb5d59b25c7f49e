//! Domain events emitted by a completed place-order workflow.

use crate::compound_types::Address;
use crate::simple_types::{BillingAmount, EmailAddress, OrderId};
use crate::workflow::priced_types::PricedOrder;

// =============================================================================
// OrderPlaced
// =============================================================================

/// The order was placed; carries the full priced order for downstream
/// shipping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderPlaced(PricedOrder);

impl OrderPlaced {
    /// Wraps the priced order in its event.
    #[must_use]
    pub const fn new(priced_order: PricedOrder) -> Self {
        Self(priced_order)
    }

    /// Returns the priced order.
    #[must_use]
    pub const fn priced_order(&self) -> &PricedOrder {
        &self.0
    }
}

// =============================================================================
// BillableOrderPlaced
// =============================================================================

/// A billable amount exists for the order; carries only what billing needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillableOrderPlaced {
    order_id: OrderId,
    billing_address: Address,
    amount_to_bill: BillingAmount,
}

impl BillableOrderPlaced {
    /// Assembles the billing event from its parts.
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        billing_address: Address,
        amount_to_bill: BillingAmount,
    ) -> Self {
        Self {
            order_id,
            billing_address,
            amount_to_bill,
        }
    }

    /// Returns the order id.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the billing address.
    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    /// Returns the amount to bill.
    #[must_use]
    pub const fn amount_to_bill(&self) -> BillingAmount {
        self.amount_to_bill
    }
}

// =============================================================================
// OrderAcknowledgmentSent
// =============================================================================

/// The customer was told about the order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderAcknowledgmentSent {
    order_id: OrderId,
    email_address: EmailAddress,
}

impl OrderAcknowledgmentSent {
    /// Assembles the acknowledgment event from its parts.
    #[must_use]
    pub const fn new(order_id: OrderId, email_address: EmailAddress) -> Self {
        Self {
            order_id,
            email_address,
        }
    }

    /// Returns the order id.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the notified address.
    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }
}

// =============================================================================
// PlaceOrderEvent
// =============================================================================

/// Sum of every event the workflow can emit.
///
/// A successful run produces these in a fixed order: the acknowledgment
/// event when one was sent, then always the placed event, then the billable
/// event when there is something to bill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceOrderEvent {
    /// An acknowledgment letter went out.
    AcknowledgmentSent(OrderAcknowledgmentSent),
    /// The order was placed.
    OrderPlaced(OrderPlaced),
    /// The order has a non-zero amount to bill.
    BillableOrderPlaced(BillableOrderPlaced),
}

impl PlaceOrderEvent {
    /// Returns `true` for the `AcknowledgmentSent` variant.
    #[must_use]
    pub const fn is_acknowledgment_sent(&self) -> bool {
        matches!(self, Self::AcknowledgmentSent(_))
    }

    /// Returns `true` for the `OrderPlaced` variant.
    #[must_use]
    pub const fn is_order_placed(&self) -> bool {
        matches!(self, Self::OrderPlaced(_))
    }

    /// Returns `true` for the `BillableOrderPlaced` variant.
    #[must_use]
    pub const fn is_billable_order_placed(&self) -> bool {
        matches!(self, Self::BillableOrderPlaced(_))
    }
}
