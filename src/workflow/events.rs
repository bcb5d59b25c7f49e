//! Event assembly: the pure tail of the workflow.
//!
//! Builds the list of domain events a successful run emits. The order is
//! fixed: the acknowledgment event when one exists, then always the placed
//! event, then the billable event when there is something to bill.

use rust_decimal::Decimal;

use crate::railway::Optional;
use crate::workflow::output_types::{
    BillableOrderPlaced, OrderAcknowledgmentSent, OrderPlaced, PlaceOrderEvent,
};
use crate::workflow::priced_types::PricedOrder;

// =============================================================================
// create_billing_event
// =============================================================================

/// Builds the billing event when the order has a positive amount to bill.
///
/// A zero amount is a legitimate order with nothing to bill, so no event is
/// produced for it.
#[must_use]
pub fn create_billing_event(priced_order: &PricedOrder) -> Optional<BillableOrderPlaced> {
    if priced_order.amount_to_bill().value() > Decimal::ZERO {
        Optional::Present(BillableOrderPlaced::new(
            priced_order.order_id().clone(),
            priced_order.billing_address().clone(),
            priced_order.amount_to_bill(),
        ))
    } else {
        Optional::Absent
    }
}

// =============================================================================
// create_events
// =============================================================================

/// Assembles the full event list for a placed order.
///
/// # Examples
///
/// ```rust
/// use order_railway::railway::Optional;
/// use order_railway::workflow::{create_events, PricedOrder};
/// use order_railway::compound_types::{Address, CustomerInfo};
/// use order_railway::simple_types::{BillingAmount, OrderId};
/// use rust_decimal::Decimal;
///
/// let address = Address::create("Tenjin", "", "", "", "Fukuoka", "81000").success().unwrap();
/// let order = PricedOrder::new(
///     OrderId::create("OrderId", "order-001").success().unwrap(),
///     CustomerInfo::create("Takefusa", "Kubo", "kubo@example.com").success().unwrap(),
///     address.clone(),
///     address,
///     BillingAmount::create(Decimal::from(100)).success().unwrap(),
///     vec![],
/// );
///
/// // No acknowledgment went out; billable amount is positive.
/// let events = create_events(&order, Optional::Absent);
/// assert_eq!(events.len(), 2);
/// assert!(events[0].is_order_placed());
/// assert!(events[1].is_billable_order_placed());
/// ```
#[must_use]
pub fn create_events(
    priced_order: &PricedOrder,
    acknowledgment_event: Optional<OrderAcknowledgmentSent>,
) -> Vec<PlaceOrderEvent> {
    let acknowledgment_events: Vec<PlaceOrderEvent> =
        Option::from(acknowledgment_event.map(PlaceOrderEvent::AcknowledgmentSent))
            .into_iter()
            .collect();

    let placed_events = vec![PlaceOrderEvent::OrderPlaced(OrderPlaced::new(
        priced_order.clone(),
    ))];

    let billing_events: Vec<PlaceOrderEvent> =
        Option::from(create_billing_event(priced_order).map(PlaceOrderEvent::BillableOrderPlaced))
            .into_iter()
            .collect();

    [acknowledgment_events, placed_events, billing_events].concat()
}
