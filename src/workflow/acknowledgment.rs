//! The acknowledgment step: tell the customer about the priced order.
//!
//! The letter renderer and the mail sender are injected as functions. A send
//! that does not go through is an ordinary business state, so this step
//! cannot fail: it either produces an acknowledgment event or nothing.

use crate::railway::Optional;
use crate::workflow::acknowledgment_types::{HtmlString, OrderAcknowledgment, SendResult};
use crate::workflow::output_types::OrderAcknowledgmentSent;
use crate::workflow::priced_types::PricedOrder;

// =============================================================================
// acknowledge_order
// =============================================================================

/// Renders and sends the acknowledgment letter for a priced order.
///
/// Returns the acknowledgment event when the letter went out and
/// [`Optional::Absent`] when it did not. A failed send never becomes an
/// error; only the event list is affected.
///
/// # Examples
///
/// ```rust
/// use order_railway::workflow::acknowledgment::acknowledge_order;
/// use order_railway::workflow::{HtmlString, OrderAcknowledgment, PricedOrder, SendResult};
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
/// let render = |_: &PricedOrder| HtmlString::new("<p>Thank you</p>".to_string());
/// let send = |_: &OrderAcknowledgment| SendResult::Sent;
///
/// let sent = acknowledge_order(&render, &send, &order);
/// assert!(sent.is_present());
/// ```
pub fn acknowledge_order<CreateLetter, SendAcknowledgment>(
    create_acknowledgment_letter: &CreateLetter,
    send_acknowledgment: &SendAcknowledgment,
    priced_order: &PricedOrder,
) -> Optional<OrderAcknowledgmentSent>
where
    CreateLetter: Fn(&PricedOrder) -> HtmlString,
    SendAcknowledgment: Fn(&OrderAcknowledgment) -> SendResult,
{
    let letter = create_acknowledgment_letter(priced_order);
    let email_address = priced_order.customer_info().email_address().clone();
    let acknowledgment = OrderAcknowledgment::new(email_address.clone(), letter);

    match send_acknowledgment(&acknowledgment) {
        SendResult::Sent => Optional::Present(OrderAcknowledgmentSent::new(
            priced_order.order_id().clone(),
            email_address,
        )),
        SendResult::NotSent => Optional::Absent,
    }
}
