//! The place-order workflow: one pipeline from raw order to events.
//!
//! Chains the four steps on the railway: validate, price, acknowledge,
//! create events. Each stage's error is re-tagged into [`PlaceOrderError`]
//! exactly once, at its boundary; after the first failure no later stage
//! runs and no later collaborator is invoked. The whole pipeline is a
//! suspension and performs no work until awaited.

use crate::railway::AsyncOutcome;
use crate::simple_types::{Price, ProductCode};
use crate::workflow::acknowledgment::acknowledge_order;
use crate::workflow::acknowledgment_types::{HtmlString, OrderAcknowledgment, SendResult};
use crate::workflow::error_types::PlaceOrderError;
use crate::workflow::events::create_events;
use crate::workflow::output_types::PlaceOrderEvent;
use crate::workflow::priced_types::PricedOrder;
use crate::workflow::pricing::price_order;
use crate::workflow::unvalidated_types::{UnvalidatedAddress, UnvalidatedOrder};
use crate::workflow::validated_types::{AddressValidationError, CheckedAddress};
use crate::workflow::validation::validate_order;

// =============================================================================
// place_order
// =============================================================================

/// Runs the whole place-order workflow as a suspension.
///
/// A successful run resolves to one to three events in a fixed order:
/// the acknowledgment event when the letter went out, then always the
/// placed event, then the billable event when the amount to bill is
/// positive. A failed run resolves to the error of the first failing
/// stage, tagged with that stage.
///
/// # Type Parameters
///
/// * `CheckProduct` - Catalog lookup, `Fn(&ProductCode) -> bool`
/// * `CheckAddress` - Address verification returning a suspension
/// * `GetProductPrice` - Unit price lookup, total over valid codes
/// * `CreateLetter` - Acknowledgment letter renderer
/// * `SendAcknowledgment` - Letter sender, reports `Sent` or `NotSent`
pub fn place_order<CheckProduct, CheckAddress, GetProductPrice, CreateLetter, SendAcknowledgment>(
    check_product_code_exists: CheckProduct,
    check_address_exists: CheckAddress,
    get_product_price: GetProductPrice,
    create_acknowledgment_letter: CreateLetter,
    send_acknowledgment: SendAcknowledgment,
    unvalidated_order: &UnvalidatedOrder,
) -> AsyncOutcome<Vec<PlaceOrderEvent>, PlaceOrderError>
where
    CheckProduct: Fn(&ProductCode) -> bool + Send + 'static,
    CheckAddress: Fn(UnvalidatedAddress) -> AsyncOutcome<CheckedAddress, AddressValidationError>
        + Send
        + Sync
        + 'static,
    GetProductPrice: Fn(&ProductCode) -> Price + Send + 'static,
    CreateLetter: Fn(&PricedOrder) -> HtmlString + Send + 'static,
    SendAcknowledgment: Fn(&OrderAcknowledgment) -> SendResult + Send + 'static,
{
    tracing::debug!(order_id = unvalidated_order.order_id(), "placing order");

    validate_order(
        check_product_code_exists,
        check_address_exists,
        unvalidated_order,
    )
    .map_error(|error| {
        tracing::warn!(%error, "order validation failed");
        PlaceOrderError::Validation(error)
    })
    .and_then(move |validated_order| {
        price_order(&get_product_price, &validated_order)
            .map_error(|error| {
                tracing::warn!(%error, "order pricing failed");
                PlaceOrderError::Pricing(error)
            })
            .into_async()
    })
    .map(move |priced_order| {
        let acknowledgment = acknowledge_order(
            &create_acknowledgment_letter,
            &send_acknowledgment,
            &priced_order,
        );
        tracing::debug!(
            order_id = priced_order.order_id().value(),
            acknowledged = acknowledgment.is_present(),
            "order placed"
        );
        create_events(&priced_order, acknowledgment)
    })
}
