//! The place-order workflow.
//!
//! Expresses the order's state transitions via types, so an invalid state
//! cannot be represented:
//!
//! ```text
//! UnvalidatedOrder -> ValidatedOrder -> PricedOrder -> PlaceOrderEvent[]
//! ```
//!
//! Every step is a plain function over these types with its collaborators
//! injected as function parameters; [`place_order`] chains the steps on the
//! railway.
//!
//! # Module Structure
//!
//! - [`unvalidated_types`] - Raw input types
//! - [`validated_types`] - Validated types and the address-service boundary
//! - [`priced_types`] - Priced types
//! - [`acknowledgment_types`] - Acknowledgment letter types
//! - [`output_types`] - Domain event types
//! - [`error_types`] - Workflow error taxonomy
//! - [`validation`] - The validation step
//! - [`pricing`] - The pricing step
//! - [`acknowledgment`] - The acknowledgment step
//! - [`events`] - Event assembly
//! - [`place_order`] - The orchestrator

pub mod acknowledgment;
pub mod acknowledgment_types;
pub mod error_types;
pub mod events;
pub mod output_types;
pub mod place_order;
pub mod priced_types;
pub mod pricing;
pub mod unvalidated_types;
pub mod validated_types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

pub use acknowledgment::acknowledge_order;
pub use acknowledgment_types::{HtmlString, OrderAcknowledgment, SendResult};
pub use error_types::{PlaceOrderError, PricingError, RemoteServiceError, ServiceInfo};
pub use events::{create_billing_event, create_events};
pub use output_types::{
    BillableOrderPlaced, OrderAcknowledgmentSent, OrderPlaced, PlaceOrderEvent,
};
pub use place_order::place_order;
pub use priced_types::{PricedOrder, PricedOrderLine};
pub use pricing::price_order;
pub use unvalidated_types::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};
pub use validated_types::{
    AddressValidationError, CheckedAddress, ValidatedOrder, ValidatedOrderLine,
};
pub use validation::validate_order;
