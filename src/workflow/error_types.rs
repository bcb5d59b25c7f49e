//! Workflow error taxonomy.
//!
//! One error arm per pipeline stage plus a remote-service arm for boundary
//! adapters. Stage errors are re-tagged into [`PlaceOrderError`] exactly
//! once, at the stage boundary inside the orchestrator.

use thiserror::Error;

use crate::simple_types::ValidationError;

// =============================================================================
// PricingError
// =============================================================================

/// An error raised while pricing a validated order.
///
/// Covers line totals and order totals that fall outside their bounds.
///
/// # Examples
///
/// ```rust
/// use order_railway::workflow::PricingError;
///
/// let error = PricingError::new("Price: Must not be greater than 1000.00");
/// assert!(error.to_string().contains("Must not be greater than"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Pricing error: {message}")]
pub struct PricingError {
    message: String,
}

impl PricingError {
    /// Creates a `PricingError` with the given message.
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for PricingError {
    /// Re-tags a bound violation raised during price arithmetic.
    fn from(error: ValidationError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

// =============================================================================
// ServiceInfo
// =============================================================================

/// Identity of an external service, for error reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceInfo {
    name: String,
    endpoint: String,
}

impl ServiceInfo {
    /// Creates a `ServiceInfo` from a name and endpoint.
    #[must_use]
    pub const fn new(name: String, endpoint: String) -> Self {
        Self { name, endpoint }
    }

    /// Returns the service name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the service endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// =============================================================================
// RemoteServiceError
// =============================================================================

/// A failure while calling an external service.
///
/// Constructed by boundary adapters wrapping the collaborators; the core
/// pipeline never produces one itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Remote service error: {service:?} - {exception_message}")]
pub struct RemoteServiceError {
    service: ServiceInfo,
    exception_message: String,
}

impl RemoteServiceError {
    /// Creates a `RemoteServiceError` for the given service.
    #[must_use]
    pub const fn new(service: ServiceInfo, exception_message: String) -> Self {
        Self {
            service,
            exception_message,
        }
    }

    /// Returns the failing service.
    #[must_use]
    pub const fn service(&self) -> &ServiceInfo {
        &self.service
    }

    /// Returns the failure message.
    #[must_use]
    pub fn exception_message(&self) -> &str {
        &self.exception_message
    }
}

// =============================================================================
// PlaceOrderError
// =============================================================================

/// Sum of every error the place-order workflow can produce.
///
/// # Examples
///
/// ```rust
/// use order_railway::workflow::{PlaceOrderError, PricingError};
///
/// let error: PlaceOrderError = PricingError::new("out of bounds").into();
/// assert!(error.is_pricing());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    /// A field of the incoming order failed validation.
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// Pricing the validated order failed.
    #[error("Pricing error: {0}")]
    Pricing(PricingError),

    /// An external service call failed at the boundary.
    #[error("Remote service error: {0}")]
    RemoteService(RemoteServiceError),
}

impl PlaceOrderError {
    /// Returns `true` for the `Validation` variant.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` for the `Pricing` variant.
    #[must_use]
    pub const fn is_pricing(&self) -> bool {
        matches!(self, Self::Pricing(_))
    }

    /// Returns `true` for the `RemoteService` variant.
    #[must_use]
    pub const fn is_remote_service(&self) -> bool {
        matches!(self, Self::RemoteService(_))
    }
}

impl From<ValidationError> for PlaceOrderError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<PricingError> for PlaceOrderError {
    fn from(error: PricingError) -> Self {
        Self::Pricing(error)
    }
}

impl From<RemoteServiceError> for PlaceOrderError {
    fn from(error: RemoteServiceError) -> Self {
        Self::RemoteService(error)
    }
}
