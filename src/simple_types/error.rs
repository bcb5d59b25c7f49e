//! Validation error carried on the failure track.

use thiserror::Error;

/// A constraint violation raised by a constrained-type factory.
///
/// Every constrained type reports failures through this one shape: the
/// field being validated plus a human-readable reason. Rendered as
/// `"{field_name}: {message}"`.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::ValidationError;
///
/// let error = ValidationError::new("OrderId", "Must not be empty");
/// assert_eq!(error.to_string(), "OrderId: Must not be empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the field that failed validation.
    pub field_name: String,
    /// Reason the value was rejected.
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError` for the given field.
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}
