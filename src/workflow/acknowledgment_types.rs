//! Acknowledgment side types: letter content, the acknowledgment itself
//! and the send result.

use crate::simple_types::EmailAddress;

// =============================================================================
// HtmlString
// =============================================================================

/// Rendered HTML content of an acknowledgment letter.
///
/// Unconstrained by design; the letter renderer owns the content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlString(String);

impl HtmlString {
    /// Wraps rendered HTML.
    #[must_use]
    pub const fn new(content: String) -> Self {
        Self(content)
    }

    /// Returns the HTML content.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// OrderAcknowledgment
// =============================================================================

/// A letter addressed to the customer, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderAcknowledgment {
    email_address: EmailAddress,
    letter: HtmlString,
}

impl OrderAcknowledgment {
    /// Pairs a destination with a rendered letter.
    #[must_use]
    pub const fn new(email_address: EmailAddress, letter: HtmlString) -> Self {
        Self {
            email_address,
            letter,
        }
    }

    /// Returns the destination address.
    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    /// Returns the letter content.
    #[must_use]
    pub const fn letter(&self) -> &HtmlString {
        &self.letter
    }
}

// =============================================================================
// SendResult
// =============================================================================

/// Outcome of a send attempt.
///
/// A failed send is an ordinary business state, never an error: the order
/// proceeds either way and only the acknowledgment event is affected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendResult {
    /// The letter was delivered to the mail system.
    Sent,
    /// The letter could not be delivered.
    NotSent,
}

impl SendResult {
    /// Returns `true` when the letter went out.
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}
