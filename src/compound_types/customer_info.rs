//! Customer identity as a compound of name and email.

use crate::railway::Outcome;
use crate::simple_types::{EmailAddress, ValidationError};

use super::PersonalName;

/// A customer's name and contact email.
///
/// # Examples
///
/// ```rust
/// use order_railway::compound_types::CustomerInfo;
///
/// let customer =
///     CustomerInfo::create("Takefusa", "Kubo", "kubo@example.com").success().unwrap();
/// assert_eq!(customer.name().first_name().value(), "Takefusa");
/// assert_eq!(customer.email_address().value(), "kubo@example.com");
///
/// assert!(CustomerInfo::create("Takefusa", "Kubo", "no-at-sign").is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomerInfo {
    name: PersonalName,
    email_address: EmailAddress,
}

impl CustomerInfo {
    /// Validates raw customer fields into a `CustomerInfo`.
    ///
    /// The name is validated before the email; the first failing field
    /// surfaces alone.
    pub fn create(first_name: &str, last_name: &str, email: &str) -> Outcome<Self, ValidationError> {
        PersonalName::create(first_name, last_name).and_then2(
            |_| EmailAddress::create("EmailAddress", email),
            |name, email_address| Self {
                name,
                email_address,
            },
        )
    }

    /// Assembles a `CustomerInfo` from already-validated parts.
    #[must_use]
    pub const fn create_from_parts(name: PersonalName, email_address: EmailAddress) -> Self {
        Self {
            name,
            email_address,
        }
    }

    /// Returns the customer's name.
    #[must_use]
    pub const fn name(&self) -> &PersonalName {
        &self.name
    }

    /// Returns the customer's email address.
    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }
}
