//! A person's name as two constrained fields.

use crate::railway::Outcome;
use crate::simple_types::{String50, ValidationError};

/// A first and last name, both required and both `String50`.
///
/// # Examples
///
/// ```rust
/// use order_railway::compound_types::PersonalName;
///
/// let name = PersonalName::create("Takefusa", "Kubo").success().unwrap();
/// assert_eq!(name.first_name().value(), "Takefusa");
/// assert_eq!(name.last_name().value(), "Kubo");
///
/// assert!(PersonalName::create("", "Kubo").is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersonalName {
    first_name: String50,
    last_name: String50,
}

impl PersonalName {
    /// Validates raw first and last names into a `PersonalName`.
    ///
    /// The first name is validated before the last name; the first failing
    /// field surfaces and the other is never inspected.
    pub fn create(first_name: &str, last_name: &str) -> Outcome<Self, ValidationError> {
        String50::create("FirstName", first_name).and_then2(
            |_| String50::create("LastName", last_name),
            |first_name, last_name| Self {
                first_name,
                last_name,
            },
        )
    }

    /// Assembles a `PersonalName` from already-validated parts.
    #[must_use]
    pub const fn create_from_parts(first_name: String50, last_name: String50) -> Self {
        Self {
            first_name,
            last_name,
        }
    }

    /// Returns the first name.
    #[must_use]
    pub const fn first_name(&self) -> &String50 {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub const fn last_name(&self) -> &String50 {
        &self.last_name
    }
}
