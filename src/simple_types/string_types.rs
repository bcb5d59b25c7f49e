//! String constrained types: `String50`, `EmailAddress`, `ZipCode`.

use regex::Regex;
use std::sync::LazyLock;

use crate::railway::{Optional, Outcome};

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// String50
// =============================================================================

/// A non-empty string of at most 50 characters.
///
/// Used for names, address lines, cities and similar short fields.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::String50;
///
/// let name = String50::create("FirstName", "Takefusa").success().unwrap();
/// assert_eq!(name.value(), "Takefusa");
///
/// assert!(String50::create("FirstName", "").is_failure());
/// assert!(String50::create("FirstName", &"a".repeat(51)).is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct String50(String);

const STRING50_MAX_LENGTH: usize = 50;

impl String50 {
    /// Validates a raw string into a `String50`.
    pub fn create(field_name: &str, value: &str) -> Outcome<Self, ValidationError> {
        constrained_type::create_string(field_name, Self, STRING50_MAX_LENGTH, value)
    }

    /// Validates a raw string that may legitimately be blank.
    ///
    /// An empty input is `Absent` on the success track; a non-empty input
    /// is validated like [`create`](Self::create).
    pub fn create_option(
        field_name: &str,
        value: &str,
    ) -> Outcome<Optional<Self>, ValidationError> {
        constrained_type::create_string_option(field_name, Self, STRING50_MAX_LENGTH, value)
    }

    /// Returns the inner string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// EmailAddress
// =============================================================================

/// A string constrained to an email shape.
///
/// Validation is deliberately loose: anything around a single `@` passes.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::EmailAddress;
///
/// assert!(EmailAddress::create("Email", "kubo@example.com").is_success());
/// assert!(EmailAddress::create("Email", "not-an-email").is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+$").expect("Invalid email regex pattern"));

impl EmailAddress {
    /// Validates a raw string into an `EmailAddress`.
    pub fn create(field_name: &str, value: &str) -> Outcome<Self, ValidationError> {
        constrained_type::create_like(field_name, Self, &EMAIL_PATTERN, value)
    }

    /// Returns the inner email string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// ZipCode
// =============================================================================

/// A five-digit postal code.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::ZipCode;
///
/// assert!(ZipCode::create("ZipCode", "81000").is_success());
/// assert!(ZipCode::create("ZipCode", "810").is_failure());
/// assert!(ZipCode::create("ZipCode", "8100A").is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

static ZIP_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("Invalid zip code regex pattern"));

impl ZipCode {
    /// Validates a raw string into a `ZipCode`.
    pub fn create(field_name: &str, value: &str) -> Outcome<Self, ValidationError> {
        constrained_type::create_like(field_name, Self, &ZIP_CODE_PATTERN, value)
    }

    /// Returns the inner zip string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}
