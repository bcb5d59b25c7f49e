//! A postal address as a compound of constrained fields.

use crate::railway::{Optional, Outcome};
use crate::simple_types::{String50, ValidationError, ZipCode};

/// A postal address with one required line, up to three optional lines, a
/// city and a five-digit zip code.
///
/// Blank optional lines are [`Optional::Absent`], a validated state rather
/// than a missing one.
///
/// # Examples
///
/// ```rust
/// use order_railway::compound_types::Address;
///
/// let address =
///     Address::create("123 Main St", "Apt 4B", "", "", "Fukuoka", "81000").success().unwrap();
///
/// assert_eq!(address.address_line1().value(), "123 Main St");
/// assert!(address.address_line2().is_present());
/// assert!(address.address_line3().is_absent());
/// assert_eq!(address.zip_code().value(), "81000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_field_names)]
pub struct Address {
    address_line1: String50,
    address_line2: Optional<String50>,
    address_line3: Optional<String50>,
    address_line4: Optional<String50>,
    city: String50,
    zip_code: ZipCode,
}

impl Address {
    /// Validates raw address fields into an `Address`.
    ///
    /// Fields are validated in declaration order and the first failure
    /// surfaces alone. The zip input is checked against the zip pattern,
    /// never against any other field's value.
    pub fn create(
        address_line1: &str,
        address_line2: &str,
        address_line3: &str,
        address_line4: &str,
        city: &str,
        zip_code: &str,
    ) -> Outcome<Self, ValidationError> {
        String50::create("AddressLine1", address_line1).and_then(|line1| {
            String50::create_option("AddressLine2", address_line2).and_then(|line2| {
                String50::create_option("AddressLine3", address_line3).and_then(|line3| {
                    String50::create_option("AddressLine4", address_line4).and_then(|line4| {
                        String50::create("City", city).and_then(|city| {
                            ZipCode::create("ZipCode", zip_code).map(|zip_code| Self {
                                address_line1: line1,
                                address_line2: line2,
                                address_line3: line3,
                                address_line4: line4,
                                city,
                                zip_code,
                            })
                        })
                    })
                })
            })
        })
    }

    /// Assembles an `Address` from already-validated parts.
    #[must_use]
    pub const fn create_from_parts(
        address_line1: String50,
        address_line2: Optional<String50>,
        address_line3: Optional<String50>,
        address_line4: Optional<String50>,
        city: String50,
        zip_code: ZipCode,
    ) -> Self {
        Self {
            address_line1,
            address_line2,
            address_line3,
            address_line4,
            city,
            zip_code,
        }
    }

    /// Returns the first address line.
    #[must_use]
    pub const fn address_line1(&self) -> &String50 {
        &self.address_line1
    }

    /// Returns the second address line if present.
    #[must_use]
    pub const fn address_line2(&self) -> &Optional<String50> {
        &self.address_line2
    }

    /// Returns the third address line if present.
    #[must_use]
    pub const fn address_line3(&self) -> &Optional<String50> {
        &self.address_line3
    }

    /// Returns the fourth address line if present.
    #[must_use]
    pub const fn address_line4(&self) -> &Optional<String50> {
        &self.address_line4
    }

    /// Returns the city.
    #[must_use]
    pub const fn city(&self) -> &String50 {
        &self.city
    }

    /// Returns the zip code.
    #[must_use]
    pub const fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }
}
