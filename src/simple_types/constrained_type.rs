//! Generic factories for constrained newtypes.
//!
//! Each helper takes the field name (for error messages), the newtype
//! constructor, the constraint parameters and the raw input, and returns an
//! [`Outcome`] on the appropriate track. Constraints are checked in a fixed
//! order: structural (non-empty) first, then bounds, then pattern.

use regex::Regex;
use rust_decimal::Decimal;

use crate::railway::{Optional, Outcome};

use super::error::ValidationError;

/// Creates a string newtype with a non-empty, maximum-length constraint.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::constrained_type;
///
/// #[derive(Debug, PartialEq)]
/// struct Name(String);
///
/// let valid = constrained_type::create_string("Name", Name, 50, "Kubo");
/// assert!(valid.is_success());
///
/// let empty = constrained_type::create_string("Name", Name, 50, "");
/// assert!(empty.is_failure());
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Outcome<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Outcome::Failure(ValidationError::new(field_name, "Must not be empty"))
    } else if value.chars().count() > max_length {
        Outcome::Failure(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Outcome::Success(constructor(value.to_string()))
    }
}

/// Creates an optional string newtype with a maximum-length constraint.
///
/// An empty input is an ordinary `Absent` on the success track, not an
/// error. Used for fields that may legitimately be blank, such as the
/// second line of an address.
pub fn create_string_option<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Outcome<Optional<T>, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Outcome::Success(Optional::Absent)
    } else if value.chars().count() > max_length {
        Outcome::Failure(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Outcome::Success(Optional::Present(constructor(value.to_string())))
    }
}

/// Creates an integer newtype constrained to an inclusive range.
pub fn create_integer<T, F>(
    field_name: &str,
    constructor: F,
    min_value: u32,
    max_value: u32,
    value: u32,
) -> Outcome<T, ValidationError>
where
    F: FnOnce(u32) -> T,
{
    if value < min_value {
        Outcome::Failure(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Outcome::Failure(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Outcome::Success(constructor(value))
    }
}

/// Creates a decimal newtype constrained to an inclusive range.
pub fn create_decimal<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    max_value: Decimal,
    value: Decimal,
) -> Outcome<T, ValidationError>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value {
        Outcome::Failure(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Outcome::Failure(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Outcome::Success(constructor(value))
    }
}

/// Creates a string newtype that must match a regular expression.
///
/// Emptiness is rejected before the pattern is consulted. Patterns without
/// anchors match partially; callers wanting exact matches must anchor them.
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    value: &str,
) -> Outcome<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Outcome::Failure(ValidationError::new(field_name, "Must not be empty"))
    } else if pattern.is_match(value) {
        Outcome::Success(constructor(value.to_string()))
    } else {
        let pattern_str = pattern.as_str();
        Outcome::Failure(ValidationError::new(
            field_name,
            &format!("'{value}' must match the pattern '{pattern_str}'"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[derive(Debug, PartialEq)]
    struct TestString(String);

    #[derive(Debug, PartialEq)]
    struct TestInteger(u32);

    #[derive(Debug, PartialEq)]
    struct TestDecimal(Decimal);

    // =========================================================================
    // create_string Tests
    // =========================================================================

    #[rstest]
    fn test_create_string_valid() {
        let result = create_string("Name", TestString, 50, "Kubo");

        assert_eq!(result, Outcome::Success(TestString("Kubo".to_string())));
    }

    #[rstest]
    fn test_create_string_empty() {
        let result = create_string("Name", TestString, 50, "");

        assert_eq!(
            result,
            Outcome::Failure(ValidationError::new("Name", "Must not be empty"))
        );
    }

    #[rstest]
    #[case(50, true)]
    #[case(51, false)]
    fn test_create_string_length_boundary(#[case] length: usize, #[case] expected: bool) {
        let input = "a".repeat(length);
        let result = create_string("Name", TestString, 50, &input);

        assert_eq!(result.is_success(), expected);
    }

    #[rstest]
    fn test_create_string_too_long_message() {
        let input = "a".repeat(51);
        let result = create_string("Name", TestString, 50, &input);

        assert_eq!(
            result.failure(),
            Some(ValidationError::new(
                "Name",
                "Must not be more than 50 chars"
            ))
        );
    }

    // =========================================================================
    // create_string_option Tests
    // =========================================================================

    #[rstest]
    fn test_create_string_option_empty_is_absent() {
        let result = create_string_option("AddressLine2", TestString, 50, "");

        assert_eq!(result, Outcome::Success(Optional::Absent));
    }

    #[rstest]
    fn test_create_string_option_valid_is_present() {
        let result = create_string_option("AddressLine2", TestString, 50, "Suite 12");

        assert_eq!(
            result,
            Outcome::Success(Optional::Present(TestString("Suite 12".to_string())))
        );
    }

    #[rstest]
    fn test_create_string_option_too_long() {
        let input = "a".repeat(51);
        let result = create_string_option("AddressLine2", TestString, 50, &input);

        assert_eq!(
            result.failure(),
            Some(ValidationError::new(
                "AddressLine2",
                "Must not be more than 50 chars"
            ))
        );
    }

    // =========================================================================
    // create_integer Tests
    // =========================================================================

    #[rstest]
    #[case(1, true)]
    #[case(500, true)]
    #[case(1000, true)]
    fn test_create_integer_in_range(#[case] value: u32, #[case] expected: bool) {
        let result = create_integer("Quantity", TestInteger, 1, 1000, value);

        assert_eq!(result.is_success(), expected);
    }

    #[rstest]
    fn test_create_integer_below_min() {
        let result = create_integer("Quantity", TestInteger, 1, 1000, 0);

        assert_eq!(
            result.failure(),
            Some(ValidationError::new("Quantity", "Must not be less than 1"))
        );
    }

    #[rstest]
    fn test_create_integer_above_max() {
        let result = create_integer("Quantity", TestInteger, 1, 1000, 1001);

        assert_eq!(
            result.failure(),
            Some(ValidationError::new(
                "Quantity",
                "Must not be greater than 1000"
            ))
        );
    }

    // =========================================================================
    // create_decimal Tests
    // =========================================================================

    #[rstest]
    #[case("0.05", true)]
    #[case("50.00", true)]
    #[case("100.00", true)]
    #[case("0.04", false)]
    #[case("100.01", false)]
    fn test_create_decimal_range(#[case] raw: &str, #[case] expected: bool) {
        let value = Decimal::from_str(raw).unwrap();
        let min = Decimal::from_str("0.05").unwrap();
        let max = Decimal::from_str("100.00").unwrap();

        let result = create_decimal("Quantity", TestDecimal, min, max, value);

        assert_eq!(result.is_success(), expected);
    }

    #[rstest]
    fn test_create_decimal_below_min_message() {
        let min = Decimal::from_str("0.05").unwrap();
        let max = Decimal::from_str("100.00").unwrap();

        let result = create_decimal("Quantity", TestDecimal, min, max, Decimal::ZERO);

        assert_eq!(
            result.failure(),
            Some(ValidationError::new(
                "Quantity",
                "Must not be less than 0.05"
            ))
        );
    }

    // =========================================================================
    // create_like Tests
    // =========================================================================

    #[rstest]
    fn test_create_like_valid() {
        let pattern = Regex::new(r"^W\d{4}$").unwrap();
        let result = create_like("WidgetCode", TestString, &pattern, "W1234");

        assert_eq!(result, Outcome::Success(TestString("W1234".to_string())));
    }

    #[rstest]
    fn test_create_like_empty_rejected_before_pattern() {
        let pattern = Regex::new(r"^W\d{4}$").unwrap();
        let result = create_like("WidgetCode", TestString, &pattern, "");

        assert_eq!(
            result.failure(),
            Some(ValidationError::new("WidgetCode", "Must not be empty"))
        );
    }

    #[rstest]
    fn test_create_like_mismatch_reports_value_and_pattern() {
        let pattern = Regex::new(r"^W\d{4}$").unwrap();
        let result = create_like("WidgetCode", TestString, &pattern, "W123");

        assert_eq!(
            result.failure(),
            Some(ValidationError::new(
                "WidgetCode",
                "'W123' must match the pattern '^W\\d{4}$'"
            ))
        );
    }

    #[rstest]
    fn test_create_like_partial_match_without_anchors() {
        let pattern = Regex::new(r"\d{4}").unwrap();
        let result = create_like("Code", TestString, &pattern, "prefix1234suffix");

        assert!(result.is_success());
    }
}
