//! Product code types: `WidgetCode`, `GizmoCode` and the `ProductCode` sum.

use regex::Regex;
use std::sync::LazyLock;

use crate::railway::Outcome;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// WidgetCode
// =============================================================================

/// A widget product code: `W` followed by exactly four digits.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::WidgetCode;
///
/// assert!(WidgetCode::create("ProductCode", "W1234").is_success());
/// assert!(WidgetCode::create("ProductCode", "W123").is_failure());
/// assert!(WidgetCode::create("ProductCode", "G123").is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidgetCode(String);

static WIDGET_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^W\d{4}$").expect("Invalid widget code regex pattern"));

impl WidgetCode {
    /// Validates a raw string into a `WidgetCode`.
    pub fn create(field_name: &str, value: &str) -> Outcome<Self, ValidationError> {
        constrained_type::create_like(field_name, Self, &WIDGET_CODE_PATTERN, value)
    }

    /// Returns the inner code string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// GizmoCode
// =============================================================================

/// A gizmo product code: `G` followed by exactly three digits.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::GizmoCode;
///
/// assert!(GizmoCode::create("ProductCode", "G123").is_success());
/// assert!(GizmoCode::create("ProductCode", "G1234").is_failure());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GizmoCode(String);

static GIZMO_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^G\d{3}$").expect("Invalid gizmo code regex pattern"));

impl GizmoCode {
    /// Validates a raw string into a `GizmoCode`.
    pub fn create(field_name: &str, value: &str) -> Outcome<Self, ValidationError> {
        constrained_type::create_like(field_name, Self, &GIZMO_CODE_PATTERN, value)
    }

    /// Returns the inner code string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// ProductCode
// =============================================================================

/// Sum of the recognized product code families.
///
/// Dispatch happens on the leading character: `W` is validated as a widget
/// code, `G` as a gizmo code, and anything else is rejected outright.
///
/// # Examples
///
/// ```rust
/// use order_railway::simple_types::ProductCode;
///
/// let widget = ProductCode::create("ProductCode", "W1234").success().unwrap();
/// assert!(matches!(widget, ProductCode::Widget(_)));
///
/// let unknown = ProductCode::create("ProductCode", "X9999");
/// assert_eq!(
///     unknown.failure().unwrap().message,
///     "Format not recognized 'X9999'"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductCode {
    /// A widget product code.
    Widget(WidgetCode),
    /// A gizmo product code.
    Gizmo(GizmoCode),
}

impl ProductCode {
    /// Validates a raw string into a `ProductCode`.
    ///
    /// Emptiness is rejected first, then the family is chosen by the leading
    /// character. A leading character outside the known families fails with
    /// `Format not recognized '<code>'`.
    pub fn create(field_name: &str, code: &str) -> Outcome<Self, ValidationError> {
        if code.is_empty() {
            return Outcome::Failure(ValidationError::new(field_name, "Must not be empty"));
        }

        if code.starts_with('W') {
            WidgetCode::create(field_name, code).map(Self::Widget)
        } else if code.starts_with('G') {
            GizmoCode::create(field_name, code).map(Self::Gizmo)
        } else {
            Outcome::Failure(ValidationError::new(
                field_name,
                &format!("Format not recognized '{code}'"),
            ))
        }
    }

    /// Returns the inner code string regardless of family.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Widget(widget_code) => widget_code.value(),
            Self::Gizmo(gizmo_code) => gizmo_code.value(),
        }
    }
}
