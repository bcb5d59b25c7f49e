//! Optional type - a present/absent container.
//!
//! `Optional<T>` is the one-state-or-absent sibling of
//! [`Outcome`](super::Outcome): the failure track carries no payload, only
//! the fact of absence. It is used where absence is a validated, ordinary
//! state rather than an error, such as the optional lines of an address or
//! an acknowledgment that was not sent.
//!
//! # Examples
//!
//! ```rust
//! use order_railway::railway::Optional;
//!
//! let present = Optional::some(21).map(|n| n * 2);
//! assert_eq!(present, Optional::Present(42));
//!
//! let absent: Optional<i32> = Optional::none();
//! assert_eq!(absent.map(|n| n * 2), Optional::Absent);
//! ```

use std::fmt;

/// A value that is either present or absent.
///
/// Unlike a bare nullable value, `Optional<T>` makes absence a first-class
/// tagged state: `Absent` means "validated as not there", never "not yet
/// initialized". Instances are immutable; combinators consume their input.
///
/// # Examples
///
/// ```rust
/// use order_railway::railway::Optional;
///
/// let present = Optional::some("hello");
/// assert!(present.is_present());
/// assert!(present.contains(&"hello"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// The value is present.
    Present(T),
    /// The value is absent.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Wraps a value in the present state.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Tag Checking
    // =========================================================================

    /// Returns `true` if the value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if the value is absent.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns a reference to the value if present.
    #[inline]
    pub const fn value_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Applies a function to the value if present; absence passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Optional;
    ///
    /// assert_eq!(Optional::some(21).map(|n| n * 2), Optional::Present(42));
    /// assert_eq!(Optional::<i32>::none().map(|n| n * 2), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Chains a step that may itself be absent, flattening the result.
    ///
    /// On `Absent` the function is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Optional;
    ///
    /// let half = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Optional::some(n / 2)
    ///     } else {
    ///         Optional::none()
    ///     }
    /// };
    ///
    /// assert_eq!(Optional::some(42).and_then(half), Optional::Present(21));
    /// assert_eq!(Optional::some(21).and_then(half), Optional::Absent);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Binds a second independently-optional value and combines both.
    ///
    /// Mirrors [`Outcome::and_then2`](super::Outcome::and_then2) with absence
    /// in place of an error payload: if either side is absent the result is
    /// absent, and an absent source never evaluates `function`.
    #[inline]
    pub fn and_then2<U, V, F, C>(self, function: F, combine: C) -> Optional<V>
    where
        F: FnOnce(&T) -> Optional<U>,
        C: FnOnce(T, U) -> V,
    {
        match self {
            Self::Present(value) => match function(&value) {
                Optional::Present(other) => Optional::Present(combine(value, other)),
                Optional::Absent => Optional::Absent,
            },
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Queries and Defaults
    // =========================================================================

    /// Tests whether a present value equals the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Optional;
    ///
    /// assert!(Optional::some(42).contains(&42));
    /// assert!(!Optional::some(42).contains(&43));
    /// assert!(!Optional::<i32>::none().contains(&42));
    /// ```
    #[inline]
    pub fn contains(&self, expected: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Present(value) => value == expected,
            Self::Absent => false,
        }
    }

    /// Returns the value, or the given fallback when absent.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts an `Option` (`Some` to `Present`, `None` to `Absent`).
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts an `Optional` (`Present` to `Some`, `Absent` to `None`).
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}
