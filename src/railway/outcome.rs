//! Outcome type - a two-track success/failure container.
//!
//! This module provides the `Outcome<T, E>` type, the success track and
//! failure track of a railway-oriented pipeline. A chain of fallible steps
//! composed through `map`/`and_then` switches onto the failure track at the
//! first `Failure` and stays there: every later step passes the error along
//! untouched.
//!
//! # Examples
//!
//! ```rust
//! use order_railway::railway::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input
//!         .parse()
//!         .map_or_else(|_| Outcome::Failure(format!("not a number: {input}")), Outcome::Success)
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Outcome::Success(42));
//!
//! // The first failure short-circuits the rest of the chain.
//! let chained = parse("oops").map(|n| n * 2).and_then(|n| parse(&n.to_string()));
//! assert_eq!(chained, Outcome::Failure("not a number: oops".to_string()));
//! ```

use std::fmt;

use super::async_outcome::AsyncOutcome;

/// A value that is either a success or a failure.
///
/// `Outcome<T, E>` is a closed sum type: the discriminant is the variant tag,
/// and exactly one of the two payloads exists. Instances are immutable; every
/// combinator consumes its input and produces a fresh `Outcome`.
///
/// # Type Parameters
///
/// * `T` - The type carried on the success track
/// * `E` - The type carried on the failure track
///
/// # Examples
///
/// ```rust
/// use order_railway::railway::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// let failure: Outcome<i32, String> = Outcome::Failure("broken".to_string());
///
/// assert!(success.is_success());
/// assert!(failure.is_failure());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The success variant, carrying the computed value.
    Success(T),
    /// The failure variant, carrying the error that stopped the pipeline.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Tag Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failure("broken".to_string());
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option<T>`, consuming the outcome.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option<E>`, consuming the outcome.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Success(21);
    /// assert_eq!(success.map(|n| n * 2), Outcome::Success(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("broken".to_string());
    /// assert_eq!(failure.map(|n| n * 2), Outcome::Failure("broken".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the error, leaving a success untouched.
    ///
    /// This is the dual of [`map`](Self::map): only the failure track is
    /// transformed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Failure("broken".to_string());
    /// assert_eq!(failure.map_error(|e| e.len()), Outcome::Failure(6));
    /// ```
    #[inline]
    pub fn map_error<F, G>(self, function: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a fallible step, flattening the result.
    ///
    /// On `Success` the function is applied and its outcome returned directly.
    /// On `Failure` the function is never invoked and the original error is
    /// carried over to the new success type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Outcome;
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Outcome::Success(n / 2)
    ///     } else {
    ///         Outcome::Failure("odd".to_string())
    ///     }
    /// };
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(42);
    /// assert_eq!(outcome.and_then(halve), Outcome::Success(21));
    /// assert_eq!(Outcome::Success(21).and_then(halve), Outcome::Failure("odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Binds a second independent fallible value and combines both successes.
    ///
    /// The function receives a reference to the source success value and
    /// produces an intermediate outcome. When both are successes the two
    /// original values are merged with `combine`. When either fails, the
    /// earlier failure wins: a source error is returned without evaluating
    /// `function` at all.
    ///
    /// This is the workhorse of multi-field validation, where each field is
    /// validated independently and the results are assembled into one record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Outcome;
    ///
    /// let first: Outcome<i32, String> = Outcome::Success(1);
    /// let combined = first.and_then2(
    ///     |_| Outcome::Success("one".to_string()),
    ///     |number, word| (number, word),
    /// );
    /// assert_eq!(combined, Outcome::Success((1, "one".to_string())));
    /// ```
    #[inline]
    pub fn and_then2<U, V, F, C>(self, function: F, combine: C) -> Outcome<V, E>
    where
        F: FnOnce(&T) -> Outcome<U, E>,
        C: FnOnce(T, U) -> V,
    {
        match self {
            Self::Success(value) => match function(&value) {
                Outcome::Success(other) => Outcome::Success(combine(value, other)),
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Collects a sequence of outcomes into one outcome of a list.
    ///
    /// Items are consumed in order. The first `Failure` is returned
    /// immediately and no later item is pulled from the iterator, so a lazy
    /// iterator of validations stops evaluating at the first invalid element.
    /// When every item succeeds, the values are returned in their original
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_railway::railway::Outcome;
    ///
    /// let all: Vec<Outcome<i32, String>> =
    ///     vec![Outcome::Success(1), Outcome::Success(2), Outcome::Success(3)];
    /// assert_eq!(Outcome::sequence(all), Outcome::Success(vec![1, 2, 3]));
    ///
    /// let mixed: Vec<Outcome<i32, String>> = vec![
    ///     Outcome::Success(1),
    ///     Outcome::Failure("first".to_string()),
    ///     Outcome::Failure("second".to_string()),
    /// ];
    /// assert_eq!(Outcome::sequence(mixed), Outcome::Failure("first".to_string()));
    /// ```
    pub fn sequence<I>(outcomes: I) -> Outcome<Vec<T>, E>
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut values = Vec::new();
        for outcome in outcomes {
            match outcome {
                Self::Success(value) => values.push(value),
                Self::Failure(error) => return Outcome::Failure(error),
            }
        }
        Outcome::Success(values)
    }
}

impl<T, E> Outcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Lifts this outcome into the async container.
    ///
    /// The resulting suspension resolves immediately to this outcome; no
    /// side effect is attached.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use order_railway::railway::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Success(42);
    /// let resolved = outcome.into_async().run().await;
    /// assert_eq!(resolved, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn into_async(self) -> AsyncOutcome<T, E> {
        AsyncOutcome::from_outcome(self)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` to an `Outcome` (`Ok` to `Success`, `Err` to `Failure`).
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result` (`Success` to `Ok`, `Failure` to `Err`).
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
