//! `AsyncOutcome` - the suspension-wrapped outcome.
//!
//! `AsyncOutcome<T, E>` is [`Outcome`] with a deferred asynchronous boundary
//! around it: a description of a fallible computation that is not executed
//! until [`run`](AsyncOutcome::run) is awaited. The combinators mirror the
//! synchronous container operator for operator, with one addition: each
//! chained step is awaited to completion before the next begins, and a
//! `Failure` resolves the whole chain immediately without awaiting any later
//! step.
//!
//! # Examples
//!
//! ```rust,ignore
//! use order_railway::railway::{AsyncOutcome, Outcome};
//!
//! #[tokio::main]
//! async fn main() {
//!     let chain: AsyncOutcome<i32, String> = AsyncOutcome::succeed(10)
//!         .map(|n| n * 2)
//!         .and_then(|n| AsyncOutcome::succeed(n + 1));
//!     assert_eq!(chain.run().await, Outcome::Success(21));
//!
//!     // A failure short-circuits: the second step is never awaited.
//!     let failed: AsyncOutcome<i32, String> = AsyncOutcome::fail("broken".to_string())
//!         .and_then(|n| AsyncOutcome::succeed(n + 1));
//!     assert_eq!(failed.run().await, Outcome::Failure("broken".to_string()));
//! }
//! ```

use std::future::Future;
use std::pin::Pin;

use super::outcome::Outcome;

/// A deferred asynchronous computation resolving to an [`Outcome`].
///
/// The wrapped computation runs only when [`run`](Self::run) is awaited,
/// which should happen at the edge of the program (a handler or test body).
/// Within one chain, steps execute strictly in sequence; no step runs
/// concurrently with another step of the same chain.
pub struct AsyncOutcome<T, E> {
    /// The wrapped suspension producing the outcome.
    run_outcome: Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Outcome<T, E>> + Send>> + Send>,
}

// =============================================================================
// Constructors
// =============================================================================

impl<T: 'static, E: 'static> AsyncOutcome<T, E> {
    /// Creates an `AsyncOutcome` from an async closure.
    ///
    /// The closure is not invoked until [`run`](Self::run) is awaited.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            run_outcome: Box::new(move || Box::pin(action())),
        }
    }

    /// Creates an `AsyncOutcome` from an existing future.
    ///
    /// The future should not have been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            run_outcome: Box::new(move || Box::pin(future)),
        }
    }
}

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Wraps an already-resolved outcome in a suspension.
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        Self {
            run_outcome: Box::new(move || Box::pin(async move { outcome })),
        }
    }

    /// Wraps a success value, resolving immediately on the success track.
    pub fn succeed(value: T) -> Self {
        Self::from_outcome(Outcome::Success(value))
    }

    /// Wraps an error, resolving immediately on the failure track.
    pub fn fail(error: E) -> Self {
        Self::from_outcome(Outcome::Failure(error))
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<T: 'static, E: 'static> AsyncOutcome<T, E> {
    /// Executes the suspension and returns the resolved outcome.
    ///
    /// This is the only way to extract a value; call it at the edge of the
    /// program.
    pub async fn run(self) -> Outcome<T, E> {
        (self.run_outcome)().await
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<T: Send + 'static, E: Send + 'static> AsyncOutcome<T, E> {
    /// Applies a function to the success value once resolved.
    ///
    /// A failure passes through untouched, exactly as with
    /// [`Outcome::map`].
    pub fn map<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.run().await.map(function) })
    }

    /// Applies a function to the error once resolved; a success passes
    /// through untouched.
    pub fn map_error<F, G>(self, function: G) -> AsyncOutcome<T, F>
    where
        F: Send + 'static,
        G: FnOnce(E) -> F + Send + 'static,
    {
        AsyncOutcome::new(move || async move { self.run().await.map_error(function) })
    }

    /// Chains a second suspension, flattening the result.
    ///
    /// The source is awaited first. On `Success` the continuation is built
    /// and awaited; on `Failure` the continuation is never built, nothing
    /// further is awaited, and the chain resolves to the original error.
    pub fn and_then<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        U: Send + 'static,
        F: FnOnce(T) -> AsyncOutcome<U, E> + Send + 'static,
    {
        AsyncOutcome::new(move || async move {
            match self.run().await {
                Outcome::Success(value) => function(value).run().await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Binds a second independent suspension and combines both successes.
    ///
    /// The async rendition of [`Outcome::and_then2`]: the source error takes
    /// precedence and suppresses the intermediate computation entirely. The
    /// continuation receives its own copy of the source value so the original
    /// can still be merged by `combine`.
    pub fn and_then2<U, V, F, C>(self, function: F, combine: C) -> AsyncOutcome<V, E>
    where
        T: Clone,
        U: Send + 'static,
        V: Send + 'static,
        F: FnOnce(T) -> AsyncOutcome<U, E> + Send + 'static,
        C: FnOnce(T, U) -> V + Send + 'static,
    {
        AsyncOutcome::new(move || async move {
            match self.run().await {
                Outcome::Success(value) => match function(value.clone()).run().await {
                    Outcome::Success(other) => Outcome::Success(combine(value, other)),
                    Outcome::Failure(error) => Outcome::Failure(error),
                },
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        })
    }

    /// Collects a list of suspensions into one suspension of a list.
    ///
    /// Items are awaited strictly in order, never concurrently. The first
    /// `Failure` resolves the whole sequence immediately; later items are
    /// dropped unawaited. When every item succeeds the values are returned
    /// in their original order.
    pub fn sequence(outcomes: Vec<Self>) -> AsyncOutcome<Vec<T>, E> {
        AsyncOutcome::new(move || async move {
            let mut values = Vec::with_capacity(outcomes.len());
            for outcome in outcomes {
                match outcome.run().await {
                    Outcome::Success(value) => values.push(value),
                    Outcome::Failure(error) => return Outcome::Failure(error),
                }
            }
            Outcome::Success(values)
        })
    }
}
