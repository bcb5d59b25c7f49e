//! Railway-oriented composition containers.
//!
//! The two-track model: a computation rides either the success track or the
//! failure track, and combinators keep it there. [`Outcome`] is the
//! synchronous container, [`Optional`] its payload-free sibling for ordinary
//! absence, and [`AsyncOutcome`] the deferred suspension for steps that
//! cross an asynchronous boundary.

pub mod async_outcome;
pub mod optional;
pub mod outcome;

pub use async_outcome::AsyncOutcome;
pub use optional::Optional;
pub use outcome::Outcome;
