//! # order-railway
//!
//! A railway-oriented order placement library.
//!
//! Fallible steps are composed as a two-track pipeline: a chain of
//! `map`/`and_then` stays on the success track until the first failure,
//! then carries that single error past every later step untouched. The
//! containers live in [`railway`]; the order-taking domain built on them
//! follows "Domain Modeling Made Functional".
//!
//! ## Module Structure
//!
//! - [`railway`]: `Outcome`, `Optional` and the suspension `AsyncOutcome`
//! - [`simple_types`]: Constrained primitive types (`String50`, `OrderId`,
//!   `ProductCode`, `Price`, etc.)
//! - [`compound_types`]: `PersonalName`, `CustomerInfo`, `Address`
//! - [`workflow`]: The place-order workflow (state transitions expressed
//!   via types)

#![forbid(unsafe_code)]

pub mod compound_types;
pub mod railway;
pub mod simple_types;
pub mod workflow;
