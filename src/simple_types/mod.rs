//! Constrained value types for the order domain.
//!
//! Every type here uses a smart constructor returning an
//! [`Outcome`](crate::railway::Outcome), so only validated values exist at
//! rest and illegal states are unrepresentable. The generic validating
//! helpers live in [`constrained_type`]; each failure is a
//! [`ValidationError`] naming the offending field.
//!
//! # Type categories
//!
//! - string types: `String50`, `EmailAddress`, `ZipCode`
//! - identifier types: `OrderId`, `OrderLineId`
//! - product code types: `WidgetCode`, `GizmoCode`, `ProductCode`
//! - quantity types: `UnitQuantity`, `KilogramQuantity`, `OrderQuantity`
//! - money types: `Price`, `BillingAmount`
//!
//! # Examples
//!
//! ```rust
//! use order_railway::simple_types::{BillingAmount, OrderId, Price, ProductCode};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let order_id = OrderId::create("OrderId", "ORD-2026-001").success().unwrap();
//! assert_eq!(order_id.value(), "ORD-2026-001");
//!
//! let widget = ProductCode::create("ProductCode", "W1234").success().unwrap();
//! assert_eq!(widget.value(), "W1234");
//!
//! let price = Price::create(Decimal::from_str("100.00").unwrap()).success().unwrap();
//! let total = BillingAmount::sum_prices(&[price, price]).success().unwrap();
//! assert_eq!(total.value(), Decimal::from_str("200.00").unwrap());
//! ```

pub mod constrained_type;
mod error;
mod identifier_types;
mod price_types;
mod product_types;
mod quantity_types;
mod string_types;

pub use error::ValidationError;

pub use string_types::{EmailAddress, String50, ZipCode};

pub use identifier_types::{OrderId, OrderLineId};

pub use product_types::{GizmoCode, ProductCode, WidgetCode};

pub use quantity_types::{KilogramQuantity, OrderQuantity, UnitQuantity};

pub use price_types::{BillingAmount, Price};
