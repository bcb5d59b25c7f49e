//! Compound domain types assembled from constrained values.
//!
//! Each compound validates its raw inputs field by field on the railway;
//! the first failing field surfaces and later fields are never inspected.

mod address;
mod customer_info;
mod personal_name;

pub use address::Address;
pub use customer_info::CustomerInfo;
pub use personal_name::PersonalName;
