//! Data models
//!
//! Wire types for the PanaSystem REST API, shared between the client
//! crate and any embedding frontend. All IDs are `i64`; money fields
//! are `rust_decimal::Decimal` serialized as JSON numbers.

pub mod customer;
pub mod expense;
pub mod product;
pub mod returns;
pub mod sale;
pub mod statistics;
pub mod user;

// Re-exports
pub use customer::*;
pub use expense::*;
pub use product::*;
pub use returns::*;
pub use sale::*;
pub use statistics::*;
pub use user::*;
