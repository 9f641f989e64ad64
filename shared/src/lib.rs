//! Shared types for PanaSystem
//!
//! Domain models, enumerations, and the line-item pricing core used by
//! both the API client and any embedding frontend. This crate owns no
//! durable state: everything here is either a wire type for the
//! PanaSystem REST API or a pure computation over in-memory values.

pub mod models;
pub mod pricing;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Pricing re-exports (the form/resolver pair is the most-used surface)
pub use pricing::{LineEntry, PricedLine, PricedLines, QuantityFormat, SaleForm};
pub use types::{PaymentMethod, SaleState, SaleType, Weekday};
