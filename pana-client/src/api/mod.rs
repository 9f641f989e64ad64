//! Typed API endpoints
//!
//! One module per REST resource. Each function takes an authenticated
//! [`HttpClient`](crate::HttpClient); list endpoints accept a filter
//! struct that serializes only its set fields into the query string,
//! matching how the dashboard screens build their requests.

pub mod customers;
pub mod expenses;
pub mod products;
pub mod returns;
pub mod sales;
pub mod statistics;
pub mod users;

/// Query-string parameters of a filter struct (set fields only)
pub trait QueryParams {
    fn params(&self) -> Vec<(&'static str, String)>;
}
