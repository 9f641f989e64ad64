//! Pana Client - HTTP client for the PanaSystem API
//!
//! Typed access to the back-office REST API: configuration, an
//! authentication context with an explicit login/logout lifecycle, a
//! role-based route guard, per-resource endpoint modules, and a
//! reusable debounce utility for search inputs.

pub mod api;
pub mod auth;
pub mod config;
pub mod debounce;
pub mod error;
pub mod guard;
pub mod http;

pub use auth::{AuthContext, LoginRequest, LoginResponse, UserInfo};
pub use config::ClientConfig;
pub use debounce::Debouncer;
pub use error::{ClientError, ClientResult};
pub use guard::{RouteDecision, route_decision};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::response::{ApiErrorBody, Page};
