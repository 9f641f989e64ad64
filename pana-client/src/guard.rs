//! Role-based route guard
//!
//! Pure mapping from (role, path) to a navigation decision. Login and
//! static assets are public; everything else requires a session, and
//! some dashboard sections require a specific role.

use shared::models::Role;

/// Path prefixes reachable without a session
const PUBLIC_PREFIXES: [&str; 3] = ["/auth/login", "/favicon.ico", "/public"];

/// Sections reserved for administrators
const ADMIN_PREFIXES: [&str; 2] = ["/dashboard/statistics", "/dashboard/employees"];

/// Sections a delivery user may access
const DELIVERY_PREFIXES: [&str; 3] = [
    "/dashboard/delivery",
    "/dashboard/collect",
    "/dashboard/profile",
];

/// Outcome of a navigation check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// No session: send to the login page
    Redirect(&'static str),
    /// Logged in, but the role does not grant this section
    Deny,
}

fn matches_any(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix))
}

/// Decide whether a user (by role, `None` when logged out) may
/// navigate to `path`.
pub fn route_decision(role: Option<Role>, path: &str) -> RouteDecision {
    if matches_any(path, &PUBLIC_PREFIXES) {
        return RouteDecision::Allow;
    }

    let Some(role) = role else {
        return RouteDecision::Redirect("/auth/login");
    };

    match role {
        Role::Administrator => RouteDecision::Allow,
        Role::Employee => {
            if matches_any(path, &ADMIN_PREFIXES) {
                RouteDecision::Deny
            } else {
                RouteDecision::Allow
            }
        }
        Role::Delivery => {
            if matches_any(path, &DELIVERY_PREFIXES) {
                RouteDecision::Allow
            } else {
                RouteDecision::Deny
            }
        }
    }
}
