//! Users (employees) API
//!
//! Administrator-only endpoints; lookups are by username, matching the
//! employee screens' routes.

use shared::models::{User, UserCreate, UserUpdate};

use crate::{ClientResult, HttpClient};

pub async fn list(client: &HttpClient) -> ClientResult<Vec<User>> {
    client.get("users/").await
}

pub async fn get(client: &HttpClient, username: &str) -> ClientResult<User> {
    client.get(&format!("users/{username}/")).await
}

pub async fn create(client: &HttpClient, user: &UserCreate) -> ClientResult<User> {
    client.post("users/", user).await
}

pub async fn update(client: &HttpClient, username: &str, user: &UserUpdate) -> ClientResult<User> {
    client.put(&format!("users/{username}/"), user).await
}

/// Deactivate instead of delete: sale history keeps its author
pub async fn deactivate(client: &HttpClient, username: &str) -> ClientResult<User> {
    client
        .patch(
            &format!("users/{username}/"),
            &UserUpdate {
                is_active: Some(false),
                ..UserUpdate::default()
            },
        )
        .await
}
