//! Authentication context
//!
//! One owned place for the token and current user, with an explicit
//! lifecycle: set at login, cleared at logout. Components ask the
//! context for an authenticated client instead of reading stored
//! credentials ad hoc.

use serde::{Deserialize, Serialize};
use shared::models::Role;

use crate::{ClientConfig, ClientError, ClientResult, HttpClient};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// The logged-in user, as reported at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub role: Role,
}

/// Authentication context for one dashboard session
#[derive(Debug)]
pub struct AuthContext {
    config: ClientConfig,
    session: Option<(String, UserInfo)>,
}

impl AuthContext {
    /// Create a logged-out context
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Log in with username and password; on success the context holds
    /// the token and user until [`AuthContext::logout`].
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<UserInfo> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let client = self.config.build_http_client();
        let response: LoginResponse = client.post("auth/login/", &request).await?;

        tracing::info!(username = %response.user.username, "logged in");
        self.session = Some((response.token, response.user.clone()));
        Ok(response.user)
    }

    /// Log out: notify the server, then clear token and user. The
    /// local session is cleared even if the server call fails.
    pub async fn logout(&mut self) -> ClientResult<()> {
        let result = match self.client() {
            Ok(client) => client.post_no_content("auth/logout/").await,
            Err(_) => Ok(()),
        };
        if self.session.take().is_some() {
            tracing::info!("logged out");
        }
        result
    }

    /// The logged-in user, if any
    pub fn current_user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|(_, user)| user)
    }

    /// The session token, if logged in
    pub fn auth_token(&self) -> Option<&str> {
        self.session.as_ref().map(|(token, _)| token.as_str())
    }

    /// Role of the logged-in user, if any
    pub fn role(&self) -> Option<Role> {
        self.current_user().map(|user| user.role)
    }

    /// An HTTP client carrying the session token; fails when logged out
    pub fn client(&self) -> ClientResult<HttpClient> {
        let token = self.auth_token().ok_or(ClientError::Unauthorized)?;
        Ok(self.config.build_http_client().with_token(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_context_has_no_user_or_client() {
        let ctx = AuthContext::new(ClientConfig::default());
        assert!(ctx.current_user().is_none());
        assert!(ctx.auth_token().is_none());
        assert!(matches!(ctx.client(), Err(ClientError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_logout_clears_session_locally() {
        let mut ctx = AuthContext::new(ClientConfig::default());
        ctx.session = Some((
            "tok".to_string(),
            UserInfo {
                username: "ana".to_string(),
                role: Role::Employee,
            },
        ));
        assert_eq!(ctx.role(), Some(Role::Employee));

        // Server is unreachable in tests; the local session must be
        // cleared regardless of the network outcome.
        let _ = ctx.logout().await;
        assert!(ctx.current_user().is_none());
        assert!(ctx.auth_token().is_none());
    }
}
