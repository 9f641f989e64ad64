//! HTTP client for the PanaSystem API
//!
//! Thin reqwest wrapper: token auth header, query-string building from
//! typed filters, and status-code to [`ClientError`] mapping. The API
//! answers entities directly (no envelope); validation failures answer
//! a field-to-messages map which is flattened into the error.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::response::ApiErrorBody;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the PanaSystem API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value (DRF token scheme)
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Token {}", t))
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.get_query(path, &[]).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ClientResult<T> {
        tracing::debug!(path, params = params.len(), "GET");
        let request = self.authorized(self.client.get(self.url(path)).query(params));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let request = self.authorized(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let request = self.authorized(self.client.post(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request and ignore the response body (204-style
    /// endpoints)
    pub async fn post_no_content(&self, path: &str) -> ClientResult<()> {
        tracing::debug!(path, "POST");
        let request = self.authorized(self.client.post(self.url(path)));
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::error_from(status, response.text().await?))
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "PUT");
        let request = self.authorized(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "PATCH");
        let request = self.authorized(self.client.patch(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request (expects an empty 204 response)
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        tracing::debug!(path, "DELETE");
        let request = self.authorized(self.client.delete(self.url(path)));
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::error_from(status, response.text().await?))
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_from(status, text));
        }

        Self::decode_body(&text)
    }

    /// Decode a successful body; a mismatched shape is an
    /// [`ClientError::InvalidResponse`], not a transport error.
    fn decode_body<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
        serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    fn error_from(status: StatusCode, body: String) -> ClientError {
        // Validation bodies are field->messages maps; flatten them the
        // way the screens display them. Other bodies pass through raw.
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .filter(|e| !e.is_empty())
            .map(|e| e.messages())
            .unwrap_or_else(|| body.clone());

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ClientConfig::new("http://localhost:8000/api/").build_http_client();
        assert_eq!(
            client.url("/sales/"),
            "http://localhost:8000/api/sales/"
        );
        assert_eq!(client.url("products/"), "http://localhost:8000/api/products/");
    }

    #[test]
    fn test_auth_header_uses_token_scheme() {
        let client = ClientConfig::new("http://localhost:8000/api")
            .with_token("abc123")
            .build_http_client();
        assert_eq!(client.auth_header().as_deref(), Some("Token abc123"));
    }

    #[test]
    fn test_validation_error_flattens_field_messages() {
        let err = HttpClient::error_from(
            StatusCode::BAD_REQUEST,
            r#"{"customer": ["Este campo es requerido."]}"#.to_string(),
        );
        match err {
            ClientError::Validation(message) => {
                assert_eq!(message, "Este campo es requerido.")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_error_map_falls_back_to_raw_body() {
        let err = HttpClient::error_from(StatusCode::BAD_REQUEST, "{}".to_string());
        match err {
            ClientError::Validation(message) => assert_eq!(message, "{}"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_success_body_is_invalid_response() {
        let result: ClientResult<shared::models::Product> =
            HttpClient::decode_body(r#"{"unexpected": true}"#);
        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
    }

    #[test]
    fn test_unauthorized_maps_to_dedicated_variant() {
        let err = HttpClient::error_from(StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, ClientError::Unauthorized));
    }
}
