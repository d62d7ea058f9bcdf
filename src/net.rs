/// HTTP client for the admin backend
///
/// All server communication funnels through `ApiClient`. Requests are
/// plain form posts and JSON gets against the library server; every
/// call returns a `Result` the update loop maps into messages. There
/// are no retries and no cancellation: a reply that arrives after the
/// user moved on just lands in a harmless state update.

use thiserror::Error;

use crate::config::Config;
use crate::state::data::User;

/// What went wrong with a request, in a form the UI can show
///
/// Cloneable on purpose: these travel inside messages and alerts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The server never answered (DNS, refused connection, timeout)
    #[error("Connection error: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status
    #[error("Error {code}: {reason}")]
    Status { code: u16, reason: String },

    /// The server answered 2xx but the payload didn't parse
    #[error("Malformed server response: {message}")]
    Decode { message: String },
}

impl RequestError {
    fn transport(err: reqwest::Error) -> Self {
        RequestError::Transport {
            message: err.to_string(),
        }
    }

    fn status(status: reqwest::StatusCode) -> Self {
        RequestError::Status {
            code: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        }
    }
}

/// Thin wrapper around a shared `reqwest::Client` plus the server
/// coordinates from the config
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_path: String,
    page_size: u32,
}

impl ApiClient {
    /// Builds the client with the configured request timeout. Dies
    /// with a clear message if the TLS backend cannot initialize,
    /// since nothing works without a client.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to build the HTTP client");

        Self {
            http,
            base_url: config.base_url.clone(),
            api_path: config.api_path.clone(),
            page_size: config.page_size,
        }
    }

    // ========== URLs ==========

    fn user_action_url(&self, id: i64, action: &str) -> String {
        format!("{}/admin/users/{}/{}", self.base_url, id, action)
    }

    fn create_url(&self) -> String {
        format!("{}/admin/users/create", self.base_url)
    }

    fn api_url(&self, tail: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_path, tail)
    }

    // ========== Requests ==========

    /// Form-encoded POST returning the raw response body. The body is
    /// what gets shown to the user on success, verbatim.
    async fn post_form(
        &self,
        url: String,
        params: &[(&'static str, String)],
    ) -> Result<String, RequestError> {
        println!("🔄 POST {url}");
        let response = self
            .http
            .post(&url)
            .form(params)
            .send()
            .await
            .map_err(RequestError::transport)?;

        let status = response.status();
        if !status.is_success() {
            eprintln!("⚠️  POST {url} answered {status}");
            return Err(RequestError::status(status));
        }
        response.text().await.map_err(RequestError::transport)
    }

    /// Flips one user's active flag on the server
    pub async fn toggle_user_status(&self, id: i64, active: bool) -> Result<String, RequestError> {
        self.post_form(
            self.user_action_url(id, "toggle-status"),
            &[("active", active.to_string())],
        )
        .await
    }

    /// Removes one user on the server
    pub async fn delete_user(&self, id: i64) -> Result<String, RequestError> {
        self.post_form(self.user_action_url(id, "delete"), &[]).await
    }

    /// Creates a user from the form's field values
    pub async fn create_user(
        &self,
        params: Vec<(&'static str, String)>,
    ) -> Result<String, RequestError> {
        self.post_form(self.create_url(), &params).await
    }

    /// Fetches the user list, optionally filtered by a search term
    pub async fn fetch_users(&self, search: String) -> Result<Vec<User>, RequestError> {
        let url = self.api_url("/users");
        println!("🔄 GET {url}");

        let mut request = self
            .http
            .get(&url)
            .query(&[("size", self.page_size.to_string())]);
        let term = search.trim();
        if !term.is_empty() {
            request = request.query(&[("search", term)]);
        }

        let response = request.send().await.map_err(RequestError::transport)?;
        let status = response.status();
        if !status.is_success() {
            eprintln!("⚠️  GET {url} answered {status}");
            return Err(RequestError::status(status));
        }

        let body = response.text().await.map_err(RequestError::transport)?;
        serde_json::from_str(&body).map_err(|err| RequestError::Decode {
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&Config::new())
    }

    #[test]
    fn test_action_urls_follow_panel_routes() {
        let api = client();
        assert_eq!(
            api.user_action_url(7, "toggle-status"),
            "http://localhost:8080/admin/users/7/toggle-status"
        );
        assert_eq!(
            api.user_action_url(7, "delete"),
            "http://localhost:8080/admin/users/7/delete"
        );
        assert_eq!(api.create_url(), "http://localhost:8080/admin/users/create");
        assert_eq!(
            api.api_url("/users"),
            "http://localhost:8080/admin/api/users"
        );
    }

    #[test]
    fn test_status_errors_surface_the_status_text() {
        let err = RequestError::status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Error 404: Not Found");

        let err = RequestError::status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error 500: Internal Server Error");
    }

    #[test]
    fn test_error_display_texts() {
        let err = RequestError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Connection error: connection refused");

        let err = RequestError::Decode {
            message: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().starts_with("Malformed server response"));
    }

    #[test]
    fn test_malformed_json_maps_to_decode() {
        let result: Result<Vec<User>, _> = serde_json::from_str("not json");
        let err = result
            .map_err(|err| RequestError::Decode {
                message: err.to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, RequestError::Decode { .. }));
    }
}
