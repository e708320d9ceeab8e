//! # API crate — HTTP client for the portal backend
//!
//! [`HttpAuthClient`] implements the [`AuthExchange`] contract over HTTP.
//! The backend wraps every response — success or error status — in the same
//! `{success, data?, message?, errors?}` envelope, so the body is decoded
//! regardless of the HTTP status code. Transport and decode faults never
//! escape as errors; they are folded into an [`ApiResponse::Failure`] with a
//! readable message, because the callers (the session store and the forms
//! behind it) treat every failure uniformly.

use serde::de::DeserializeOwned;
use serde::Serialize;
use session::{ApiResponse, AuthExchange, AuthPayload};

/// Base URL of the backend API used when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Faults internal to the client, always folded into a failure response
/// before reaching callers.
#[derive(Debug, thiserror::Error)]
enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP implementation of the credential exchange.
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAuthClient {
    /// Client against [`DEFAULT_API_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    /// Client against a specific backend, e.g. a staging deployment.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;
        // Error statuses carry the same envelope; decode the body either way.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn exchange<B>(&self, path: &str, body: &B) -> ApiResponse<AuthPayload>
    where
        B: Serialize,
    {
        match self.post_json(path, body).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(path, error = %err, "auth exchange failed");
                ApiResponse::failure(err.to_string())
            }
        }
    }
}

impl Default for HttpAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
}

impl AuthExchange for HttpAuthClient {
    async fn authenticate(&self, email: &str, password: &str) -> ApiResponse<AuthPayload> {
        self.exchange("/auth/login", &LoginBody { email, password })
            .await
    }

    async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> ApiResponse<AuthPayload> {
        self.exchange(
            "/auth/register",
            &RegisterBody {
                name,
                email,
                password,
                phone,
            },
        )
        .await
    }
}
