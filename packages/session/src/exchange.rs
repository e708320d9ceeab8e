use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;
use crate::user::User;

/// Payload returned by a successful credential exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Remote credential exchange (login and registration).
///
/// Implementations never raise for expected failures: wrong credentials,
/// validation errors and transport problems all come back as
/// [`ApiResponse::Failure`] with a human-readable message.
pub trait AuthExchange {
    /// Trade email and password for a token and user record.
    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = ApiResponse<AuthPayload>>;

    /// Create an account; on success the caller is logged in immediately.
    fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> impl std::future::Future<Output = ApiResponse<AuthPayload>>;
}
