use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Uniform envelope returned by every portal API endpoint.
///
/// On the wire this is `{success: bool, data?, message?, errors?}`. It is
/// decoded into a proper two-state result so callers can never observe a
/// `success: true` body with no payload: that combination is folded into
/// [`ApiResponse::Failure`] at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "RawResponse<T>",
    into = "RawResponse<T>",
    bound(
        serialize = "T: Serialize + Clone",
        deserialize = "T: serde::Deserialize<'de>"
    )
)]
pub enum ApiResponse<T> {
    Success {
        data: T,
        message: Option<String>,
    },
    Failure {
        message: String,
        errors: Option<HashMap<String, Vec<String>>>,
    },
}

impl<T> ApiResponse<T> {
    /// A successful response with no accompanying message.
    pub fn success(data: T) -> Self {
        ApiResponse::Success {
            data,
            message: None,
        }
    }

    /// A failed response with no field-level errors.
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse::Failure {
            message: message.into(),
            errors: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    /// Human-readable message, present on every failure and optionally on
    /// successes.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiResponse::Success { message, .. } => message.as_deref(),
            ApiResponse::Failure { message, .. } => Some(message),
        }
    }

    /// Field-level validation errors, if the failure carried any.
    pub fn errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        match self {
            ApiResponse::Success { .. } => None,
            ApiResponse::Failure { errors, .. } => errors.as_ref(),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }
}

/// The literal wire shape.
#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::Deserialize<'de>"
))]
struct RawResponse<T> {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    errors: Option<HashMap<String, Vec<String>>>,
}

impl<T> From<RawResponse<T>> for ApiResponse<T> {
    fn from(raw: RawResponse<T>) -> Self {
        match (raw.success, raw.data) {
            (true, Some(data)) => ApiResponse::Success {
                data,
                message: raw.message,
            },
            (true, None) => ApiResponse::Failure {
                message: raw
                    .message
                    .unwrap_or_else(|| "Malformed response: missing payload".to_string()),
                errors: raw.errors,
            },
            (false, _) => ApiResponse::Failure {
                message: raw.message.unwrap_or_else(|| "Request failed".to_string()),
                errors: raw.errors,
            },
        }
    }
}

impl<T> From<ApiResponse<T>> for RawResponse<T> {
    fn from(response: ApiResponse<T>) -> Self {
        match response {
            ApiResponse::Success { data, message } => RawResponse {
                success: true,
                message,
                data: Some(data),
                errors: None,
            },
            ApiResponse::Failure { message, errors } => RawResponse {
                success: false,
                message: Some(message),
                data: None,
                errors,
            },
        }
    }
}
