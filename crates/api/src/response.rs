//! JSON response envelope.
//!
//! Every endpoint responds with the same body shape: `{status, message, data?}`.
//! `status` is `true` for success and `false` for errors; `data` is omitted
//! entirely when there is nothing to return.

use serde::Serialize;

/// Uniform response body for all endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// `true` on success, `false` on error.
    pub status: bool,
    /// Human-readable outcome, e.g. `"Login Successful"`.
    pub message: String,
    /// Payload, omitted from the JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success envelope carrying a payload.
    #[must_use]
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with no payload.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: None,
        }
    }

    /// Error envelope.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_includes_data() {
        let body = ApiResponse::ok("Success Get User", vec!["a", "b"]);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["status"], true);
        assert_eq!(json["message"], "Success Get User");
        assert_eq!(json["data"][0], "a");
    }

    #[test]
    fn test_message_omits_data_key() {
        let body = ApiResponse::message("Success Delete Product");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["status"], true);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_error_is_status_false() {
        let body = ApiResponse::error("Access Denied");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["status"], false);
        assert_eq!(json["message"], "Access Denied");
        assert!(json.get("data").is_none());
    }
}
