//! Fetch Errors
//!
//! Failures surfaced by backend calls. Malformed fields never end up here,
//! they are defaulted during normalization.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Request never produced a response (offline, DNS, CORS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Response arrived with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Backend answered `success: false`
    #[error("{0}")]
    Rejected(String),
}

impl FetchError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown status").to_string(),
            }
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_alert_text() {
        let err = FetchError::Status { status: 500, message: "Internal Server Error".to_string() };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_rejected_shows_backend_message_only() {
        let err = FetchError::Rejected("Item Milk not found in pantry".to_string());
        assert_eq!(err.to_string(), "Item Milk not found in pantry");
        assert_eq!(err.status_code(), None);
    }
}
