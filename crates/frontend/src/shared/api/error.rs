use thiserror::Error;

/// Failure of any catalog API call
///
/// Network errors, undecodable bodies and non-2xx responses all end up here.
/// Only `message` is ever shown to the user; `detail` is for the console log.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("request failed (status {status:?}): {}", .detail.as_deref().or(.message.as_deref()).unwrap_or("unknown error"))]
pub struct ApiError {
    pub status: Option<u16>,
    /// Human-readable text supplied by the server
    pub message: Option<String>,
    pub detail: Option<String>,
}

impl ApiError {
    /// Error response carrying the server's message, if it sent one
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        Self {
            status: Some(status),
            message: message.filter(|m| !m.trim().is_empty()),
            detail: None,
        }
    }

    /// Transport-level failure (no response)
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self {
            detail: Some(err.to_string()),
            ..Self::default()
        }
    }

    /// Response arrived but its body could not be read
    pub fn decode(status: Option<u16>, err: impl std::fmt::Display) -> Self {
        Self {
            status,
            detail: Some(format!("invalid response body: {}", err)),
            ..Self::default()
        }
    }

    /// Text for a notification: the server's message or the given fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}
