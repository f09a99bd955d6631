use serde::{Deserialize, Serialize};

/// JSON body returned by the backend for any non-2xx response
///
/// `message` is meant for the end user; clients fall back to their own
/// generic text when it is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
