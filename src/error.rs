//! Client Error Types
//!
//! Every failure a page can observe while talking to the Surya API.
//! Pages never propagate these past their own state: they are rendered
//! through [`ClientError::display_message`].

use std::time::Duration;
use thiserror::Error;

/// API client error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response (DNS, refused connection, CORS)
    #[error("Network Error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout
    #[error("timeout of {}ms exceeded", .0.as_millis())]
    Timeout(Duration),

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The requested entity does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The body could not be decoded into the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result alias used throughout the client
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Build a status error, preferring the server-provided message
    pub fn status(status: u16, body: &str) -> Self {
        let message = server_message(body)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        ClientError::Status { status, message }
    }

    /// Human-readable text stored in page state
    pub fn display_message(&self) -> String {
        self.to_string()
    }

    /// Whether this failure means the entity is absent
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClientError::NotFound { .. } | ClientError::Status { status: 404, .. }
        )
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Parse(e.to_string())
    }
}

/// Extract `error` or `message` from a JSON error body
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"].iter().find_map(|key| match value.get(*key)? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Object(inner) => inner
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        _ => None,
    })
}
