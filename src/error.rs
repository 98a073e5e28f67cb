use serde_json::Value;
use thiserror::Error;

/// Number of body characters kept when a response is not JSON.
pub const BODY_SNIPPET_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The response body was not the JSON document we expected.
    #[error("Non-JSON response ({status}): {body}")]
    Protocol { status: u16, body: String },

    /// HTTP failure or an envelope with `success: false`.
    #[error("HTTP {status} {path}\nerrors={errors}\nmessages={messages}")]
    Api {
        status: u16,
        path: String,
        errors: Value,
        messages: Value,
    },

    /// A precondition the user has to fix locally (missing token, no account).
    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0} is still running")]
    Busy(String),

    /// The worker task ended without producing a result.
    #[error("Worker failed: {0}")]
    Worker(String),
}

impl ClientError {
    pub fn protocol(status: u16, raw: &str) -> Self {
        ClientError::Protocol {
            status,
            body: raw.chars().take(BODY_SNIPPET_CHARS).collect(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }

    /// HTTP status attached to the error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Protocol { status, .. } | ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
