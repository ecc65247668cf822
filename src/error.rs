//! Error types for the Uber API client.
//!
//! Every fallible operation in this crate returns [`Error`]. Validation
//! failures are reported before any request leaves the client; everything
//! else comes from the transport or from the API's response.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Uber API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Uber API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed at the transport level
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A custom [`Transport`](crate::client::Transport) failed to complete the exchange
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Optional error code from the API
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// No bearer token was set, or the server rejected the one sent
    #[error("Authentication failed ({failure}): {message}")]
    Authentication {
        /// Which side of the 401 split this is
        failure: AuthFailure,
        /// Message reported by the server or the client
        message: String,
    },

    /// Invalid input provided to a function; no request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The caller's fare prompt declined an upfront fare
    #[error("Fare declined: {0}")]
    FareDeclined(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The two kinds of authentication failure the API reports with status 401.
///
/// Both share the same status code, so the distinction is made from the
/// response message and is best-effort only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No bearer token was attached to the request.
    MissingToken,
    /// A token was attached but the server refused it.
    RejectedToken,
}

impl AuthFailure {
    /// Classify a 401 response message.
    pub fn classify(message: &str) -> Self {
        let message = message.to_ascii_lowercase();
        let missing = ["missing", "no authentication", "not provided", "no token"]
            .iter()
            .any(|needle| message.contains(needle));
        if missing {
            AuthFailure::MissingToken
        } else {
            AuthFailure::RejectedToken
        }
    }
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthFailure::MissingToken => write!(f, "missing token"),
            AuthFailure::RejectedToken => write!(f, "rejected token"),
        }
    }
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// The client itself never retries.
    ///
    /// # Example
    ///
    /// ```
    /// use uber_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Transport(_) => true,
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) | Error::NotFound(_) => true,
            Error::Authentication { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn missing_token() -> Self {
        Error::Authentication {
            failure: AuthFailure::MissingToken,
            message: "no bearer token set on the client".to_string(),
        }
    }

    /// Map a non-2xx response to a typed error.
    pub(crate) fn from_status(status: u16, body: Value) -> Self {
        let message = error_message(&body).unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown API error")
                .to_string()
        });

        match status {
            401 => Error::Authentication {
                failure: AuthFailure::classify(&message),
                message,
            },
            404 => Error::NotFound(message),
            _ => Error::from_api_response(status, message, body),
        }
    }

    fn from_api_response(status: u16, message: String, body: Value) -> Self {
        let code = body
            .get("code")
            .and_then(|c| c.as_str())
            .or_else(|| first_error(&body).and_then(|e| e.get("code")).and_then(|c| c.as_str()))
            .map(String::from);

        Error::Api {
            status,
            code,
            message,
            body,
        }
    }
}

// The API reports errors either as `{"message", "code"}` or as
// `{"errors": [{"status", "code", "title"}]}`.
fn error_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(|m| m.as_str())
        .or_else(|| first_error(body).and_then(|e| e.get("title")).and_then(|t| t.as_str()))
        .map(String::from)
}

fn first_error(body: &Value) -> Option<&Value> {
    body.get("errors").and_then(|e| e.as_array()).and_then(|e| e.first())
}
