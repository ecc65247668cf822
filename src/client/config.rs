//! Settings for the default transport and the per-request headers.

use std::time::Duration;

/// Default request timeout of the `reqwest` transport.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options applied when the client builds its transport and its requests.
///
/// `timeout` and `user_agent` only affect the default
/// [`ReqwestTransport`](crate::ReqwestTransport); a custom
/// [`Transport`](crate::Transport) is responsible for its own. The
/// `Accept-Language` header is attached to every request either way.
///
/// ```
/// use std::time::Duration;
/// use uber_rs::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_accept_language("en_US");
/// assert_eq!(config.accept_language.as_deref(), Some("en_US"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// Sent as `User-Agent`
    pub user_agent: String,
    /// Sent as `Accept-Language` when set, e.g. "en_US"
    pub accept_language: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("uber-rs/", env!("CARGO_PKG_VERSION"), " (Rust)").to_string(),
            accept_language: None,
        }
    }
}

impl ClientConfig {
    /// Same as [`ClientConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up on a request after `timeout`.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Identify the caller with `user_agent`.
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..self
        }
    }

    /// Ask for localized responses (product names, error messages).
    pub fn with_accept_language(self, language: impl Into<String>) -> Self {
        Self {
            accept_language: Some(language.into()),
            ..self
        }
    }
}
