//! Bearer token handling.

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// An OAuth2 bearer token sent with every request.
///
/// The token is kept in a [`SecretString`] and never shows up in `Debug`
/// output.
///
/// # Example
///
/// ```
/// use uber_rs::BearerToken;
///
/// let token = BearerToken::new("my-token").unwrap();
/// assert!(!format!("{:?}", token).contains("my-token"));
/// ```
#[derive(Clone)]
pub struct BearerToken(SecretString);

impl BearerToken {
    /// Wrap a raw token. Blank tokens are rejected.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::InvalidInput(
                "bearer token must not be blank".to_string(),
            ));
        }
        Ok(Self(SecretString::from(token)))
    }

    /// The value of the `Authorization` header for this token.
    pub(crate) fn header_value(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BearerToken").field(&"[REDACTED]").finish()
    }
}
