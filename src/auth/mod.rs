//! Authentication for the Uber API.
//!
//! Requests are authenticated with an OAuth2 bearer token. Obtaining and
//! refreshing that token is left to the caller, or to a custom
//! [`Transport`](crate::Transport) that wraps the default one.
//!
//! ```
//! use uber_rs::{BearerToken, UberClient};
//!
//! # fn example() -> uber_rs::Result<()> {
//! let mut client = UberClient::new()?;
//! client.set_bearer_token(BearerToken::new("your-access-token")?);
//! # Ok(())
//! # }
//! ```

mod token;

pub use token::BearerToken;
