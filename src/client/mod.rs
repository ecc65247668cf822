//! HTTP client, transport and page streaming for the Uber API.
//!
//! This module provides the main entry point [`UberClient`] for
//! interacting with the Uber API.
//!
//! # Example
//!
//! ```no_run
//! use uber_rs::UberClient;
//!
//! # async fn example() -> uber_rs::Result<()> {
//! let client = UberClient::from_env()?;
//!
//! // Get the rider's profile
//! let profile = client.me().profile().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
pub mod transport;

pub use config::ClientConfig;
pub use http::{UberClient, SANDBOX_ENV_VAR, TOKEN_ENV_VAR};
pub use paginated::{CancelHandle, Page, PageQuery, PageRequest, Pages, DEFAULT_LIMIT_PER_PAGE};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub(crate) use http::ClientInner;
pub(crate) use paginated::{ListResponse, PagesBuilder};
