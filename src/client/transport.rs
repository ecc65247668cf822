//! The transport seam between the client and the network.
//!
//! Every request the client makes goes through a [`Transport`]. The default
//! [`ReqwestTransport`] sends it with `reqwest`; tests and callers that need
//! to add behaviour (token refresh, recording, canned fixtures) substitute
//! their own implementation with
//! [`UberClient::set_transport`](crate::UberClient::set_transport).

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

use super::config::ClientConfig;
use crate::Result;

/// An outgoing HTTP request, fully built.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: Url,
    /// Request headers, authorization included
    pub headers: HeaderMap,
    /// JSON body, if any
    pub body: Option<Vec<u8>>,
}

/// A response as returned by a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A response with the given status and body and no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One request/response exchange.
///
/// Implementations must not interpret the status code; non-2xx responses are
/// returned as `Ok` and mapped to errors by the client. Failing to complete
/// the exchange at all is an `Err`, conventionally
/// [`Error::Transport`](crate::Error::Transport) or
/// [`Error::Http`](crate::Error::Http).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// The default transport, backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport using the timeout and user agent of `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
