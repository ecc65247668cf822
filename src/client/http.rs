//! HTTP client implementation for the Uber API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::api::{
    DeliveriesService, DriversService, EstimatesService, MeService, PlacesService,
    ProductsService, RidesService,
};
use crate::auth::BearerToken;
use crate::{Environment, Error, Result};

use super::config::ClientConfig;
use super::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// Environment variable holding the bearer token read by [`UberClient::from_env`].
pub const TOKEN_ENV_VAR: &str = "UBER_TOKEN_KEY";

/// Environment variable that switches [`UberClient::from_env`] to the sandbox.
pub const SANDBOX_ENV_VAR: &str = "UBER_SANDBOX";

/// The main client for interacting with the Uber API.
///
/// This client provides access to all API services through method calls
/// that return service structs. Each service works on a snapshot of the
/// client's token, environment and transport taken when the service was
/// handed out, so changing the client never affects calls already in
/// flight or page streams already running.
///
/// # Example
///
/// ```no_run
/// use uber_rs::{BearerToken, UberClient};
///
/// # async fn example() -> uber_rs::Result<()> {
/// let mut client = UberClient::new()?;
/// client.set_bearer_token(BearerToken::new("your-access-token")?);
/// client.set_sandbox_mode(true);
///
/// // Use the rides service
/// let trip = client.rides().current().await?;
/// println!("{} is {:?}", trip.request_id, trip.status);
///
/// // Use the me service
/// let profile = client.me().profile().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct UberClient {
    transport: Arc<dyn Transport>,
    token: Option<BearerToken>,
    environment: Environment,
    config: Arc<ClientConfig>,
}

/// Immutable request context shared by the services.
pub(crate) struct ClientInner {
    transport: Arc<dyn Transport>,
    token: Option<BearerToken>,
    environment: Environment,
    config: Arc<ClientConfig>,
}

impl UberClient {
    /// Create a client with the default configuration and no token.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client authenticated with `token`.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        let mut client = Self::new()?;
        client.set_bearer_token(BearerToken::new(token)?);
        Ok(client)
    }

    /// Create a client with custom configuration and the default transport.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Create a client that sends every request through `transport`.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            transport,
            token: None,
            environment: Environment::default(),
            config: Arc::new(config),
        }
    }

    /// Create a client from the `UBER_TOKEN_KEY` and `UBER_SANDBOX`
    /// environment variables.
    ///
    /// `UBER_TOKEN_KEY` is required. `UBER_SANDBOX` selects the sandbox when
    /// set to `1`, `true`, `yes` or `on`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR)
            .map_err(|_| Error::Config(format!("{} is not set", TOKEN_ENV_VAR)))?;
        let sandboxed = std::env::var(SANDBOX_ENV_VAR)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        let mut client = Self::with_token(token)?;
        client.set_sandbox_mode(sandboxed);
        Ok(client)
    }

    /// Authenticate subsequent calls with `token`.
    pub fn set_bearer_token(&mut self, token: BearerToken) {
        self.token = Some(token);
    }

    /// Drop the token. Subsequent calls fail with a missing-token error.
    pub fn clear_bearer_token(&mut self) {
        self.token = None;
    }

    /// Send subsequent calls to the sandbox (`true`) or production host.
    pub fn set_sandbox_mode(&mut self, sandboxed: bool) {
        self.environment = Environment::from_sandbox(sandboxed);
    }

    /// Replace the transport used by subsequent calls.
    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = transport;
    }

    /// Get the current environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns `true` if calls go to the sandbox.
    pub fn is_sandboxed(&self) -> bool {
        self.environment.is_sandbox()
    }

    /// Returns `true` if a bearer token is set.
    pub fn has_bearer_token(&self) -> bool {
        self.token.is_some()
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn context(&self) -> Arc<ClientInner> {
        Arc::new(ClientInner {
            transport: self.transport.clone(),
            token: self.token.clone(),
            environment: self.environment,
            config: self.config.clone(),
        })
    }

    /// Get the rides service.
    pub fn rides(&self) -> RidesService {
        RidesService::new(self.context())
    }

    /// Get the price, time and upfront fare estimates service.
    pub fn estimates(&self) -> EstimatesService {
        EstimatesService::new(self.context())
    }

    /// Get the deliveries service.
    pub fn deliveries(&self) -> DeliveriesService {
        DeliveriesService::new(self.context())
    }

    /// Get the driver (partner) service.
    pub fn drivers(&self) -> DriversService {
        DriversService::new(self.context())
    }

    /// Get the saved places service.
    pub fn places(&self) -> PlacesService {
        PlacesService::new(self.context())
    }

    /// Get the rider account service.
    pub fn me(&self) -> MeService {
        MeService::new(self.context())
    }

    /// Get the products service.
    pub fn products(&self) -> ProductsService {
        ProductsService::new(self.context())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl ClientInner {
    /// The bearer token, or a missing-token error before anything is sent.
    pub(crate) fn require_token(&self) -> Result<&BearerToken> {
        self.token.as_ref().ok_or_else(Error::missing_token)
    }

    /// Resolve `path` against the environment's host.
    fn url_for(&self, path: &str) -> Result<Url> {
        let base = Url::parse(self.environment.api_base_url())?;
        Ok(base.join(path)?)
    }

    /// Build request headers with authentication.
    fn build_headers(&self) -> Result<HeaderMap> {
        let token = self.require_token()?;
        let mut headers = HeaderMap::new();

        let mut authorization = HeaderValue::from_str(&token.header_value())
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(ref language) = self.config.accept_language {
            headers.insert(
                ACCEPT_LANGUAGE,
                HeaderValue::from_str(language)
                    .map_err(|_| Error::Config("Invalid Accept-Language".to_string()))?,
            );
        }

        Ok(headers)
    }

    fn build_request<Q: Serialize, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<HttpRequest> {
        let headers = self.build_headers()?;

        let mut url = self.url_for(path)?;
        if let Some(query) = query {
            let encoded = serde_urlencoded::to_string(query)
                .map_err(|e| Error::InvalidInput(format!("Invalid query: {}", e)))?;
            if !encoded.is_empty() {
                url.set_query(Some(&encoded));
            }
        }

        let body = body.map(serde_json::to_vec).transpose()?;

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.build_request::<(), ()>(Method::GET, path, None, None)?;
        self.send(request).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let request = self.build_request::<Q, ()>(Method::GET, path, Some(query), None)?;
        self.send(request).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.build_request::<(), B>(Method::POST, path, None, Some(body))?;
        self.send(request).await
    }

    /// Make a POST request without a body, ignoring any response body.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        let request = self.build_request::<(), ()>(Method::POST, path, None, None)?;
        self.dispatch(request).await.map(|_| ())
    }

    /// Make a PUT request.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.build_request::<(), B>(Method::PUT, path, None, Some(body))?;
        self.send(request).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.build_request::<(), B>(Method::PATCH, path, None, Some(body))?;
        self.send(request).await
    }

    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        let response = self.dispatch(request).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Hand the request to the transport and check the status.
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method.clone();
        let url = request.url.clone();
        tracing::debug!(%method, %url, "sending request");

        let response = self.transport.send(request).await?;
        tracing::debug!(%method, %url, status = response.status, "received response");

        if response.is_success() {
            Ok(response)
        } else {
            Err(Error::from_status(response.status, error_body(&response.body)))
        }
    }
}

/// Error bodies are JSON when the API produced them, plain text otherwise.
fn error_body(body: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::String(text)) => text_body(&text),
        Ok(value) => value,
        Err(_) => text_body(&String::from_utf8_lossy(body)),
    }
}

fn text_body(text: &str) -> Value {
    let text = text.trim();
    if text.is_empty() {
        Value::Null
    } else {
        serde_json::json!({ "message": text })
    }
}

impl std::fmt::Debug for UberClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UberClient")
            .field("environment", &self.environment)
            .field("token", &self.token)
            .field("config", &self.config)
            .finish()
    }
}
