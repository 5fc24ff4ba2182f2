/*
[INPUT]:  HTTP configuration (base URL, API key, optional timeouts)
[OUTPUT]: Configured reqwest client and raw request/response transport
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::decode::{EXPECT_OK, decode_response};
use crate::http::{Result, XfighterError};

/// Base URL of the public Stockfighter order-book API
pub const DEFAULT_BASE_URL: &str = "https://api.stockfighter.io/ob/api";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-Starfighter-Authorization";

pub const API_KEY_ENV: &str = "XFIGHTER_API_KEY";
pub const BASE_URL_ENV: &str = "XFIGHTER_BASE_URL";

/// HTTP client configuration
///
/// Timeouts left as `None` fall back to reqwest's own defaults.
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Default base URL with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read `XFIGHTER_API_KEY` and `XFIGHTER_BASE_URL`; unset or blank
    /// values keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();
        if let Some(base_url) = non_blank(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.api_key = non_blank(API_KEY_ENV);
        config
    }
}

/// Status code and body of a response, before any interpretation
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Main HTTP client for the Xfighter API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct XfighterClient {
    http_client: Client,
    base_url: Url,
    api_key: Option<HeaderValue>,
}

impl XfighterClient {
    /// Client against the default base URL without an API key
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder
            .build()
            .map_err(|err| XfighterError::Config(format!("failed to build HTTP client: {err}")))?;

        let api_key = config
            .api_key
            .as_deref()
            .map(|key| {
                let mut value = HeaderValue::from_str(key).map_err(|_| {
                    XfighterError::Config("API key contains invalid header characters".into())
                })?;
                value.set_sensitive(true);
                Ok::<_, XfighterError>(value)
            })
            .transpose()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            api_key,
        })
    }

    /// Create a client whose requests go to `base_url` instead of the configured one
    pub fn with_config_and_base_url(mut config: ClientConfig, base_url: &str) -> Result<Self> {
        config.base_url = base_url.to_string();
        Self::with_config(config)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the full URL for an endpoint relative to the base URL.
    ///
    /// Every entry of `segments` becomes exactly one percent-encoded path
    /// segment, so a `/` inside a venue or symbol is sent as `%2F`.
    pub fn endpoint_url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| XfighterError::Config("base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Request builder for an endpoint with the API key header attached
    pub(crate) fn request_builder(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<RequestBuilder> {
        let url = self.endpoint_url(segments, query)?;
        debug!(%method, %url, "building request");
        let builder = self.http_client.request(method, url);
        Ok(match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key.clone()),
            None => builder,
        })
    }

    /// Bodiless request to a documented endpoint, decoded into `T`
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T> {
        let builder = self.request_builder(method, segments, query)?;
        self.send_json(builder, EXPECT_OK).await
    }

    /// Send a request and collect status and body without interpreting them
    pub(crate) async fn send_raw(&self, builder: RequestBuilder) -> Result<RawResponse> {
        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "received response");
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Send a request and decode the body into `T`
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        expected: &[StatusCode],
    ) -> Result<T> {
        let raw = self.send_raw(builder).await?;
        decode_response(&raw, expected)
    }

    /// Issue a request and return the raw response.
    ///
    /// `body`, when present, is sent as JSON. Only transport failures are
    /// errors here; status and body are left to the caller.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse> {
        let builder = self.request_builder(method, &path_segments(path), query)?;
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        self.send_raw(builder).await
    }
}

/// Split a raw `a/b/c` endpoint path into its segments, ignoring empty ones
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(XfighterError::Config(format!("base URL cannot be a base: {raw}")));
    }
    Ok(url)
}
