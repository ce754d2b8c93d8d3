//! Suspend-based HTTP transport
//!
//! Implements [`Transport`] on top of the async reqwest client. Every method
//! awaits only at the network boundary: sending the request and draining the
//! body. Adaptation into a [`CanonicalResponse`] happens afterwards, on
//! in-memory data.

use super::wire::{check_load_status, header_pairs, request_headers};
use crate::config::TransportConfig;
use crate::error::{Result, TransportError};
use crate::location::Location;
use crate::observer::{RequestEvent, ResponseEvent};
use crate::traits::{Headers, Transport};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client as ReqwestClient;
use soapwire_core::{BufferedResponse, CanonicalResponse};
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// Async transport backed by `reqwest::Client`.
///
/// Cloning is cheap and clones share one connection pool. Thread and task
/// safety of that pool is reqwest's responsibility; this type adds no locks.
///
/// # Examples
///
/// ```rust,no_run
/// use soapwire_transport::{AsyncTransport, Headers, Transport, TransportConfig};
///
/// # async fn example() -> soapwire_transport::Result<()> {
/// let transport = AsyncTransport::new(TransportConfig::default())?;
/// let wsdl = transport.load("http://localhost:8000/?wsdl").await?;
///
/// let mut headers = Headers::new();
/// headers.insert("Content-Type".to_string(), "text/xml; charset=utf-8".to_string());
/// let response = transport
///     .post("http://localhost:8000/", b"<Envelope/>", &headers)
///     .await?;
/// println!("{} bytes of WSDL, status {}", wsdl.len(), response.status_code);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AsyncTransport {
    client: Option<ReqwestClient>,
    config: TransportConfig,
}

impl AsyncTransport {
    /// Create a transport that owns a client built from `config`.
    ///
    /// TLS verification and proxy settings are applied to the new client.
    pub fn new(config: TransportConfig) -> Result<Self> {
        let client = config.async_client()?;
        Ok(Self {
            client: Some(client),
            config,
        })
    }

    /// Create a transport around a caller-supplied client.
    ///
    /// reqwest fixes TLS and proxy behaviour when a client is built, so a
    /// config that asks for either is rejected rather than silently ignored.
    pub fn with_client(client: ReqwestClient, config: TransportConfig) -> Result<Self> {
        if config.has_connection_settings() {
            return Err(TransportError::Config(
                "verify_tls and proxy cannot be applied to a caller-supplied client; \
                 configure them on the client instead"
                    .to_string(),
            ));
        }
        Ok(Self {
            client: Some(client),
            config,
        })
    }

    /// Get the transport configuration
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Whether [`close`](Transport::close) has been called
    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    fn client(&self) -> Result<&ReqwestClient> {
        self.client.as_ref().ok_or(TransportError::Closed)
    }

    async fn load_remote(&self, url: &Url) -> Result<Bytes> {
        let client = self.client()?;
        let headers = request_headers(&self.config.user_agent, &Headers::new())?;

        self.config.observer.on_request(&RequestEvent {
            method: "GET",
            address: url.as_str(),
            body: &[],
        });
        let started = Instant::now();

        let response = client
            .get(url.clone())
            .headers(headers)
            .timeout(self.config.load_timeout)
            .send()
            .await?;
        // Drain before checking the status so error bodies reach the caller
        let response = drain(response).await?;

        self.observe_response("GET", url.as_str(), &response, started.elapsed());
        check_load_status(url.as_str(), response)
    }

    fn observe_response(
        &self,
        method: &str,
        address: &str,
        response: &CanonicalResponse,
        elapsed: Duration,
    ) {
        self.config.observer.on_response(&ResponseEvent {
            method,
            address,
            status: response.status_code,
            body: &response.body,
            elapsed,
        });
    }

    async fn execute(
        &self,
        method: &'static str,
        address: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<CanonicalResponse> {
        let request = match self.config.operation_timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };
        let started = Instant::now();

        let response = drain(request.send().await?).await?;

        self.observe_response(method, address, &response, started.elapsed());
        Ok(response)
    }
}

#[async_trait]
impl Transport for AsyncTransport {
    async fn load(&self, url: &str) -> Result<Bytes> {
        match Location::parse(url)? {
            Location::Remote(url) => {
                if let Some(cache) = &self.config.cache
                    && let Some(content) = cache.get(url.as_str())
                {
                    debug!(url = %url, "Loaded document from cache");
                    return Ok(content);
                }

                let content = self.load_remote(&url).await?;
                if let Some(cache) = &self.config.cache {
                    cache.add(url.as_str(), content.clone());
                }
                Ok(content)
            }
            Location::Local(path) => {
                debug!(path = %path.display(), "Loading local document");
                Ok(Bytes::from(tokio::fs::read(&path).await?))
            }
        }
    }

    async fn post(
        &self,
        address: &str,
        message: &[u8],
        headers: &Headers,
    ) -> Result<CanonicalResponse> {
        let client = self.client()?;
        let headers = request_headers(&self.config.user_agent, headers)?;

        self.config.observer.on_request(&RequestEvent {
            method: "POST",
            address,
            body: message,
        });

        let request = client.post(address).headers(headers).body(message.to_vec());
        self.execute("POST", address, request).await
    }

    async fn get(
        &self,
        address: &str,
        params: &[(&str, &str)],
        headers: &Headers,
    ) -> Result<CanonicalResponse> {
        let client = self.client()?;
        let headers = request_headers(&self.config.user_agent, headers)?;

        self.config.observer.on_request(&RequestEvent {
            method: "GET",
            address,
            body: &[],
        });

        let request = client.get(address).query(params).headers(headers);
        self.execute("GET", address, request).await
    }

    async fn close(&mut self) -> Result<()> {
        if self.client.take().is_some() {
            debug!("Released HTTP client");
        }
        Ok(())
    }
}

/// Read the whole body, then adapt.
///
/// The body read is the last suspension point of a call.
async fn drain(response: reqwest::Response) -> Result<CanonicalResponse> {
    let status = response.status().as_u16();
    let headers = header_pairs(response.headers());
    let cookies = response
        .cookies()
        .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
        .collect();

    let body = response.bytes().await?;

    Ok(BufferedResponse::new(status, body)
        .with_headers(headers)
        .with_cookies(cookies)
        .into_canonical())
}
