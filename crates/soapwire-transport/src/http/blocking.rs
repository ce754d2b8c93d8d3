//! Thread-blocking HTTP transport

use super::wire::{check_load_status, header_pairs, request_headers};
use crate::config::TransportConfig;
use crate::error::{Result, TransportError};
use crate::location::Location;
use crate::observer::{RequestEvent, ResponseEvent};
use crate::traits::{BlockingTransport, Headers};
use bytes::Bytes;
use reqwest::blocking::{Client as BlockingClient, RequestBuilder, Response};
use soapwire_core::{BackendResponse, CanonicalResponse, adapt};
use std::time::Instant;
use tracing::debug;

/// Blocking transport backed by `reqwest::blocking::Client`.
///
/// Every call runs to completion on the calling thread. Independent calls
/// need separate threads; clones share one connection pool.
///
/// `reqwest::blocking` drives its own runtime internally, so this type must
/// be created, used and dropped outside of an async context.
#[derive(Debug, Clone)]
pub struct SyncTransport {
    client: Option<BlockingClient>,
    config: TransportConfig,
}

impl SyncTransport {
    /// Create a transport that owns a client built from `config`.
    pub fn new(config: TransportConfig) -> Result<Self> {
        let client = config.blocking_client()?;
        Ok(Self {
            client: Some(client),
            config,
        })
    }

    /// Create a transport around a caller-supplied client.
    ///
    /// Rejects configs that set `verify_tls` or `proxy`; see
    /// [`AsyncTransport::with_client`](crate::AsyncTransport::with_client).
    pub fn with_client(client: BlockingClient, config: TransportConfig) -> Result<Self> {
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

    /// Whether [`close`](BlockingTransport::close) has been called
    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    fn client(&self) -> Result<&BlockingClient> {
        self.client.as_ref().ok_or(TransportError::Closed)
    }

    fn load_remote(&self, url: &url::Url) -> Result<Bytes> {
        let client = self.client()?;
        let headers = request_headers(&self.config.user_agent, &Headers::new())?;
        let request = client
            .get(url.clone())
            .headers(headers)
            .timeout(self.config.load_timeout);

        let response = self.execute("GET", url.as_str(), &[], request)?;
        check_load_status(url.as_str(), response)
    }

    fn with_operation_timeout(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.operation_timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    fn execute(
        &self,
        method: &str,
        address: &str,
        body: &[u8],
        request: RequestBuilder,
    ) -> Result<CanonicalResponse> {
        self.config.observer.on_request(&RequestEvent {
            method,
            address,
            body,
        });
        let started = Instant::now();

        let response = adapt(ReqwestBlockingResponse(request.send()?))?;

        self.config.observer.on_response(&ResponseEvent {
            method,
            address,
            status: response.status_code,
            body: &response.body,
            elapsed: started.elapsed(),
        });
        Ok(response)
    }
}

impl BlockingTransport for SyncTransport {
    fn load(&self, url: &str) -> Result<Bytes> {
        match Location::parse(url)? {
            Location::Remote(url) => {
                if let Some(cache) = &self.config.cache
                    && let Some(content) = cache.get(url.as_str())
                {
                    debug!(url = %url, "Loaded document from cache");
                    return Ok(content);
                }

                let content = self.load_remote(&url)?;
                if let Some(cache) = &self.config.cache {
                    cache.add(url.as_str(), content.clone());
                }
                Ok(content)
            }
            Location::Local(path) => {
                debug!(path = %path.display(), "Loading local document");
                Ok(Bytes::from(std::fs::read(&path)?))
            }
        }
    }

    fn post(&self, address: &str, message: &[u8], headers: &Headers) -> Result<CanonicalResponse> {
        let client = self.client()?;
        let headers = request_headers(&self.config.user_agent, headers)?;
        let request = client.post(address).headers(headers).body(message.to_vec());

        self.execute("POST", address, message, self.with_operation_timeout(request))
    }

    fn get(
        &self,
        address: &str,
        params: &[(&str, &str)],
        headers: &Headers,
    ) -> Result<CanonicalResponse> {
        let client = self.client()?;
        let headers = request_headers(&self.config.user_agent, headers)?;
        let request = client.get(address).query(params).headers(headers);

        self.execute("GET", address, &[], self.with_operation_timeout(request))
    }

    fn close(&mut self) -> Result<()> {
        if self.client.take().is_some() {
            debug!("Released HTTP client");
        }
        Ok(())
    }
}

/// Blocking reqwest response seen through the adapter's capability set.
///
/// The body is read lazily by [`adapt`], on the calling thread.
struct ReqwestBlockingResponse(Response);

impl BackendResponse for ReqwestBlockingResponse {
    type Error = reqwest::Error;

    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    fn headers(&self) -> Vec<(String, String)> {
        header_pairs(self.0.headers())
    }

    fn cookies(&self) -> Vec<(String, String)> {
        self.0
            .cookies()
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect()
    }

    fn read_body(self) -> std::result::Result<Bytes, Self::Error> {
        self.0.bytes()
    }
}
