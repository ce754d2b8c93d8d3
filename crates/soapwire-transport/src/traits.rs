//! Transport capability traits
//!
//! SOAP binding code talks to a transport through one of two traits that
//! expose the same operations: [`Transport`] for suspend-based callers and
//! [`BlockingTransport`] for thread-blocking callers. Both return the same
//! [`CanonicalResponse`] produced by [`soapwire_core::adapt`].

use crate::error::{Result, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use soapwire_core::{CanonicalResponse, Envelope};
use std::collections::HashMap;

/// Request headers, name to value
pub type Headers = HashMap<String, String>;

/// Suspend-based transport.
///
/// Calls may be issued concurrently from one task or many; clones of an
/// implementation typically share a connection pool. Suspension happens only
/// while waiting on the network. Dropping an in-flight future cancels the
/// request and returns its connection to the client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a WSDL or schema document.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Status`] when the server answers with a 4xx or
    /// 5xx status. The error carries the complete body.
    async fn load(&self, url: &str) -> Result<Bytes>;

    /// Send a raw SOAP message.
    ///
    /// Non-2xx statuses are not errors here; SOAP faults arrive as 500
    /// responses and are for the binding layer to interpret.
    async fn post(&self, address: &str, message: &[u8], headers: &Headers)
    -> Result<CanonicalResponse>;

    /// Serialize an envelope and send it with [`post`](Transport::post).
    async fn post_xml(
        &self,
        address: &str,
        envelope: &dyn Envelope,
        headers: &Headers,
    ) -> Result<CanonicalResponse> {
        let message = envelope.to_bytes().map_err(TransportError::Envelope)?;
        self.post(address, &message, headers).await
    }

    /// Issue a GET with query parameters.
    async fn get(
        &self,
        address: &str,
        params: &[(&str, &str)],
        headers: &Headers,
    ) -> Result<CanonicalResponse>;

    /// Release the underlying client. Later calls fail with [`TransportError::Closed`].
    async fn close(&mut self) -> Result<()>;
}

/// Thread-blocking transport.
///
/// Each call runs to completion on the calling thread. Must not be used from
/// inside an async runtime worker.
pub trait BlockingTransport: Send + Sync {
    /// Fetch a WSDL or schema document. See [`Transport::load`].
    fn load(&self, url: &str) -> Result<Bytes>;

    /// Send a raw SOAP message. See [`Transport::post`].
    fn post(&self, address: &str, message: &[u8], headers: &Headers) -> Result<CanonicalResponse>;

    /// Serialize an envelope and send it with [`post`](BlockingTransport::post).
    fn post_xml(
        &self,
        address: &str,
        envelope: &dyn Envelope,
        headers: &Headers,
    ) -> Result<CanonicalResponse> {
        let message = envelope.to_bytes().map_err(TransportError::Envelope)?;
        self.post(address, &message, headers)
    }

    /// Issue a GET with query parameters. See [`Transport::get`].
    fn get(
        &self,
        address: &str,
        params: &[(&str, &str)],
        headers: &Headers,
    ) -> Result<CanonicalResponse>;

    /// Release the underlying client. Later calls fail with [`TransportError::Closed`].
    fn close(&mut self) -> Result<()>;
}
