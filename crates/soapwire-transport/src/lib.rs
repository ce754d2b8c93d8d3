//! HTTP transports for SOAP clients
//!
//! Fetches WSDL and schema documents and delivers SOAP messages over HTTP,
//! returning every response as a [`CanonicalResponse`] so binding code never
//! depends on the HTTP client that executed the call.

#![deny(unsafe_code)]
#![warn(missing_docs)]
//! # Architecture
//!
//! - **Transport traits**: [`Transport`] (suspend-based) and
//!   [`BlockingTransport`] (thread-blocking) expose `load`, `post`,
//!   `post_xml` and `get`
//! - **HTTP transports**: [`AsyncTransport`] and `SyncTransport` via reqwest
//! - **Response adaptation**: shared [`soapwire_core::adapt`] seam
//! - **Diagnostics**: per-transport [`TransportObserver`] sinks, `tracing` by default
//! - **Document cache**: optional [`DocumentCache`] for `load`
//!
//! # Usage
//!
//! ```ignore
//! use soapwire_transport::{AsyncTransport, Headers, Transport, TransportConfig};
//!
//! let transport = AsyncTransport::new(TransportConfig::default())?;
//! let wsdl = transport.load("http://localhost:8000/?wsdl").await?;
//! let response = transport
//!     .post("http://localhost:8000/", envelope_bytes, &Headers::new())
//!     .await?;
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
mod location;
pub mod observer;
pub mod traits;

// Re-export commonly used types
pub use cache::{DocumentCache, InMemoryCache};
pub use config::{DEFAULT_USER_AGENT, TransportConfig, TransportConfigBuilder};
pub use error::{Result, TransportError};
#[cfg(feature = "blocking")]
pub use http::SyncTransport;
pub use http::AsyncTransport;
pub use observer::{NoopObserver, RequestEvent, ResponseEvent, TracingObserver, TransportObserver};
pub use soapwire_core::{CanonicalResponse, Envelope, EnvelopeError};
pub use traits::{BlockingTransport, Headers, Transport};
