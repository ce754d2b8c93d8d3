//! HTTP transport implementations
//!
//! Both transports run on reqwest and normalise responses through
//! [`soapwire_core::adapt`]. Connection pooling and thread safety are
//! reqwest's; no extra locking is layered on top.

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
mod wire;

#[cfg(feature = "blocking")]
pub use blocking::SyncTransport;
pub use client::AsyncTransport;
