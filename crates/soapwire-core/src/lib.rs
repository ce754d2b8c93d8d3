#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core abstractions for the soapwire transports.
//!
//! This crate holds everything that does not depend on a particular HTTP
//! client:
//!
//! - **Canonical response** via [`CanonicalResponse`], the single response
//!   shape handed to SOAP binding code regardless of which backend ran the call
//! - **Response adaptation** via the [`BackendResponse`] capability trait and
//!   the [`adapt`] conversion
//! - **Envelope serialization seam** via the [`Envelope`] trait
//!
//! # Examples
//!
//! ```rust
//! use soapwire_core::prelude::*;
//!
//! let raw = BufferedResponse::new(500, "<Fault/>")
//!     .with_header("content-type", "text/xml; charset=utf-8");
//!
//! let response = raw.into_canonical();
//! assert_eq!(response.status_code, 500);
//! assert_eq!(response.encoding.as_deref(), Some("utf-8"));
//! assert_eq!(&response.body[..], b"<Fault/>");
//! ```

pub mod adapter;
pub mod envelope;
pub mod response;

pub use adapter::{BackendResponse, BufferedResponse, adapt, charset_from_content_type};
pub use envelope::{Envelope, EnvelopeError};
pub use response::CanonicalResponse;

/// Convenient re-exports of commonly used items.
///
/// ```rust
/// use soapwire_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::{BackendResponse, BufferedResponse, adapt};
    pub use crate::envelope::{Envelope, EnvelopeError};
    pub use crate::response::CanonicalResponse;
}
