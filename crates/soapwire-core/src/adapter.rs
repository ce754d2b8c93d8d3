//! Response adaptation.
//!
//! [`BackendResponse`] is the minimal capability set a backend response must
//! expose. [`adapt`] turns anything implementing it into a
//! [`CanonicalResponse`]. Swapping HTTP clients means writing one more
//! `BackendResponse` implementation; SOAP-layer code is untouched.

use crate::response::CanonicalResponse;
use bytes::Bytes;
use std::collections::HashMap;
use std::convert::Infallible;

/// Capabilities a backend-specific response must expose to be adapted.
///
/// Nothing else about the backend is assumed. `read_body` consumes the
/// response so a partially drained body can never escape the adapter.
pub trait BackendResponse: Sized {
    /// Error produced when reading the body fails.
    type Error;

    /// HTTP status code
    fn status(&self) -> u16;

    /// Header name/value pairs in wire order. Names may repeat.
    fn headers(&self) -> Vec<(String, String)>;

    /// Cookie name/value pairs set by the response.
    fn cookies(&self) -> Vec<(String, String)>;

    /// Text encoding of the body.
    ///
    /// Defaults to the `charset` parameter of the `Content-Type` header.
    fn encoding(&self) -> Option<String> {
        self.headers()
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .and_then(|(_, value)| charset_from_content_type(value))
    }

    /// Read the whole body.
    fn read_body(self) -> Result<Bytes, Self::Error>;
}

/// Convert a backend response into a [`CanonicalResponse`].
///
/// Metadata is captured first, then the body is drained in full. Body read
/// failures are returned as the backend's own error type.
pub fn adapt<R: BackendResponse>(raw: R) -> Result<CanonicalResponse, R::Error> {
    let status_code = raw.status();
    let headers = fold_headers(raw.headers());
    let cookies = raw.cookies().into_iter().collect();
    let encoding = raw.encoding();
    let body = raw.read_body()?;

    Ok(CanonicalResponse {
        status_code,
        headers,
        cookies,
        body,
        encoding,
    })
}

/// Repeated headers are joined with `", "`, as HTTP allows for list-valued fields.
fn fold_headers(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut headers: HashMap<String, String> = HashMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        headers
            .entry(name)
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    headers
}

/// Extract the `charset` parameter from a `Content-Type` value.
///
/// ```rust
/// use soapwire_core::charset_from_content_type;
///
/// assert_eq!(
///     charset_from_content_type("text/xml; charset=\"UTF-8\"").as_deref(),
///     Some("UTF-8")
/// );
/// assert_eq!(charset_from_content_type("application/soap+xml"), None);
/// ```
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// A response whose body has already been read into memory.
///
/// Suspend-based transports drain the body at the network boundary and hand
/// the result here, so adaptation itself never waits on I/O.
#[derive(Debug, Clone, Default)]
pub struct BufferedResponse {
    status: u16,
    headers: Vec<(String, String)>,
    cookies: Vec<(String, String)>,
    body: Bytes,
}

impl BufferedResponse {
    /// Create a buffered response with the given status and body.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            ..Default::default()
        }
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Replace all headers.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Append a cookie.
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }

    /// Replace all cookies.
    pub fn with_cookies(mut self, cookies: Vec<(String, String)>) -> Self {
        self.cookies = cookies;
        self
    }

    /// Adapt into a [`CanonicalResponse`]. Cannot fail; the body is already in memory.
    pub fn into_canonical(self) -> CanonicalResponse {
        match adapt(self) {
            Ok(response) => response,
            Err(never) => match never {},
        }
    }
}

impl BackendResponse for BufferedResponse {
    type Error = Infallible;

    fn status(&self) -> u16 {
        self.status
    }

    fn headers(&self) -> Vec<(String, String)> {
        self.headers.clone()
    }

    fn cookies(&self) -> Vec<(String, String)> {
        self.cookies.clone()
    }

    fn read_body(self) -> Result<Bytes, Self::Error> {
        Ok(self.body)
    }
}
