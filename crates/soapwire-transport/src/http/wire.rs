//! Request and response plumbing shared by the async and blocking transports

use crate::error::{Result, TransportError};
use crate::traits::Headers;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use soapwire_core::CanonicalResponse;

/// Build the header map for one request.
///
/// The configured user agent goes first so a caller-supplied `User-Agent`
/// replaces it.
pub(crate) fn request_headers(user_agent: &str, headers: &Headers) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len() + 1);
    map.insert(USER_AGENT, header_value("User-Agent", user_agent)?);

    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| TransportError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        map.insert(header_name, header_value(name, value)?);
    }

    Ok(map)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| TransportError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Header pairs in wire order, for [`soapwire_core::BackendResponse::headers`].
pub(crate) fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

/// Turn a loaded document into its body, or a status error carrying that body.
pub(crate) fn check_load_status(url: &str, response: CanonicalResponse) -> Result<Bytes> {
    if response.is_error() {
        return Err(TransportError::Status {
            url: url.to_string(),
            status: response.status_code,
            body: response.into_body(),
        });
    }
    Ok(response.into_body())
}
