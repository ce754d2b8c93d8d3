//! Canonical response shape shared by every HTTP backend.

use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;

/// A fully buffered HTTP response in backend-independent form.
///
/// Every transport hands this type to SOAP binding code, so envelope parsing
/// never needs to know which HTTP client executed the call. The body is always
/// read to completion before a `CanonicalResponse` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalResponse {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers, with repeated headers folded into one comma-separated value
    pub headers: HashMap<String, String>,

    /// Cookies set by the response, keyed by cookie name
    pub cookies: HashMap<String, String>,

    /// Response body
    pub body: Bytes,

    /// Text encoding announced by the server, if any
    pub encoding: Option<String>,
}

impl CanonicalResponse {
    /// Create a response with the given status and body and no headers.
    pub fn new(status_code: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            cookies: HashMap::new(),
            body: body.into(),
            encoding: None,
        }
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Check if response is an error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }

    /// Get a header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get a cookie value by name
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Get the response body as a string
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Get the response body as a string, replacing invalid UTF-8 sequences.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Consume the response and return its body.
    pub fn into_body(self) -> Bytes {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(CanonicalResponse::new(200, "").is_success());
        assert!(CanonicalResponse::new(204, "").is_success());
        assert!(!CanonicalResponse::new(302, "").is_success());
        assert!(!CanonicalResponse::new(302, "").is_error());
        assert!(CanonicalResponse::new(404, "").is_error());
        assert!(CanonicalResponse::new(500, "").is_error());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut response = CanonicalResponse::new(200, "");
        response
            .headers
            .insert("content-type".to_string(), "text/xml".to_string());

        assert_eq!(response.header("Content-Type"), Some("text/xml"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("text/xml"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_text_rejects_invalid_utf8() {
        let response = CanonicalResponse::new(200, vec![0xff, 0xfe, b'a']);
        assert!(response.text().is_err());
        assert!(response.text_lossy().ends_with('a'));
    }

    #[test]
    fn test_serializes_to_json() {
        let mut response = CanonicalResponse::new(500, "<Fault/>");
        response.encoding = Some("utf-8".to_string());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status_code"], 500);
        assert_eq!(json["encoding"], "utf-8");
    }
}
