//! Common test utilities and helpers

use soapwire_transport::{RequestEvent, ResponseEvent, TransportObserver};
use std::sync::Mutex;

/// A request seen by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct SeenRequest {
    pub method: String,
    pub address: String,
    pub body: Vec<u8>,
}

/// A response seen by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct SeenResponse {
    pub method: String,
    pub address: String,
    pub status: u16,
    pub body: Vec<u8>,
}

/// Observer that keeps every event for later assertions
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub requests: Mutex<Vec<SeenRequest>>,
    pub responses: Mutex<Vec<SeenResponse>>,
}

impl TransportObserver for RecordingObserver {
    fn on_request(&self, event: &RequestEvent<'_>) {
        self.requests.lock().unwrap().push(SeenRequest {
            method: event.method.to_string(),
            address: event.address.to_string(),
            body: event.body.to_vec(),
        });
    }

    fn on_response(&self, event: &ResponseEvent<'_>) {
        self.responses.lock().unwrap().push(SeenResponse {
            method: event.method.to_string(),
            address: event.address.to_string(),
            status: event.status,
            body: event.body.to_vec(),
        });
    }
}

/// Headers for a SOAP 1.1 call
#[allow(dead_code)]
pub fn soap_headers() -> soapwire_transport::Headers {
    let mut headers = soapwire_transport::Headers::new();
    headers.insert(
        "Content-Type".to_string(),
        "text/xml; charset=utf-8".to_string(),
    );
    headers
}
