//! Diagnostic sinks for request/response tracing
//!
//! Each transport is handed its own [`TransportObserver`] through
//! [`TransportConfig`](crate::TransportConfig) instead of reaching for
//! process-wide logging setup, so two transports in one process can be
//! observed independently.

use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Outgoing request, as seen by an observer
#[derive(Debug, Clone, Copy)]
pub struct RequestEvent<'a> {
    /// HTTP method (GET, POST)
    pub method: &'a str,
    /// Target address
    pub address: &'a str,
    /// Request body; empty for GET
    pub body: &'a [u8],
}

/// Completed response, as seen by an observer
#[derive(Debug, Clone, Copy)]
pub struct ResponseEvent<'a> {
    /// HTTP method of the originating request
    pub method: &'a str,
    /// Address the request was sent to
    pub address: &'a str,
    /// HTTP status code
    pub status: u16,
    /// Fully buffered response body
    pub body: &'a [u8],
    /// Time from sending the request until the body was read
    pub elapsed: Duration,
}

/// Receives diagnostic events from a transport.
///
/// Called synchronously on the calling thread or task. Implementations must
/// be cheap and must not block.
pub trait TransportObserver: Send + Sync + fmt::Debug {
    /// A request is about to be sent.
    fn on_request(&self, event: &RequestEvent<'_>);

    /// A response arrived and its body was read.
    fn on_response(&self, event: &ResponseEvent<'_>);
}

/// Emits `tracing` debug events for every request and response.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TransportObserver for TracingObserver {
    fn on_request(&self, event: &RequestEvent<'_>) {
        debug!(
            method = %event.method,
            address = %event.address,
            body_size = event.body.len(),
            "HTTP {} to {}:\n{}",
            event.method,
            event.address,
            String::from_utf8_lossy(event.body)
        );
    }

    fn on_response(&self, event: &ResponseEvent<'_>) {
        debug!(
            method = %event.method,
            address = %event.address,
            status = event.status,
            elapsed_ms = event.elapsed.as_millis(),
            body_size = event.body.len(),
            "HTTP response from {} (status: {}):\n{}",
            event.address,
            event.status,
            String::from_utf8_lossy(event.body)
        );
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TransportObserver for NoopObserver {
    fn on_request(&self, _event: &RequestEvent<'_>) {}

    fn on_response(&self, _event: &ResponseEvent<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_tracing_observer_logs_at_debug() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let observer = TracingObserver;
            observer.on_request(&RequestEvent {
                method: "POST",
                address: "http://host/svc",
                body: b"<Envelope/>",
            });
            observer.on_response(&ResponseEvent {
                method: "POST",
                address: "http://host/svc",
                status: 500,
                body: b"<Fault/>",
                elapsed: Duration::from_millis(3),
            });
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("DEBUG"));
        assert!(output.contains("<Envelope/>"));
        assert!(output.contains("status: 500"));
        assert!(output.contains("<Fault/>"));
    }

    #[test]
    fn test_tracing_observer_is_silent_above_debug() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(capture.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingObserver.on_request(&RequestEvent {
                method: "GET",
                address: "http://host/wsdl",
                body: &[],
            });
        });

        assert!(capture.0.lock().unwrap().is_empty());
    }
}
