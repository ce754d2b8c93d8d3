//! Example: blocking versus suspend-based calls
//!
//! Sends the same two SOAP requests twice: once through `SyncTransport`,
//! where they run back to back, and once through `AsyncTransport`, where they
//! are in flight at the same time. Against a service that takes a second per
//! call, the first run takes about two seconds and the second about one.
//!
//! ```text
//! RUST_LOG=soapwire_transport=debug cargo run --example sync_vs_async -- http://localhost:8000/
//! ```

use soapwire_transport::{
    AsyncTransport, BlockingTransport, Headers, SyncTransport, Transport, TransportConfig,
};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn slow_request(id: &str) -> String {
    format!(
        concat!(
            r#"<soap-env:Envelope xmlns:soap-env="http://schemas.xmlsoap.org/soap/envelope/">"#,
            r#"<soap-env:Body><slow_request xmlns="http://example.com/slow-service">"#,
            "<request_id>{}</request_id>",
            "</slow_request></soap-env:Body></soap-env:Envelope>"
        ),
        id
    )
}

fn soap_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "text/xml; charset=utf-8".to_string());
    headers.insert("SOAPAction".to_string(), "\"slow_request\"".to_string());
    headers
}

fn run_sync(endpoint: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("sync example");
    println!("============");

    let transport = SyncTransport::new(TransportConfig::default())?;
    let wsdl = transport.load(&format!("{endpoint}?wsdl"))?;
    println!("loaded {} bytes of WSDL", wsdl.len());

    let started = Instant::now();
    let results = ["request-1", "request-2"]
        .iter()
        .map(|id| transport.post(endpoint, slow_request(id).as_bytes(), &soap_headers()))
        .collect::<Result<Vec<_>, _>>()?;

    println!("time: {:.2}", started.elapsed().as_secs_f64());
    for response in &results {
        println!("result: {} {}", response.status_code, response.text_lossy());
    }
    println!();
    Ok(())
}

async fn run_async(endpoint: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("async example");
    println!("=============");

    let mut transport = AsyncTransport::new(TransportConfig::default())?;
    let wsdl = transport.load(&format!("{endpoint}?wsdl")).await?;
    println!("loaded {} bytes of WSDL", wsdl.len());

    let headers = soap_headers();
    let first = slow_request("request-1");
    let second = slow_request("request-2");

    let started = Instant::now();
    let (first, second) = tokio::join!(
        transport.post(endpoint, first.as_bytes(), &headers),
        transport.post(endpoint, second.as_bytes(), &headers),
    );
    println!("time: {:.2}", started.elapsed().as_secs_f64());

    for response in [first?, second?] {
        println!("result: {} {}", response.status_code, response.text_lossy());
    }

    transport.close().await?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let endpoint = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8000/".to_string());

    // The blocking client must live outside the async runtime
    run_sync(&endpoint)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_async(&endpoint))
}
