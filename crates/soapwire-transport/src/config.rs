//! Configuration for soapwire transports

use crate::cache::DocumentCache;
use crate::error::{Result, TransportError};
use crate::observer::{TracingObserver, TransportObserver};
use std::sync::Arc;
use std::time::Duration;

/// Default `User-Agent` sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("soapwire/", env!("CARGO_PKG_VERSION"));

/// Endpoint-independent transport settings.
///
/// Shared by the async and blocking transports. Once a transport is built from
/// a config, the config does not change.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Timeout for fetching WSDL and schema documents
    pub load_timeout: Duration,

    /// Timeout for `post` and `get`; `None` means calls never time out
    pub operation_timeout: Option<Duration>,

    /// Verify server TLS certificates
    pub verify_tls: bool,

    /// Proxy URL applied to every scheme
    pub proxy: Option<String>,

    /// `User-Agent` header value
    pub user_agent: String,

    /// Diagnostic sink for request/response events
    pub observer: Arc<dyn TransportObserver>,

    /// Cache for loaded documents
    pub cache: Option<Arc<dyn DocumentCache>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            load_timeout: Duration::from_secs(300),
            operation_timeout: None,
            verify_tls: true,
            proxy: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            observer: Arc::new(TracingObserver),
            cache: None,
        }
    }
}

impl TransportConfig {
    /// Create a builder with default settings.
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored. This will look for:
    /// - `SOAPWIRE_LOAD_TIMEOUT` for the document load timeout (in seconds)
    /// - `SOAPWIRE_OPERATION_TIMEOUT` for the operation timeout (in seconds)
    /// - `SOAPWIRE_VERIFY_TLS` (`true`/`false`/`1`/`0`)
    /// - `SOAPWIRE_PROXY` for the proxy URL
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Config`] when a variable is set but malformed.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        use std::env;

        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Some(timeout) = env_seconds("SOAPWIRE_LOAD_TIMEOUT")? {
            config.load_timeout = timeout;
        }

        if let Some(timeout) = env_seconds("SOAPWIRE_OPERATION_TIMEOUT")? {
            config.operation_timeout = Some(timeout);
        }

        if let Ok(verify) = env::var("SOAPWIRE_VERIFY_TLS") {
            config.verify_tls = match verify.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(TransportError::Config(format!(
                        "SOAPWIRE_VERIFY_TLS must be true or false, got '{}'",
                        other
                    )));
                }
            };
        }

        if let Ok(proxy) = env::var("SOAPWIRE_PROXY")
            && !proxy.trim().is_empty()
        {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Whether TLS or proxy settings differ from the defaults.
    pub(crate) fn has_connection_settings(&self) -> bool {
        !self.verify_tls || self.proxy.is_some()
    }

    pub(crate) fn reqwest_proxy(&self) -> Result<Option<reqwest::Proxy>> {
        self.proxy
            .as_deref()
            .map(|proxy| {
                reqwest::Proxy::all(proxy).map_err(|e| {
                    TransportError::Config(format!("Invalid proxy '{}': {}", proxy, e))
                })
            })
            .transpose()
    }

    /// Build an async client honoring TLS and proxy settings.
    pub(crate) fn async_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().danger_accept_invalid_certs(!self.verify_tls);
        if let Some(proxy) = self.reqwest_proxy()? {
            builder = builder.proxy(proxy);
        }
        builder
            .build()
            .map_err(|e| TransportError::Config(format!("Failed to build HTTP client: {}", e)))
    }

    /// Build a blocking client honoring TLS and proxy settings.
    #[cfg(feature = "blocking")]
    pub(crate) fn blocking_client(&self) -> Result<reqwest::blocking::Client> {
        // reqwest::blocking defaults to a 30s timeout; the async client has none
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .danger_accept_invalid_certs(!self.verify_tls);
        if let Some(proxy) = self.reqwest_proxy()? {
            builder = builder.proxy(proxy);
        }
        builder
            .build()
            .map_err(|e| TransportError::Config(format!("Failed to build HTTP client: {}", e)))
    }
}

#[cfg(feature = "env")]
fn env_seconds(name: &str) -> Result<Option<Duration>> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|e| {
                TransportError::Config(format!("{} must be whole seconds, got '{}': {}", name, value, e))
            }),
        Err(_) => Ok(None),
    }
}

/// Builder for creating TransportConfig with a fluent API.
#[derive(Debug, Default)]
pub struct TransportConfigBuilder {
    config: TransportConfig,
}

impl TransportConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document load timeout.
    pub fn load_timeout(mut self, timeout: Duration) -> Self {
        self.config.load_timeout = timeout;
        self
    }

    /// Set the per-operation timeout.
    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.config.operation_timeout = Some(timeout);
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.config.verify_tls = verify;
        self
    }

    /// Route requests through a proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the diagnostic sink.
    pub fn observer(mut self, observer: Arc<dyn TransportObserver>) -> Self {
        self.config.observer = observer;
        self
    }

    /// Set the document cache.
    pub fn cache(mut self, cache: Arc<dyn DocumentCache>) -> Self {
        self.config.cache = Some(cache);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TransportConfig {
        self.config
    }
}
