// ── Source configuration ──

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use amphibia_api::{DEFAULT_BASE_URL, TlsMode, TransportConfig};

/// TLS certificate verification strategy.
#[derive(Debug, Clone, Default)]
pub enum TlsVerification {
    /// Use the operating system's certificate store.
    #[default]
    SystemDefaults,
    /// Trust an additional CA certificate from a PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate. Only for self-signed test servers.
    DangerAcceptInvalid,
}

/// Everything [`HttpSource`](crate::HttpSource) needs to reach the endpoint.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Service base URL; the list endpoint is `{base_url}/amphibians`.
    pub base_url: Url,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            tls: TlsVerification::SystemDefaults,
            timeout: Duration::from_secs(30),
        }
    }
}

impl SourceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig::default()
            .with_tls(tls)
            .with_timeout(self.timeout)
    }
}
