// Amphibians HTTP client
//
// Wraps `reqwest::Client` with endpoint URL construction, status
// checking and JSON decoding. One call issues exactly one request:
// no retries, no caching.

use reqwest::header::ACCEPT;
use tracing::{debug, trace};
use url::Url;

use crate::error::{Error, preview};
use crate::models::AmphibianRecord;
use crate::transport::TransportConfig;

/// Base URL of the public amphibians service.
pub const DEFAULT_BASE_URL: &str = "https://android-kotlin-fun-mars-server.appspot.com/";

/// Path of the list endpoint, relative to the base URL.
pub const AMPHIBIANS_PATH: &str = "amphibians";

/// Raw HTTP client for the amphibians endpoint.
///
/// Returns wire records exactly as the server sent them, in server order.
/// Every failure is classified by [`Error::kind`] as either connectivity
/// or protocol.
#[derive(Debug, Clone)]
pub struct AmphibiansClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AmphibiansClient {
    /// Create a client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the list endpoint.
    ///
    /// The base URL's trailing slash is optional:
    /// `https://host/api` and `https://host/api/` both resolve to
    /// `https://host/api/amphibians`.
    pub fn endpoint_url(&self) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{AMPHIBIANS_PATH}"))?)
    }

    /// Fetch the full amphibian list.
    pub async fn list_amphibians(&self) -> Result<Vec<AmphibianRecord>, Error> {
        let url = self.endpoint_url()?;
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        trace!(%status, "response received");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;

        let records: Vec<AmphibianRecord> = serde_json::from_str(&body).map_err(|e| {
            Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                body: body.clone(),
            }
        })?;

        debug!(count = records.len(), "decoded amphibian records");
        Ok(records)
    }
}
