// ── Data sources ──
//
// The seam between the loader and the network. The loader only ever
// sees `Result<Vec<Amphibian>, CoreError>`.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use amphibia_api::AmphibiansClient;

use crate::config::SourceConfig;
use crate::error::CoreError;
use crate::model::Amphibian;

/// Something that can produce the full amphibian list.
///
/// Implementations issue one request per call and should return
/// [`CoreError::Cancelled`] promptly once `cancel` fires.
pub trait Source: Send + Sync + 'static {
    fn fetch_all(
        &self,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<Vec<Amphibian>, CoreError>> + Send;
}

/// [`Source`] backed by the HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: AmphibiansClient,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, CoreError> {
        let client = AmphibiansClient::new(config.base_url.clone(), &config.transport())?;
        Ok(Self { client })
    }

    pub fn from_client(client: AmphibiansClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AmphibiansClient {
        &self.client
    }
}

impl Source for HttpSource {
    async fn fetch_all(&self, cancel: &CancellationToken) -> Result<Vec<Amphibian>, CoreError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("fetch cancelled before completion");
                Err(CoreError::Cancelled)
            }
            result = self.client.list_amphibians() => {
                let records = result?;
                Ok(records.into_iter().map(Amphibian::from).collect())
            }
        }
    }
}
