//! Fetch capability for remote GeoJSON sources.
//!
//! The parser never touches the network. Callers hand in any [`Fetch`]
//! implementation; [`HttpFetcher`] is the reqwest-backed one used by the
//! lookup binary. No retries happen here.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = "zonefence/0.1 (geojson zone lookup)";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("{0}")]
    Other(String),
}

/// Bytes-in, bytes-or-error-out retrieval of a document
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Plain HTTP(S) GET via reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(url)?;
        debug!("Fetching {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
