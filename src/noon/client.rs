//! HTTP client for noon.com requests using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::error::ScrapeError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching product pages - enables mocking for tests.
#[async_trait]
pub trait FetchPage: Send + Sync {
    /// Issues a single GET and returns the raw HTML body.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Noon HTTP client with browser impersonation.
///
/// One instance is shared across requests; it holds no per-request state.
pub struct NoonClient {
    client: Client,
}

impl NoonClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FetchPage for NoonClient {
    /// Single attempt, no retry. The emulation profile supplies a realistic
    /// desktop Chrome User-Agent along with the TLS fingerprint.
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Connection", "keep-alive")
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("Fetch failed with status {}", status);
            return Err(ScrapeError::FetchFailed { status });
        }

        Ok(response.text().await?)
    }
}
