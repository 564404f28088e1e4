//! Noon-specific modules for HTTP client, parsing, and data models.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{FetchPage, NoonClient};
pub use models::{ScrapedProduct, Specifications};
pub use parser::Parser;

use crate::error::ScrapeError;
use tracing::info;

/// Marketplace domain token a product URL must contain.
pub const NOON_DOMAIN: &str = "noon.com";

/// Base origin used to absolutize relative brand/seller links.
pub const BASE_ORIGIN: &str = "https://www.noon.com";

/// Validates a candidate product URL.
///
/// A plain substring check: no scheme or host parsing, no normalization.
/// Rejection happens before any network I/O.
pub fn validate_product_url(url: &str) -> Result<(), ScrapeError> {
    if url.contains(NOON_DOMAIN) {
        Ok(())
    } else {
        Err(ScrapeError::InvalidUrl)
    }
}

/// Runs the full scrape pipeline for one product URL: validate, fetch,
/// parse and gate, extract.
///
/// The first stage failure aborts the request; no stage retries. The
/// returned record is always fully populated - partial results are never
/// handed back alongside an error.
pub async fn scrape(client: &impl FetchPage, url: &str) -> Result<ScrapedProduct, ScrapeError> {
    validate_product_url(url)?;

    info!("Scraping product page: {}", url);

    let html = client.fetch(url).await?;
    Parser::new().parse_product_page(&html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Mock page fetcher for pipeline tests.
    struct MockFetcher {
        html: String,
    }

    #[async_trait]
    impl FetchPage for MockFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, ScrapeError> {
            Ok(self.html.clone())
        }
    }

    /// Fetcher that panics if the pipeline reaches the network stage.
    struct UnreachableFetcher;

    #[async_trait]
    impl FetchPage for UnreachableFetcher {
        async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
            panic!("fetch must not be called for {}", url);
        }
    }

    #[test]
    fn test_validate_accepts_noon_urls() {
        assert!(validate_product_url("https://www.noon.com/uae-en/p/N123").is_ok());
        assert!(validate_product_url("noon.com/p/N123").is_ok());
        // Substring check only: the token may appear anywhere in the string
        assert!(validate_product_url("http://host/noon.com/p/N123").is_ok());
    }

    #[test]
    fn test_validate_rejects_foreign_urls() {
        assert!(validate_product_url("https://www.amazon.com/dp/B123").is_err());
        assert!(validate_product_url("https://noon.org/p/1").is_err());
        assert!(validate_product_url("").is_err());
    }

    #[tokio::test]
    async fn test_scrape_foreign_url_performs_no_fetch() {
        let result = scrape(&UnreachableFetcher, "https://example.com/p/1").await;
        assert!(matches!(result, Err(ScrapeError::InvalidUrl)));
    }

    #[tokio::test]
    async fn test_scrape_happy_path() {
        let fetcher = MockFetcher {
            html: r#"<html><head><title>Q30 | noon</title></head><body>
                <span>500+ sold in the last month</span>
                <a data-qa-id="brand-name-pdp" href="/uae-en/soundcore">Soundcore</a>
            </body></html>"#
                .to_string(),
        };

        let product = scrape(&fetcher, "https://www.noon.com/uae-en/p/N123").await.unwrap();
        assert_eq!(product.monthly_sales_volume.as_deref(), Some("500+ sold in the last month"));
        assert_eq!(product.brand_link.as_deref(), Some("https://www.noon.com/uae-en/soundcore"));
        assert!(product.seller_link.is_none());
    }

    #[tokio::test]
    async fn test_scrape_bot_challenge_aborts() {
        let fetcher = MockFetcher {
            html: "<html><head><title>Are you a robot?</title></head><body></body></html>"
                .to_string(),
        };

        let result = scrape(&fetcher, "https://www.noon.com/uae-en/p/N123").await;
        assert!(matches!(result, Err(ScrapeError::BotDetected)));
    }

    #[tokio::test]
    async fn test_scrape_empty_body_is_parse_failed() {
        let fetcher = MockFetcher { html: String::new() };

        let result = scrape(&fetcher, "https://www.noon.com/uae-en/p/N123").await;
        assert!(matches!(result, Err(ScrapeError::ParseFailed)));
    }
}
