//! noon-scraper - Stateless noon.com product page scrape service
//!
//! Fetches a single product page with TLS fingerprint emulation, gates on
//! bot-challenge interstitials, and extracts structured fields from the
//! HTML. Exposed as an HTTP endpoint and a one-shot CLI.

pub mod config;
pub mod error;
pub mod noon;
pub mod server;

pub use config::Config;
pub use error::ScrapeError;
pub use noon::{NoonClient, ScrapedProduct};
