//! CSS selectors for noon.com HTML parsing.
//!
//! This file contains all markup-dependent constants used for parsing
//! noon product pages. Update this file when noon changes their HTML
//! structure.
//!
//! **Update process**: When extraction starts returning absent fields,
//! capture an HTML sample, update selectors, and add a test fixture.

use scraper::Selector;
use std::sync::LazyLock;

/// Page title, inspected by the bot-challenge gate.
pub static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Title tokens that identify a bot-challenge interstitial (matched
/// case-insensitively).
pub static BOT_TITLE_TOKENS: &[&str] = &["robot", "captcha", "human"];

/// Candidate elements scanned, in document order, for the sales volume text.
pub static SALES_VOLUME_CANDIDATES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span, div").unwrap());

/// Substring identifying the sales volume element.
pub static SALES_VOLUME_MARKER: &str = "sold in the last month";

/// Brand link on the product page.
pub static BRAND_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[data-qa-id="brand-name-pdp"]"#).unwrap());

/// Seller link on the product page.
pub static SELLER_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[data-qa-id="seller-name-pdp"]"#).unwrap());

/// Container holding the specification key/value cells.
pub static SPECIFICATIONS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"div[data-qa-id="specifications-pdp"]"#).unwrap());
