//! HTML parser for noon product pages.

use crate::error::ScrapeError;
use crate::noon::models::{ScrapedProduct, Specifications};
use crate::noon::selectors;
use crate::noon::BASE_ORIGIN;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Parser for noon product pages.
pub struct Parser;

impl Parser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a product page into a structured record.
    ///
    /// Fails on unparseable input or a bot-challenge page. Individual field
    /// misses never fail the parse; they degrade to absent values.
    pub fn parse_product_page(&self, html: &str) -> Result<ScrapedProduct, ScrapeError> {
        // The HTML5 parser is lenient and always yields a tree, so the
        // no-tree case reduces to empty input.
        if html.trim().is_empty() {
            return Err(ScrapeError::ParseFailed);
        }

        let document = Html::parse_document(html);

        self.check_bot_challenge(&document)?;

        Ok(self.extract(&document))
    }

    /// Tests the page title against the bot-challenge tokens.
    ///
    /// Gating on the title keeps challenge-page markup out of the field
    /// rules. A challenge served under a neutral title passes the gate and
    /// extracts to an all-absent record.
    fn check_bot_challenge(&self, document: &Html) -> Result<(), ScrapeError> {
        if let Some(title) = document.select(&selectors::TITLE).next() {
            let title = title.text().collect::<String>().to_lowercase();
            if selectors::BOT_TITLE_TOKENS.iter().any(|token| title.contains(token)) {
                debug!("Bot-challenge title detected: {}", title.trim());
                return Err(ScrapeError::BotDetected);
            }
        }
        Ok(())
    }

    /// Applies all field rules in order. Never fails.
    fn extract(&self, document: &Html) -> ScrapedProduct {
        let monthly_sales_volume = self.extract_sales_volume(document);
        let brand_link = self.extract_link(document, &selectors::BRAND_LINK);
        let seller_link = self.extract_link(document, &selectors::SELLER_LINK);
        let specifications = self.extract_specifications(document);

        debug!(
            "Extracted record (sales: {}, brand: {}, seller: {}, specs: {})",
            monthly_sales_volume.is_some(),
            brand_link.is_some(),
            seller_link.is_some(),
            specifications.len()
        );

        ScrapedProduct { monthly_sales_volume, brand_link, seller_link, specifications }
    }

    /// First span/div in document order whose text mentions the sales
    /// marker. For nested markup this is the outermost wrapper containing
    /// the text.
    fn extract_sales_volume(&self, document: &Html) -> Option<String> {
        document
            .select(&selectors::SALES_VOLUME_CANDIDATES)
            .find(|el| el.text().collect::<String>().contains(selectors::SALES_VOLUME_MARKER))
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    /// Absolutizes the href of the first element matching `selector`.
    fn extract_link(&self, document: &Html, selector: &Selector) -> Option<String> {
        document
            .select(selector)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(|href| format!("{}{}", BASE_ORIGIN, href))
    }

    /// Collects the specification container's direct child elements and
    /// pairs them. A missing container yields an empty mapping, not an
    /// error.
    fn extract_specifications(&self, document: &Html) -> Specifications {
        let Some(container) = document.select(&selectors::SPECIFICATIONS).next() else {
            trace!("No specification container on page");
            return Specifications::new();
        };

        let cells: Vec<String> = container
            .children()
            .filter_map(ElementRef::wrap)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect();

        pair_adjacent(&cells)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Pairs adjacent cells as key/value: even index = key, following odd
/// index = value. Pairs with an empty side are skipped; an odd trailing
/// cell is dropped.
///
/// Assumes specification rows render as sibling key/value element pairs
/// with no wrapping row element. Interleaved extra elements shift the
/// pairing silently rather than failing.
fn pair_adjacent(cells: &[String]) -> Specifications {
    let mut specs = Specifications::new();
    for pair in cells.chunks_exact(2) {
        let (key, value) = (&pair[0], &pair[1]);
        if !key.is_empty() && !value.is_empty() {
            specs.insert(key, value);
        }
    }
    specs
}
