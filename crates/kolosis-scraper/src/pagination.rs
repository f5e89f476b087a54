//! Page-count arithmetic for the search listings.
//!
//! The portal never marks a last page. It prints the total hit count once,
//! on the unpaged search URL, and serves a fixed number of rows per page;
//! the scraper stops once `pages fetched × page size` covers that total.
//!
//! The total is read once per session and never refreshed. If the catalog
//! changes mid-run the page count is not recomputed.

use reqwest::Url;
use scraper::Html;

use crate::client::PortalClient;
use crate::detail::DetailStrategy;
use crate::error::ScraperError;
use crate::html::{select_text, selector};
use crate::normalize::to_half_width;

/// Rows the portal serves per listing page.
pub const PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    total_count: u32,
}

impl PaginationState {
    /// Starts before the first page (cursor 0).
    #[must_use]
    pub fn new(total_count: u32) -> Self {
        Self {
            current_page: 0,
            total_count,
        }
    }

    /// Last page fetched, or 0 before any fetch.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    /// `true` while the pages fetched so far do not cover the total.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.current_page) * u64::from(PAGE_SIZE) < u64::from(self.total_count)
    }

    /// Moves the cursor to the next page and returns the new state.
    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            current_page: self.current_page + 1,
            ..self
        }
    }

    /// Number of listing fetches a full run makes for this total.
    ///
    /// At least one page is always fetched, even for an empty catalog.
    #[must_use]
    pub fn expected_pages(&self) -> u32 {
        self.total_count.div_ceil(PAGE_SIZE).max(1)
    }
}

/// Fetches the unpaged listing once and reads its total hit count from the
/// summary element of the active layout.
///
/// # Errors
///
/// Returns a [`ScraperError`] if the listing cannot be fetched. A page
/// without a readable count is not an error; see [`parse_total_count`].
pub async fn discover_total(
    client: &PortalClient,
    strategy: &DetailStrategy,
) -> Result<u32, ScraperError> {
    let url = client.resolve(&strategy.listing_path())?;
    let page = client.get_page(&url, strategy.listing_encoding()).await?;
    let total = parse_total_count(&page.document(), strategy.summary_selector());
    tracing::info!(
        selector = %strategy.selector(),
        total,
        pages = PaginationState::new(total).expected_pages(),
        "discovered listing size"
    );
    Ok(total)
}

/// URL of listing page `page` (1-based).
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the listing path does not resolve.
pub fn page_url(
    client: &PortalClient,
    strategy: &DetailStrategy,
    page: u32,
) -> Result<Url, ScraperError> {
    let mut url = client.resolve(&strategy.listing_path())?;
    url.query_pairs_mut().append_pair("page", &page.to_string());
    Ok(url)
}

/// Reads the total hit count from a listing page's summary element.
///
/// Takes the leading digits of the element's text; a missing element or
/// non-numeric text reads as 0, which still yields one (empty) page fetch.
#[must_use]
pub fn parse_total_count(document: &Html, summary_selector: &str) -> u32 {
    let sel = selector(summary_selector);
    let text = to_half_width(&select_text(document.select(&sel)));
    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();

    if digits.is_empty() {
        tracing::warn!(
            summary_selector,
            text = %text,
            "listing summary has no leading count; treating total as 0"
        );
        return 0;
    }

    digits.parse().unwrap_or_else(|e| {
        tracing::warn!(summary_selector, digits = %digits, error = %e, "listing count out of range; treating total as 0");
        0
    })
}
