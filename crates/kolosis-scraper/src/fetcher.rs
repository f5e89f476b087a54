//! End-to-end catalog fetch: login, size discovery, then the page loop.
//!
//! The run moves through `Unauthenticated → Authenticated → Paginating →
//! Done`. Only login and listing fetches can fail the run; detail failures
//! degrade the affected row and nothing else.

use futures::stream::{self, StreamExt};

use kolosis_core::{Credentials, FacultySelector, Record};

use crate::assemble::assemble;
use crate::auth::authenticate;
use crate::client::PortalClient;
use crate::detail::{DetailStrategy, Extracted};
use crate::error::ScraperError;
use crate::listing::{self, ListingRow};
use crate::pagination::{self, PaginationState};

/// Counters for one completed fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Total hit count the portal reported.
    pub total_count: u32,
    pub pages_fetched: u32,
    pub rows_emitted: usize,
    /// Listing rows dropped because they could not be parsed.
    pub rows_skipped: usize,
    /// Rows emitted without (some of) their detail-page fields.
    pub degraded_details: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchState {
    Unauthenticated,
    Authenticated,
    Paginating(PaginationState),
    Done,
}

/// Fetches every record of one catalog section.
pub struct CatalogFetcher {
    client: PortalClient,
    strategy: DetailStrategy,
    detail_concurrency: usize,
}

impl CatalogFetcher {
    /// Creates a fetcher that fetches detail pages one at a time.
    #[must_use]
    pub fn new(client: PortalClient, selector: FacultySelector) -> Self {
        Self {
            client,
            strategy: DetailStrategy::for_selector(selector),
            detail_concurrency: 1,
        }
    }

    /// Allows up to `n` detail fetches in flight per listing page.
    /// Output order is unaffected. Values below 1 are treated as 1.
    #[must_use]
    pub fn with_detail_concurrency(mut self, n: usize) -> Self {
        self.detail_concurrency = n.max(1);
        self
    }

    #[must_use]
    pub fn strategy(&self) -> &DetailStrategy {
        &self.strategy
    }

    /// Runs a full fetch and returns the records in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Authentication`] if login fails, or any
    /// [`ScraperError`] raised by a listing fetch.
    pub async fn fetch(&self, credentials: &Credentials) -> Result<Vec<Record>, ScraperError> {
        self.fetch_with_summary(credentials)
            .await
            .map(|(records, _)| records)
    }

    /// Like [`CatalogFetcher::fetch`], also returning the run's counters.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogFetcher::fetch`].
    pub async fn fetch_with_summary(
        &self,
        credentials: &Credentials,
    ) -> Result<(Vec<Record>, FetchSummary), ScraperError> {
        let selector = self.strategy.selector();
        let mut records = Vec::new();
        let mut summary = FetchSummary::default();
        let mut state = FetchState::Unauthenticated;

        loop {
            state = match state {
                FetchState::Unauthenticated => {
                    authenticate(&self.client, credentials).await?;
                    FetchState::Authenticated
                }
                FetchState::Authenticated => {
                    let total = pagination::discover_total(&self.client, &self.strategy).await?;
                    summary.total_count = total;
                    FetchState::Paginating(PaginationState::new(total))
                }
                FetchState::Paginating(pages) => {
                    let pages = pages.advance();
                    let rows = self.fetch_listing_page(pages, &mut summary).await?;
                    for (row, extracted) in self.extract_details(rows).await {
                        if extracted.degraded {
                            summary.degraded_details += 1;
                        }
                        records.push(assemble(row, extracted.supplement, &selector));
                    }
                    if pages.has_more() {
                        FetchState::Paginating(pages)
                    } else {
                        FetchState::Done
                    }
                }
                FetchState::Done => break,
            };
        }

        summary.rows_emitted = records.len();
        tracing::info!(
            %selector,
            total = summary.total_count,
            pages = summary.pages_fetched,
            emitted = summary.rows_emitted,
            skipped = summary.rows_skipped,
            degraded = summary.degraded_details,
            "catalog fetch complete"
        );
        Ok((records, summary))
    }

    async fn fetch_listing_page(
        &self,
        pages: PaginationState,
        summary: &mut FetchSummary,
    ) -> Result<Vec<ListingRow>, ScraperError> {
        let page_no = pages.current_page();
        let url = pagination::page_url(&self.client, &self.strategy, page_no)?;
        let page = self
            .client
            .get_page(&url, self.strategy.listing_encoding())
            .await?;
        let parsed = listing::parse_rows(&page.document());

        summary.pages_fetched += 1;
        summary.rows_skipped += parsed.skipped;
        tracing::info!(
            page = page_no,
            of = pages.expected_pages(),
            rows = parsed.rows.len(),
            skipped = parsed.skipped,
            total = pages.total_count(),
            "fetched listing page"
        );
        Ok(parsed.rows)
    }

    /// Runs detail extraction for every row, at most `detail_concurrency`
    /// at a time, keeping the input order.
    async fn extract_details(&self, rows: Vec<ListingRow>) -> Vec<(ListingRow, Extracted)> {
        let client = &self.client;
        let strategy = &self.strategy;
        stream::iter(rows)
            .map(|row| async move {
                let extracted = strategy.extract_detail(client, &row).await;
                (row, extracted)
            })
            .buffered(self.detail_concurrency)
            .collect()
            .await
    }
}
