//! Detail-page enrichment, one strategy per catalog layout.
//!
//! The portal serves three layouts that differ in how a listing row links to
//! its detail page, where the room is printed, how pages are encoded, and
//! where the listing prints its hit count. [`DetailStrategy`] bundles those
//! rules for one [`FacultySelector`]; it is chosen once per run by
//! [`DetailStrategy::for_selector`] and never changes afterwards.

mod engineering;
mod generic;
mod specialized;

use reqwest::Url;
use scraper::Html;

use kolosis_core::{FacultyCode, FacultySelector};

use crate::client::{Page, PageEncoding, PortalClient};
use crate::error::DetailError;
use crate::html::{element_text, selector};
use crate::listing::ListingRow;

/// Fields a detail page can add to a listing row. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSupplement {
    /// Canonical course name; replaces the listing name when present.
    pub name: Option<String>,
    pub room: Option<String>,
    pub course: Option<String>,
}

impl DetailSupplement {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.room.is_none() && self.course.is_none()
    }
}

/// Which page layout a catalog uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Common (liberal-arts) search: detail reached through the lecture number.
    Generic,
    /// Faculty catalogs other than engineering: detail reached by relative path.
    Specialized,
    /// Engineering catalogs: detail link is absolute and UTF-8 encoded.
    EngineeringSpecialized,
}

impl Layout {
    #[must_use]
    pub fn for_faculty(faculty: FacultyCode) -> Self {
        match faculty {
            FacultyCode::Common => Layout::Generic,
            FacultyCode::T => Layout::EngineeringSpecialized,
            _ => Layout::Specialized,
        }
    }
}

/// The extraction rules for one catalog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailStrategy {
    layout: Layout,
    selector: FacultySelector,
}

impl DetailStrategy {
    /// Picks the strategy for `selector`. Pure: the same selector always
    /// yields the same strategy.
    #[must_use]
    pub fn for_selector(selector: FacultySelector) -> Self {
        Self {
            layout: Layout::for_faculty(selector.faculty()),
            selector,
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn selector(&self) -> FacultySelector {
        self.selector
    }

    /// Portal path of the search listing, relative to the portal base.
    #[must_use]
    pub fn listing_path(&self) -> String {
        match self.layout {
            Layout::Generic => "la/syllabus/search".to_owned(),
            Layout::Specialized | Layout::EngineeringSpecialized => {
                format!("{}/syllabus/search", self.section_path())
            }
        }
    }

    /// Where the listing prints its total hit count.
    ///
    /// The common search and the faculty searches place it differently;
    /// both locations are kept as observed.
    #[must_use]
    pub fn summary_selector(&self) -> &'static str {
        match self.layout {
            Layout::Generic => "div.content > div.explanation > b",
            Layout::Specialized | Layout::EngineeringSpecialized => "div.content > div > b",
        }
    }

    /// Listing pages are Shift_JIS in every section.
    #[must_use]
    pub fn listing_encoding(&self) -> PageEncoding {
        PageEncoding::ShiftJis
    }

    #[must_use]
    pub fn detail_encoding(&self) -> PageEncoding {
        match self.layout {
            Layout::Generic | Layout::Specialized => PageEncoding::ShiftJis,
            Layout::EngineeringSpecialized => PageEncoding::Auto,
        }
    }

    /// `{level}/{faculty}`, e.g. `u/let`.
    fn section_path(&self) -> String {
        format!("{}/{}", self.selector.level(), self.selector.faculty())
    }

    /// Builds the detail-page URL for `row`.
    ///
    /// # Errors
    ///
    /// [`DetailError::MissingLink`] if the row has no link,
    /// [`DetailError::MalformedLink`] if the link cannot be turned into a URL.
    pub fn detail_url(&self, client: &PortalClient, row: &ListingRow) -> Result<Url, DetailError> {
        match self.layout {
            Layout::Generic => generic::detail_url(client, row),
            Layout::Specialized => specialized::detail_url(client, &self.section_path(), row),
            Layout::EngineeringSpecialized => engineering::detail_url(row),
        }
    }

    /// Reads the supplement from a fetched detail page.
    ///
    /// # Errors
    ///
    /// [`DetailError::MissingElement`] when the page lacks an element the
    /// layout requires. A missing room is not an error.
    pub fn parse_detail(&self, document: &Html) -> Result<DetailSupplement, DetailError> {
        match self.layout {
            Layout::Generic => generic::parse_detail(document),
            Layout::Specialized => specialized::parse_detail(document),
            Layout::EngineeringSpecialized => Ok(engineering::parse_detail(document)),
        }
    }

    /// Fields taken from the listing row itself rather than the detail
    /// page. Present even when the detail fetch fails.
    #[must_use]
    pub fn row_supplement(&self, row: &ListingRow) -> DetailSupplement {
        match self.layout {
            Layout::EngineeringSpecialized => DetailSupplement {
                course: engineering::course_from_row(row),
                ..DetailSupplement::default()
            },
            Layout::Generic | Layout::Specialized => DetailSupplement::default(),
        }
    }

    /// Fetches and parses the detail page for `row`.
    ///
    /// # Errors
    ///
    /// Any [`DetailError`]; callers that want the degraded behavior use
    /// [`DetailStrategy::extract_detail`] instead.
    pub async fn try_extract_detail(
        &self,
        client: &PortalClient,
        row: &ListingRow,
    ) -> Result<DetailSupplement, DetailError> {
        let url = self.detail_url(client, row)?;
        tracing::debug!(code = row.code, %url, "fetching detail page");
        let page: Page = client.get_page(&url, self.detail_encoding()).await?;
        let mut supplement = self.parse_detail(&page.document())?;
        if supplement.course.is_none() {
            supplement.course = self.row_supplement(row).course;
        }
        Ok(supplement)
    }

    /// Fetches and parses the detail page for `row`, degrading any failure
    /// to the row-only supplement.
    pub async fn extract_detail(&self, client: &PortalClient, row: &ListingRow) -> Extracted {
        match self.try_extract_detail(client, row).await {
            Ok(supplement) => Extracted {
                supplement,
                degraded: false,
            },
            Err(e) => {
                tracing::warn!(
                    code = row.code,
                    layout = ?self.layout,
                    error = %e,
                    "detail extraction failed; keeping listing fields only"
                );
                Extracted {
                    supplement: self.row_supplement(row),
                    degraded: true,
                }
            }
        }
    }
}

/// Trimmed text of the first `css` match; the course title on detail pages.
fn title(document: &Html, css: &'static str) -> Result<String, DetailError> {
    let sel = selector(css);
    document
        .select(&sel)
        .next()
        .map(|el| element_text(el).trim().to_owned())
        .filter(|t| !t.is_empty())
        .ok_or(DetailError::MissingElement { selector: css })
}

/// Result of a best-effort detail extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub supplement: DetailSupplement,
    /// `true` when the detail page could not be used.
    pub degraded: bool,
}

#[cfg(test)]
#[path = "../detail_test.rs"]
mod tests;
