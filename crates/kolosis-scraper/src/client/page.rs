use reqwest::Url;
use scraper::Html;

use crate::html::{element_text, selector};

/// How a page body is decoded.
///
/// The listing and detail pages of the common and non-engineering catalogs
/// are Shift_JIS whatever their charset header says; the engineering detail
/// pages are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEncoding {
    /// Always decode as Shift_JIS, ignoring any declared charset.
    ShiftJis,
    /// Use the response's declared charset, falling back to UTF-8.
    Auto,
}

/// A fetched page: the final URL after redirects and the decoded body.
#[derive(Debug, Clone)]
pub struct Page {
    url: Url,
    body: String,
}

impl Page {
    #[must_use]
    pub fn new(url: Url, body: String) -> Self {
        Self { url, body }
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body. The returned document is not `Send`; keep it out of
    /// any scope that spans an `.await`.
    #[must_use]
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }

    /// Resolves `href` against this page's URL.
    #[must_use]
    pub fn join(&self, href: &str) -> Option<Url> {
        self.url.join(href).ok()
    }

    /// Returns the target of the first link whose visible text contains
    /// `marker`, resolved against this page's URL.
    #[must_use]
    pub fn find_link(&self, marker: &str) -> Option<Url> {
        let document = self.document();
        let link_sel = selector("a[href]");
        document
            .select(&link_sel)
            .find(|a| element_text(*a).contains(marker))
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| self.join(href))
    }
}
