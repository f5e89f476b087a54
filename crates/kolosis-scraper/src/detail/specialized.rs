//! Faculty-catalog layout (every faculty except engineering).
//!
//! The row's first link is a path relative to the faculty's syllabus tree.
//! The room is printed inline in one of the top-aligned rows as
//! `(教室)<room>(…`.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;
use scraper::Html;

use super::DetailSupplement;
use crate::client::PortalClient;
use crate::error::DetailError;
use crate::html::{element_text, selector, strip_whitespace};
use crate::listing::ListingRow;

const TITLE_SELECTOR: &str = "span.x100 b";
const ROOM_MARKER: &str = "(教室)";

static ROOM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(教室\)(.*?)\(").expect("valid regex"));

pub(super) fn detail_url(
    client: &PortalClient,
    section_path: &str,
    row: &ListingRow,
) -> Result<Url, DetailError> {
    let href = row.first_link().ok_or(DetailError::MissingLink)?;
    let path = href.trim_start_matches("./");
    client
        .resolve(&format!("{section_path}/syllabus/{path}"))
        .map_err(|_| DetailError::MalformedLink {
            href: href.to_owned(),
        })
}

/// Text between the room marker and the next opening parenthesis.
///
/// `None` when the marker is absent or nothing follows it up to a `(`.
pub(super) fn room_from_text(text: &str) -> Option<String> {
    ROOM.captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_owned())
        .filter(|room| !room.is_empty())
}

pub(super) fn parse_detail(document: &Html) -> Result<DetailSupplement, DetailError> {
    let name = super::title(document, TITLE_SELECTOR)?;

    let row_sel = selector(r#"tr[valign="top"]"#);
    let room = document
        .select(&row_sel)
        .map(|tr| strip_whitespace(&element_text(tr)))
        .find(|text| text.contains(ROOM_MARKER))
        .and_then(|text| room_from_text(&text));

    Ok(DetailSupplement {
        name: Some(name),
        room,
        course: None,
    })
}
