//! Common-search layout.
//!
//! The row's last link (the print link) carries the lecture number; the
//! detail page is a separate endpoint keyed by that number. The room is the
//! second cell of the last top-aligned row of the lecture summary table.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;
use scraper::Html;

use super::DetailSupplement;
use crate::client::PortalClient;
use crate::error::DetailError;
use crate::html::{element_text, selector};
use crate::listing::ListingRow;

const TITLE_SELECTOR: &str = "span.x100 b";
const ROOM_ROW_SELECTOR: &str =
    r#"table[border="0"][cellspacing="0"][cellpadding="2"] tr[valign="top"]"#;

static LECTURE_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bno=(\d+)").expect("valid regex"));

/// Lecture number from a print/detail link such as `print?no=12345`.
pub(super) fn lecture_number(href: &str) -> Option<&str> {
    LECTURE_NO
        .captures(href)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

pub(super) fn detail_url(client: &PortalClient, row: &ListingRow) -> Result<Url, DetailError> {
    let href = row.last_link().ok_or(DetailError::MissingLink)?;
    let number = lecture_number(href).ok_or_else(|| DetailError::MalformedLink {
        href: href.to_owned(),
    })?;
    client
        .resolve(&format!("la/support/lecture_detail?no={number}"))
        .map_err(|_| DetailError::MalformedLink {
            href: href.to_owned(),
        })
}

pub(super) fn parse_detail(document: &Html) -> Result<DetailSupplement, DetailError> {
    let name = super::title(document, TITLE_SELECTOR)?;

    let row_sel = selector(ROOM_ROW_SELECTOR);
    let td_sel = selector("td");
    let room = document
        .select(&row_sel)
        .last()
        .and_then(|tr| tr.select(&td_sel).nth(1))
        .map(|td| element_text(td).trim().to_owned())
        .filter(|room| !room.is_empty());

    Ok(DetailSupplement {
        name: Some(name),
        room,
        course: None,
    })
}
