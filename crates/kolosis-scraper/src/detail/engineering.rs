//! Engineering-catalog layout.
//!
//! Detail links are absolute and fetched as-is; the detail page is UTF-8 and
//! lists the lecture room in a `table.basic` row headed `講義室`. The course
//! (program) comes from the listing row, not the detail page.

use reqwest::Url;
use scraper::Html;

use super::DetailSupplement;
use crate::error::DetailError;
use crate::html::{element_text, selector, strip_whitespace};
use crate::listing::ListingRow;

const ROOM_HEADER: &str = "講義室";

/// Listing column holding the course (program) name.
const COURSE_CELL: usize = 6;

pub(super) fn detail_url(row: &ListingRow) -> Result<Url, DetailError> {
    let href = row.first_link().ok_or(DetailError::MissingLink)?;
    Url::parse(href).map_err(|_| DetailError::MalformedLink {
        href: href.to_owned(),
    })
}

pub(super) fn course_from_row(row: &ListingRow) -> Option<String> {
    row.cells
        .get(COURSE_CELL)
        .map(|cell| cell.trim().to_owned())
        .filter(|cell| !cell.is_empty())
}

pub(super) fn parse_detail(document: &Html) -> DetailSupplement {
    let row_sel = selector("table.basic tr");
    let th_sel = selector("th");
    let td_sel = selector("td");

    let room = document
        .select(&row_sel)
        .find(|tr| tr.select(&th_sel).any(|th| element_text(th).contains(ROOM_HEADER)))
        .map(|tr| {
            tr.select(&td_sel)
                .map(|td| strip_whitespace(&element_text(td)))
                .collect::<String>()
        })
        .filter(|room| !room.is_empty());

    DetailSupplement {
        name: None,
        room,
        course: None,
    }
}
