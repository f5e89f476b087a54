//! Row extraction from a search-result listing page.
//!
//! The listing is a single `table.standard_list`. Its first rows are the
//! caption and column headers and its last row holds the pager, so those
//! are dropped before any cell is read. Every remaining row is parsed on its
//! own: a malformed row is logged and skipped without affecting the rest.

use scraper::{ElementRef, Html};

use crate::html::{element_text, selector};
use crate::normalize::{normalize_category, normalize_teacher, split_lines, to_half_width};

/// Caption and header rows at the top of every listing table.
pub const LEADING_ROWS: usize = 3;
/// Pager row at the bottom of every listing table.
pub const TRAILING_ROWS: usize = 1;

/// Cells a row needs before it can be read (code through category).
const REQUIRED_CELLS: usize = 6;

/// `html5ever` inserts `tbody`, so rows are one level below the table.
const ROW_SELECTOR: &str = "table.standard_list > tbody > tr, table.standard_list > thead > tr, table.standard_list > tfoot > tr";

/// One course row of a listing page, before detail enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub code: u32,
    pub name: String,
    pub teachers: Vec<String>,
    pub periods: Vec<String>,
    pub term: String,
    pub category: String,
    /// Trimmed text of every cell, in column order.
    pub cells: Vec<String>,
    /// `href` of every link inside the row's cells, in document order.
    pub links: Vec<String>,
}

impl ListingRow {
    #[must_use]
    pub fn first_link(&self) -> Option<&str> {
        self.links.first().map(String::as_str)
    }

    #[must_use]
    pub fn last_link(&self) -> Option<&str> {
        self.links.last().map(String::as_str)
    }
}

/// Why a single row was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSkip {
    TooFewCells { found: usize },
    BadCode { raw: String },
}

impl std::fmt::Display for RowSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowSkip::TooFewCells { found } => {
                write!(f, "row has {found} cells, need {REQUIRED_CELLS}")
            }
            RowSkip::BadCode { raw } => write!(f, "course code {raw:?} is not a number"),
        }
    }
}

/// Outcome of parsing one listing page.
#[derive(Debug, Default)]
pub struct ParsedListing {
    pub rows: Vec<ListingRow>,
    pub skipped: usize,
}

/// Extracts the course rows of a listing page.
#[must_use]
pub fn parse_rows(document: &Html) -> ParsedListing {
    let row_sel = selector(ROW_SELECTOR);
    let all: Vec<ElementRef<'_>> = document.select(&row_sel).collect();

    let end = all.len().saturating_sub(TRAILING_ROWS);
    let body = all.get(LEADING_ROWS..end).unwrap_or_default();

    let mut parsed = ParsedListing::default();
    for (index, tr) in body.iter().enumerate() {
        match parse_row(*tr) {
            Ok(row) => parsed.rows.push(row),
            Err(skip) => {
                tracing::warn!(row = index, reason = %skip, "skipping listing row");
                parsed.skipped += 1;
            }
        }
    }
    parsed
}

/// Parses one `<tr>` of the listing table.
///
/// # Errors
///
/// Returns a [`RowSkip`] when the row lacks the required cells or its code
/// cell is not numeric.
pub fn parse_row(tr: ElementRef<'_>) -> Result<ListingRow, RowSkip> {
    let td_sel = selector("td");
    let link_sel = selector("td a[href]");

    let cells: Vec<String> = tr
        .select(&td_sel)
        .map(|td| element_text(td).trim().to_owned())
        .collect();

    if cells.len() < REQUIRED_CELLS {
        return Err(RowSkip::TooFewCells { found: cells.len() });
    }

    let code_text = to_half_width(&cells[0]);
    let code = code_text
        .trim()
        .parse::<u32>()
        .map_err(|_| RowSkip::BadCode {
            raw: cells[0].clone(),
        })?;

    let links = tr
        .select(&link_sel)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_owned)
        .collect();

    Ok(ListingRow {
        code,
        name: to_half_width(&cells[1]),
        teachers: split_lines(&cells[2])
            .iter()
            .map(String::as_str)
            .map(normalize_teacher)
            .filter(|t| !t.is_empty())
            .collect(),
        periods: split_lines(&cells[3]),
        term: cells[4].clone(),
        category: normalize_category(&cells[5]),
        cells,
        links,
    })
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
