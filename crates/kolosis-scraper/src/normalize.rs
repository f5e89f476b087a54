//! Text normalization for listing cells.
//!
//! The portal mixes full-width and standard-width Latin letters and digits
//! freely (`ＭＡＴＨ１０１` next to `MATH101`) and pads names with
//! ideographic spaces. Everything here is idempotent.

/// Ideographic space (U+3000) used to separate family and given names.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Maps full-width `Ａ-Ｚ`, `ａ-ｚ` and `０-９` to their ASCII counterparts.
/// Every other character passes through unchanged.
#[must_use]
pub fn to_half_width(s: &str) -> String {
    s.chars().map(half_width_char).collect()
}

fn half_width_char(c: char) -> char {
    match c {
        'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => {
            // The full-width block mirrors ASCII at a fixed offset.
            char::from_u32(u32::from(c) - 0xFEE0).unwrap_or(c)
        }
        _ => c,
    }
}

/// Splits a multi-line cell into its trimmed, non-empty lines.
#[must_use]
pub fn split_lines(cell: &str) -> Vec<String> {
    cell.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Normalizes one teacher name: drops ideographic spaces, then half-widths.
#[must_use]
pub fn normalize_teacher(name: &str) -> String {
    let without_gaps: String = name.chars().filter(|c| *c != IDEOGRAPHIC_SPACE).collect();
    to_half_width(&without_gaps)
}

/// Normalizes the category cell: half-widths and removes ASCII whitespace.
#[must_use]
pub fn normalize_category(cell: &str) -> String {
    crate::html::strip_whitespace(&to_half_width(cell))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
