use kolosis_core::{FacultySelector, Record};

use crate::detail::DetailSupplement;
use crate::listing::ListingRow;

/// Merges a listing row and its detail supplement into one [`Record`].
///
/// The detail name wins over the listing name when present. Missing room or
/// course stays `None`; there are no placeholder values.
#[must_use]
pub fn assemble(row: ListingRow, supplement: DetailSupplement, selector: &FacultySelector) -> Record {
    Record {
        code: row.code,
        name: supplement.name.unwrap_or(row.name),
        teachers: row.teachers,
        periods: row.periods,
        term: row.term,
        category: row.category,
        faculty: selector.faculty(),
        room: supplement.room,
        course: supplement.course,
    }
}
