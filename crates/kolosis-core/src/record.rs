use serde::{Deserialize, Serialize};

use crate::faculty::FacultyCode;

/// One normalized course-catalog entry.
///
/// Every field is always serialized, including `room` and `course` when they
/// are `None`, so output files have the same key set whichever detail layout
/// produced the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub code: u32,
    pub name: String,
    pub teachers: Vec<String>,
    pub periods: Vec<String>,
    pub term: String,
    pub category: String,
    pub faculty: FacultyCode,
    pub room: Option<String>,
    /// Engineering-only course (program) column from the listing.
    pub course: Option<String>,
}
