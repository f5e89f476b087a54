//! Faculty table for the syllabus portal.
//!
//! A [`FacultySelector`] names one catalog section: a program level plus a
//! faculty code. The selector decides both the listing URL and which detail
//! layout the scraper uses, so it is validated against the portal's table up
//! front and never changes during a fetch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgramLevel {
    #[serde(rename = "g")]
    Graduate,
    #[serde(rename = "u")]
    Undergraduate,
}

impl ProgramLevel {
    /// Path segment used by the portal (`g` or `u`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ProgramLevel::Graduate => "g",
            ProgramLevel::Undergraduate => "u",
        }
    }
}

impl fmt::Display for ProgramLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProgramLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "g" | "graduate" => Ok(ProgramLevel::Graduate),
            "u" | "undergraduate" => Ok(ProgramLevel::Undergraduate),
            other => Err(CoreError::UnknownProgramLevel(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacultyCode {
    /// Liberal-arts and common courses, served from the shared search path.
    Common,
    Let,
    Ed,
    Ec,
    L,
    S,
    Med,
    Medh,
    P,
    T,
    A,
    H,
    Ene,
    Aa,
    I,
    Ert,
    Man,
}

impl FacultyCode {
    pub const ALL: [FacultyCode; 17] = [
        FacultyCode::Common,
        FacultyCode::Let,
        FacultyCode::Ed,
        FacultyCode::Ec,
        FacultyCode::L,
        FacultyCode::S,
        FacultyCode::Med,
        FacultyCode::Medh,
        FacultyCode::P,
        FacultyCode::T,
        FacultyCode::A,
        FacultyCode::H,
        FacultyCode::Ene,
        FacultyCode::Aa,
        FacultyCode::I,
        FacultyCode::Ert,
        FacultyCode::Man,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            FacultyCode::Common => "common",
            FacultyCode::Let => "let",
            FacultyCode::Ed => "ed",
            FacultyCode::Ec => "ec",
            FacultyCode::L => "l",
            FacultyCode::S => "s",
            FacultyCode::Med => "med",
            FacultyCode::Medh => "medh",
            FacultyCode::P => "p",
            FacultyCode::T => "t",
            FacultyCode::A => "a",
            FacultyCode::H => "h",
            FacultyCode::Ene => "ene",
            FacultyCode::Aa => "aa",
            FacultyCode::I => "i",
            FacultyCode::Ert => "ert",
            FacultyCode::Man => "man",
        }
    }

    /// Portal display name of this faculty at `level`, or `None` when the
    /// faculty has no catalog at that level.
    #[must_use]
    pub fn display_name(self, level: ProgramLevel) -> Option<&'static str> {
        use FacultyCode as F;
        use ProgramLevel::{Graduate, Undergraduate};

        match (level, self) {
            (_, F::Common) => Some("全学共通科目"),
            (Graduate, F::Let) => Some("文学研究科"),
            (Graduate, F::Ed) => Some("教育学研究科"),
            (Graduate, F::Ec) => Some("経済学研究科"),
            (Graduate, F::P) => Some("薬学研究科"),
            (Graduate, F::T) => Some("工学研究科"),
            (Graduate, F::Ene) => Some("エネルギー科学研究科"),
            (Graduate, F::Aa) => Some("アジア・アフリカ地域研究研究科"),
            (Graduate, F::I) => Some("情報学研究科"),
            (Graduate, F::Ert) => Some("地球環境学舎"),
            (Graduate, F::Man) => Some("経営管理大学院"),
            (Undergraduate, F::Let) => Some("文学部"),
            (Undergraduate, F::Ed) => Some("教育学部"),
            (Undergraduate, F::Ec) => Some("経済学部"),
            (Undergraduate, F::L) => Some("法学部"),
            (Undergraduate, F::S) => Some("理学部"),
            (Undergraduate, F::Med) => Some("医学部医学科"),
            (Undergraduate, F::Medh) => Some("医学部人間健康科学科"),
            (Undergraduate, F::P) => Some("薬学部"),
            (Undergraduate, F::T) => Some("工学部"),
            (Undergraduate, F::A) => Some("農学部"),
            (Undergraduate, F::H) => Some("総合人間学部"),
            _ => None,
        }
    }
}

impl fmt::Display for FacultyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FacultyCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        FacultyCode::ALL
            .into_iter()
            .find(|code| code.code() == lowered)
            .ok_or(CoreError::UnknownFaculty(lowered))
    }
}

/// Identifies one catalog section of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacultySelector {
    level: ProgramLevel,
    faculty: FacultyCode,
}

impl FacultySelector {
    /// Builds a selector, rejecting faculties the portal does not list at `level`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::FacultyNotOffered`] if `faculty` has no catalog
    /// at `level` (e.g. `ene` is graduate-only).
    pub fn new(level: ProgramLevel, faculty: FacultyCode) -> Result<Self, CoreError> {
        if faculty.display_name(level).is_none() {
            return Err(CoreError::FacultyNotOffered {
                code: faculty.code().to_owned(),
                level: level.code().to_owned(),
            });
        }
        Ok(Self { level, faculty })
    }

    #[must_use]
    pub fn level(&self) -> ProgramLevel {
        self.level
    }

    #[must_use]
    pub fn faculty(&self) -> FacultyCode {
        self.faculty
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        // `new` guarantees the pair is in the table.
        self.faculty.display_name(self.level).unwrap_or_default()
    }

    /// File name the catalog is conventionally saved under,
    /// e.g. `kulasis_let_u.yml`.
    #[must_use]
    pub fn output_file_name(&self) -> String {
        format!("kulasis_{}_{}.yml", self.faculty, self.level)
    }
}

impl Default for FacultySelector {
    fn default() -> Self {
        Self {
            level: ProgramLevel::Undergraduate,
            faculty: FacultyCode::Common,
        }
    }
}

impl fmt::Display for FacultySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.level, self.faculty)
    }
}

#[cfg(test)]
#[path = "faculty_test.rs"]
mod tests;
