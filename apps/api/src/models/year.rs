use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Academic year of study. Ordering follows progression through the programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AcademicYear {
    #[serde(rename = "1st Year")]
    First,
    #[serde(rename = "2nd Year")]
    Second,
    #[serde(rename = "3rd Year")]
    Third,
    #[serde(rename = "4th Year")]
    Fourth,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown academic year '{0}'. Expected one of: 1st Year, 2nd Year, 3rd Year, 4th Year")]
pub struct UnknownYear(pub String);

impl AcademicYear {
    pub const ALL: [AcademicYear; 4] = [
        AcademicYear::First,
        AcademicYear::Second,
        AcademicYear::Third,
        AcademicYear::Fourth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AcademicYear::First => "1st Year",
            AcademicYear::Second => "2nd Year",
            AcademicYear::Third => "3rd Year",
            AcademicYear::Fourth => "4th Year",
        }
    }

    fn ordinal(self) -> &'static str {
        &self.label()[..3]
    }
}

impl fmt::Display for AcademicYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label ("3rd Year"), the bare ordinal ("3rd") or the digit ("3"),
/// case-insensitively.
impl FromStr for AcademicYear {
    type Err = UnknownYear;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        AcademicYear::ALL
            .into_iter()
            .enumerate()
            .find(|(idx, year)| {
                needle.eq_ignore_ascii_case(year.label())
                    || needle.eq_ignore_ascii_case(year.ordinal())
                    || needle == (idx + 1).to_string()
            })
            .map(|(_, year)| year)
            .ok_or_else(|| UnknownYear(needle.to_string()))
    }
}
