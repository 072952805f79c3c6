// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Default academic year and semester for a given date
//!
//! "Today" is always passed in; nothing here reads the system clock.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semester within an academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    /// August to December
    First,
    /// January to May
    Second,
    /// June and July
    Summer,
}

impl Semester {
    /// Numeric label (1, 2, 3)
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Summer => 3,
        }
    }
}

/// An academic year (`start_year`/`start_year + 1`) and semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicPeriod {
    /// Calendar year the academic year begins in
    pub start_year: i32,
    /// Semester of that academic year
    pub semester: Semester,
}

impl AcademicPeriod {
    /// Period that `today` belongs to
    #[must_use]
    pub fn containing(today: NaiveDate) -> Self {
        let year = today.year();
        match today.month() {
            8..=12 => Self {
                start_year: year,
                semester: Semester::First,
            },
            1..=5 => Self {
                start_year: year - 1,
                semester: Semester::Second,
            },
            _ => Self {
                start_year: year - 1,
                semester: Semester::Summer,
            },
        }
    }

    /// Academic year label, e.g. `2025-2026`
    #[must_use]
    pub fn year_label(&self) -> String {
        format!("{}-{}", self.start_year, self.start_year + 1)
    }
}

impl fmt::Display for AcademicPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} S{}", self.year_label(), self.semester.number())
    }
}
