// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Timetable library - scheduling core for course registration
//!
//! This crate expands weekly class sessions and makeup sessions into dated
//! occurrences, detects time conflicts between classrooms, and generates
//! LexoRank strings for stable ordering of list items.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod academic;
pub mod calendar;
pub mod commands;
pub mod config;
pub mod conflict;
pub mod error;
pub mod expand;
pub mod rank;

pub use conflict::{detect_conflicts, find_overlaps, overlaps};
pub use error::{Error, Result};
pub use expand::{expand_schedule, expand_selections};

/// Core data types shared by the expander, the conflict detector and the CLI
pub mod types {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeSet;

    // =========================================================================
    // Term Schedule (input)
    // =========================================================================

    /// A recurring weekly class meeting
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WeeklySession {
        /// Day of week, 0 = Sunday; out-of-range values are normalized
        pub day_of_week: i32,
        /// Start time (`HH:mm`)
        pub start_time: String,
        /// End time (`HH:mm`)
        pub end_time: String,
        /// Room label
        #[serde(default)]
        pub room: Option<String>,
        /// Location label (building, campus)
        #[serde(default)]
        pub location: Option<String>,
        /// 1-based week numbers on which this session does not take place
        #[serde(default)]
        pub excluded_weeks: BTreeSet<u32>,
    }

    impl WeeklySession {
        /// Day of week folded into `0..=6`
        #[must_use]
        pub fn normalized_day(&self) -> u32 {
            // rem_euclid is always in 0..7
            self.day_of_week.rem_euclid(7).unsigned_abs()
        }
    }

    /// A one-off replacement or additional meeting
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MakeupSession {
        /// Calendar date (`YYYY-MM-DD`)
        pub date: String,
        /// Start time (`HH:mm`)
        pub start_time: String,
        /// End time (`HH:mm`)
        pub end_time: String,
        /// Room label
        #[serde(default)]
        pub room: Option<String>,
        /// Location label
        #[serde(default)]
        pub location: Option<String>,
    }

    /// Inclusive 1-based week range within a term
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct WeekRange {
        /// First week
        pub from: u32,
        /// Last week (inclusive)
        pub to: u32,
    }

    impl WeekRange {
        /// Iterate the weeks of the range; empty when `from > to`
        pub fn iter(&self) -> impl Iterator<Item = u32> {
            self.from..=self.to
        }

        /// Number of weeks covered
        #[must_use]
        pub fn len(&self) -> u32 {
            if self.from > self.to {
                0
            } else {
                (self.to - self.from).saturating_add(1)
            }
        }

        /// True when the range covers no week
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    /// All meetings of one classroom within one term
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TermSchedule {
        /// Week range the regular sessions run for
        pub weeks: WeekRange,
        /// Monday of week 1 (`YYYY-MM-DD`)
        pub first_date_of_academic: String,
        /// Recurring weekly sessions
        #[serde(default)]
        pub regular_sessions: Vec<WeeklySession>,
        /// One-off makeup sessions
        #[serde(default)]
        pub makeup_sessions: Vec<MakeupSession>,
    }

    /// Course and registration identity of a classroom
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ClassroomMeta {
        /// Classroom registration identifier
        pub reg_id: String,
        /// Course identifier
        pub course_id: String,
        /// Display label
        #[serde(default)]
        pub title: Option<String>,
    }

    /// A classroom picked by the user, with its schedule
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Selection {
        /// Term schedule of the classroom
        pub schedule: TermSchedule,
        /// Classroom identity
        pub meta: ClassroomMeta,
        /// Whether the classroom takes part in expansion and detection
        #[serde(default = "default_active")]
        pub active: bool,
    }

    fn default_active() -> bool {
        true
    }

    /// Document shape of a selections file
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct SelectionFile {
        /// All selections, active or not
        #[serde(default)]
        pub selections: Vec<Selection>,
    }

    // =========================================================================
    // Occurrences (derived)
    // =========================================================================

    /// Where an occurrence came from
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "kind", rename_all = "camelCase")]
    pub enum OccurrenceKind {
        /// Expanded from a weekly session
        #[serde(rename_all = "camelCase")]
        Regular {
            /// Term week the meeting falls in
            week: u32,
            /// Normalized day of week, 0 = Sunday
            day_of_week: u32,
        },
        /// Taken from a makeup session
        Makeup {
            /// Date of the makeup meeting
            date: NaiveDate,
        },
    }

    /// One concrete dated meeting
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Occurrence {
        /// Deterministic key: `<regId>:r:<day>:<HHMM>:w<week>` or `<regId>:m:<date>`
        pub id: String,
        /// Owning classroom
        pub reg_id: String,
        /// Owning course
        pub course_id: String,
        /// Wall-clock start
        pub start: NaiveDateTime,
        /// Wall-clock end
        pub end: NaiveDateTime,
        /// Room label
        pub room: Option<String>,
        /// Location label
        pub location: Option<String>,
        /// Regular or makeup
        #[serde(flatten)]
        pub kind: OccurrenceKind,
    }

    impl Occurrence {
        /// True for occurrences produced from makeup sessions
        #[must_use]
        pub fn is_makeup(&self) -> bool {
            matches!(self.kind, OccurrenceKind::Makeup { .. })
        }
    }

    // =========================================================================
    // Conflicts
    // =========================================================================

    /// Two classrooms with at least one overlapping occurrence
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ConflictResult {
        /// First classroom (earlier in the selection list)
        #[serde(rename = "regId1")]
        pub reg_id1: String,
        /// Second classroom
        #[serde(rename = "regId2")]
        pub reg_id2: String,
    }

    impl ConflictResult {
        /// True if this conflict involves the given classroom
        #[must_use]
        pub fn involves(&self, reg_id: &str) -> bool {
            self.reg_id1 == reg_id || self.reg_id2 == reg_id
        }

        /// Unordered pair comparison
        #[must_use]
        pub fn same_pair(&self, a: &str, b: &str) -> bool {
            (self.reg_id1 == a && self.reg_id2 == b) || (self.reg_id1 == b && self.reg_id2 == a)
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::*;
}
