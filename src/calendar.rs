// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Calendar views over expanded occurrences

use crate::conflict::overlapping_indices;
use crate::types::Occurrence;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// First start and last end across a set of occurrences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSpan {
    /// Earliest start
    pub first_start: NaiveDateTime,
    /// Latest end
    pub last_end: NaiveDateTime,
}

impl CalendarSpan {
    /// Day to jump to for "first day"
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        self.first_start.date()
    }

    /// Day to jump to for "last day"
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.last_end.date()
    }
}

/// An occurrence as shown on the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent<'a> {
    /// The underlying occurrence
    pub occurrence: &'a Occurrence,
    /// Overlaps an occurrence of another classroom
    pub conflicting: bool,
}

/// Scan for the earliest start and the latest end
///
/// The expander does not sort its output, so both ends are found
/// independently. `None` for an empty slice.
#[must_use]
pub fn span(occurrences: &[Occurrence]) -> Option<CalendarSpan> {
    let first_start = occurrences.iter().map(|o| o.start).min()?;
    let last_end = occurrences.iter().map(|o| o.end).max()?;
    Some(CalendarSpan { first_start, last_end })
}

/// 1-based term week containing `date`; zero or negative before week 1
#[must_use]
pub fn week_number(first_monday: NaiveDate, date: NaiveDate) -> i64 {
    (date - first_monday).num_days().div_euclid(7) + 1
}

/// Pair each occurrence with a conflict flag, keeping input order
#[must_use]
pub fn highlight(occurrences: &[Occurrence]) -> Vec<CalendarEvent<'_>> {
    let mut flagged = vec![false; occurrences.len()];
    for (i, j) in overlapping_indices(occurrences) {
        flagged[i] = true;
        flagged[j] = true;
    }

    occurrences
        .iter()
        .zip(flagged)
        .map(|(occurrence, conflicting)| CalendarEvent {
            occurrence,
            conflicting,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OccurrenceKind;

    fn occ(reg_id: &str, start: &str, end: &str) -> Occurrence {
        let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M").unwrap();
        let end = NaiveDateTime::parse_from_str(end, "%Y-%m-%d %H:%M").unwrap();
        Occurrence {
            id: format!("{reg_id}:{start}"),
            reg_id: reg_id.into(),
            course_id: "c".into(),
            start,
            end,
            room: None,
            location: None,
            kind: OccurrenceKind::Regular { week: 1, day_of_week: 1 },
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_span_scans_unsorted_input() {
        let occurrences = vec![
            occ("A", "2025-02-03 08:00", "2025-02-03 10:00"),
            occ("B", "2025-01-06 13:00", "2025-01-06 14:00"),
            occ("A", "2025-03-10 08:00", "2025-03-10 09:00"),
            // starts earlier but ends later than the one above
            occ("C", "2025-03-09 20:00", "2025-03-10 23:00"),
        ];
        let span = span(&occurrences).unwrap();

        assert_eq!(span.first_day(), day("2025-01-06"));
        assert_eq!(span.last_end.to_string(), "2025-03-10 23:00:00");
        assert_eq!(span.last_day(), day("2025-03-10"));
    }

    #[test]
    fn test_span_empty() {
        assert_eq!(span(&[]), None);
    }

    #[test]
    fn test_week_number() {
        let first = day("2025-01-06");
        assert_eq!(week_number(first, day("2025-01-06")), 1);
        assert_eq!(week_number(first, day("2025-01-12")), 1);
        assert_eq!(week_number(first, day("2025-01-13")), 2);
        // Sunday before week 1
        assert_eq!(week_number(first, day("2025-01-05")), 0);
        assert_eq!(week_number(first, day("2025-03-10")), 10);
    }

    #[test]
    fn test_highlight_flags_only_conflicting() {
        let occurrences = vec![
            occ("A", "2025-01-06 08:00", "2025-01-06 10:00"),
            occ("B", "2025-01-06 09:00", "2025-01-06 11:00"),
            occ("B", "2025-01-07 09:00", "2025-01-07 11:00"),
            occ("A", "2025-01-07 11:00", "2025-01-07 12:00"),
        ];
        let flags: Vec<bool> = highlight(&occurrences).iter().map(|e| e.conflicting).collect();
        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn test_highlight_keeps_duplicates_apart() {
        // two identical copies of A's meeting: each is flagged on its own
        let occurrences = vec![
            occ("A", "2025-01-06 08:00", "2025-01-06 10:00"),
            occ("A", "2025-01-06 08:00", "2025-01-06 10:00"),
            occ("B", "2025-01-06 09:30", "2025-01-06 10:30"),
            occ("A", "2025-01-08 08:00", "2025-01-08 10:00"),
        ];
        let events = highlight(&occurrences);
        assert_eq!(events.len(), 4);
        let flags: Vec<bool> = events.iter().map(|e| e.conflicting).collect();
        assert_eq!(flags, vec![true, true, true, false]);
        assert!(std::ptr::eq(events[1].occurrence, &occurrences[1]));
    }
}
