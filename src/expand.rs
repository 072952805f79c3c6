// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Schedule expansion - weekly sessions and makeup sessions to dated occurrences
//!
//! Week `n` starts on `firstDateOfAcademic + (n - 1)` weeks. A session on day
//! `d` (0 = Sunday) lands `d - 1` days after that Monday, so Sunday sessions
//! fall on the Sunday *before* the week's Monday.
//!
//! Output is grouped by session, not sorted by time.

use crate::error::{Error, Result};
use crate::types::{
    ClassroomMeta, MakeupSession, Occurrence, OccurrenceKind, Selection, TermSchedule,
    WeeklySession,
};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use tracing::{debug, warn};

const TIME_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expand one classroom's term schedule
pub fn expand_schedule(schedule: &TermSchedule, meta: &ClassroomMeta) -> Result<Vec<Occurrence>> {
    let first_monday = parse_date("firstDateOfAcademic", &schedule.first_date_of_academic)?;
    if first_monday.weekday() != Weekday::Mon {
        warn!(
            reg_id = %meta.reg_id,
            date = %first_monday,
            "first date of academic term is a {:?}, not a Monday",
            first_monday.weekday()
        );
    }

    let mut occurrences = Vec::new();

    for session in &schedule.regular_sessions {
        expand_weekly(session, schedule, first_monday, meta, &mut occurrences)?;
    }
    for makeup in &schedule.makeup_sessions {
        occurrences.push(expand_makeup(makeup, meta)?);
    }

    debug!(
        reg_id = %meta.reg_id,
        count = occurrences.len(),
        "expanded term schedule"
    );
    Ok(occurrences)
}

/// Expand every active selection; inactive ones contribute nothing
pub fn expand_selections(selections: &[Selection]) -> Result<Vec<Occurrence>> {
    let mut occurrences = Vec::new();
    for selection in selections.iter().filter(|s| s.active) {
        occurrences.extend(expand_schedule(&selection.schedule, &selection.meta)?);
    }
    Ok(occurrences)
}

fn expand_weekly(
    session: &WeeklySession,
    schedule: &TermSchedule,
    first_monday: NaiveDate,
    meta: &ClassroomMeta,
    out: &mut Vec<Occurrence>,
) -> Result<()> {
    // Parse up front so bad input fails even when every week is excluded
    let (start, end) = parse_times(&session.start_time, &session.end_time)?;
    let day = session.normalized_day();

    for week in schedule.weeks.iter() {
        if session.excluded_weeks.contains(&week) {
            continue;
        }

        let offset = Duration::weeks(i64::from(week) - 1) + Duration::days(i64::from(day) - 1);
        let date = first_monday
            .checked_add_signed(offset)
            .ok_or_else(|| Error::parse("week", &week.to_string(), "a week inside the calendar range"))?;

        out.push(Occurrence {
            id: regular_id(&meta.reg_id, day, start, week),
            reg_id: meta.reg_id.clone(),
            course_id: meta.course_id.clone(),
            start: date.and_time(start),
            end: date.and_time(end),
            room: session.room.clone(),
            location: session.location.clone(),
            kind: OccurrenceKind::Regular {
                week,
                day_of_week: day,
            },
        });
    }
    Ok(())
}

fn expand_makeup(makeup: &MakeupSession, meta: &ClassroomMeta) -> Result<Occurrence> {
    let date = parse_date("date", &makeup.date)?;
    let (start, end) = parse_times(&makeup.start_time, &makeup.end_time)?;

    Ok(Occurrence {
        id: makeup_id(&meta.reg_id, date),
        reg_id: meta.reg_id.clone(),
        course_id: meta.course_id.clone(),
        start: date.and_time(start),
        end: date.and_time(end),
        room: makeup.room.clone(),
        location: makeup.location.clone(),
        kind: OccurrenceKind::Makeup { date },
    })
}

/// Deterministic key for a regular occurrence
#[must_use]
pub fn regular_id(reg_id: &str, day: u32, start: NaiveTime, week: u32) -> String {
    format!("{}:r:{}:{}:w{}", reg_id, day, start.format("%H%M"), week)
}

/// Deterministic key for a makeup occurrence
#[must_use]
pub fn makeup_id(reg_id: &str, date: NaiveDate) -> String {
    format!("{}:m:{}", reg_id, date.format(DATE_FORMAT))
}

/// Parse a `HH:mm` wall-clock time
pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| Error::parse(field, value, "HH:mm"))
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| Error::parse(field, value, "YYYY-MM-DD"))
}

fn parse_times(start: &str, end: &str) -> Result<(NaiveTime, NaiveTime)> {
    let start = parse_time("startTime", start)?;
    let end = parse_time("endTime", end)?;
    if end <= start {
        return Err(Error::EmptySession {
            start: start.format(TIME_FORMAT).to_string(),
            end: end.format(TIME_FORMAT).to_string(),
        });
    }
    Ok((start, end))
}
