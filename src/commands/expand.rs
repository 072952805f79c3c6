// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Expand command - lists the dated occurrences of all active classrooms

use super::input::{check_active_limit, load_selections};
use crate::config::Config;
use crate::expand::expand_selections;
use crate::types::{Occurrence, OccurrenceKind};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Run the expand command
pub fn run(file: &Path, json: bool, config: &Config) -> Result<()> {
    info!("Expanding {}", file.display());

    let selections = load_selections(file)?;
    check_active_limit(&selections, config.max_active_classrooms)?;

    let mut occurrences = expand_selections(&selections)
        .with_context(|| format!("Failed to expand {}", file.display()))?;
    // Library output is grouped by session; show it chronologically
    occurrences.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.reg_id.cmp(&b.reg_id)));

    if json {
        println!("{}", serde_json::to_string_pretty(&occurrences)?);
        return Ok(());
    }

    if occurrences.is_empty() {
        println!("No occurrences. Are any classrooms active?");
        return Ok(());
    }

    println!("Occurrences ({}):", occurrences.len());
    for occurrence in &occurrences {
        println!("  {}", format_line(occurrence));
    }
    Ok(())
}

/// One display line for an occurrence
#[must_use]
pub fn format_line(occurrence: &Occurrence) -> String {
    let origin = match occurrence.kind {
        OccurrenceKind::Regular { week, .. } => format!("week {week}"),
        OccurrenceKind::Makeup { .. } => "makeup".to_string(),
    };
    let place = match (&occurrence.room, &occurrence.location) {
        (Some(room), Some(location)) => format!(" @ {room}, {location}"),
        (Some(room), None) => format!(" @ {room}"),
        (None, Some(location)) => format!(" @ {location}"),
        (None, None) => String::new(),
    };

    format!(
        "{} {}-{}  {} ({}) [{}]{}",
        occurrence.start.format("%a %Y-%m-%d"),
        occurrence.start.format("%H:%M"),
        occurrence.end.format("%H:%M"),
        occurrence.reg_id,
        occurrence.course_id,
        origin,
        place
    )
}
