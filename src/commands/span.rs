// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Span command - first and last meeting across all active classrooms

use super::input::load_selections;
use crate::calendar::{self, CalendarSpan};
use crate::expand::expand_selections;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the span command
pub fn run(file: &Path, json: bool) -> Result<()> {
    let selections = load_selections(file)?;
    let occurrences = expand_selections(&selections)
        .with_context(|| format!("Failed to expand {}", file.display()))?;

    let Some(span) = calendar::span(&occurrences) else {
        println!("No occurrences. Are any classrooms active?");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&span)?);
    } else {
        print!("{}", render(&span));
    }
    Ok(())
}

fn render(span: &CalendarSpan) -> String {
    format!(
        "First: {}\nLast:  {}\n",
        span.first_start.format("%a %Y-%m-%d %H:%M"),
        span.last_end.format("%a %Y-%m-%d %H:%M")
    )
}
