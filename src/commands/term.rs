// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Term command - default academic year and semester

use crate::academic::AcademicPeriod;
use crate::expand::parse_date;
use anyhow::Result;

/// Run the term command; `date` defaults to the local date
pub fn run(date: Option<&str>, json: bool) -> Result<()> {
    let today = match date {
        Some(d) => parse_date("date", d)?,
        None => chrono::Local::now().date_naive(),
    };
    let period = AcademicPeriod::containing(today);

    if json {
        println!("{}", serde_json::to_string_pretty(&period)?);
    } else {
        println!("{period}");
    }
    Ok(())
}
