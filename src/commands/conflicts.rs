// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Conflicts command - reports classroom pairs whose meetings overlap

use super::input::{check_active_limit, load_selections};
use crate::config::Config;
use crate::conflict::detect_conflicts;
use crate::types::{ConflictResult, Selection};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::info;

/// Run the conflicts command
pub fn run(file: &Path, json: bool, color: bool, config: &Config) -> Result<()> {
    info!("Checking conflicts in {}", file.display());

    let selections = load_selections(file)?;
    check_active_limit(&selections, config.max_active_classrooms)?;

    let conflicts = detect_conflicts(&selections)
        .with_context(|| format!("Failed to check {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conflicts)?);
    } else {
        print!("{}", render(&conflicts, &selections, color));
    }
    Ok(())
}

/// Human-readable conflict report
#[must_use]
pub fn render(conflicts: &[ConflictResult], selections: &[Selection], color: bool) -> String {
    let active = selections.iter().filter(|s| s.active).count();
    if conflicts.is_empty() {
        return format!("No conflicts among {active} active classrooms\n");
    }

    let label = |reg_id: &str| {
        let title = selections
            .iter()
            .find(|s| s.meta.reg_id == reg_id)
            .and_then(|s| s.meta.title.as_deref());
        match title {
            Some(t) => format!("{reg_id} ({t})"),
            None => reg_id.to_string(),
        }
    };

    let mut out = format!("Conflicts ({}):\n", conflicts.len());
    for conflict in conflicts {
        let line = format!("{} <-> {}", label(&conflict.reg_id1), label(&conflict.reg_id2));
        if color {
            out.push_str(&format!("  {}\n", line.red()));
        } else {
            out.push_str(&format!("  {line}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassroomMeta, TermSchedule, WeekRange};

    fn selection(reg_id: &str, title: Option<&str>) -> Selection {
        Selection {
            schedule: TermSchedule {
                weeks: WeekRange { from: 1, to: 1 },
                first_date_of_academic: "2025-01-06".into(),
                regular_sessions: vec![],
                makeup_sessions: vec![],
            },
            meta: ClassroomMeta {
                reg_id: reg_id.into(),
                course_id: "c".into(),
                title: title.map(String::from),
            },
            active: true,
        }
    }

    #[test]
    fn test_render_plain() {
        let selections = vec![selection("A", Some("Algebra")), selection("B", None), selection("C", None)];
        let conflicts = vec![
            ConflictResult { reg_id1: "A".into(), reg_id2: "B".into() },
            ConflictResult { reg_id1: "B".into(), reg_id2: "C".into() },
        ];

        insta::assert_snapshot!(render(&conflicts, &selections, false), @r"
        Conflicts (2):
          A (Algebra) <-> B
          B <-> C
        ");
    }

    #[test]
    fn test_render_none() {
        let selections = vec![selection("A", None)];
        assert_eq!(render(&[], &selections, false), "No conflicts among 1 active classrooms\n");
    }
}
