// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Selection file loading shared by the schedule commands

use crate::types::{Selection, SelectionFile};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read selections from a JSON file, or TOML when the extension is `.toml`
pub fn load_selections(path: &Path) -> Result<Vec<Selection>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let file: SelectionFile = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };

    debug!(
        path = %path.display(),
        selections = file.selections.len(),
        "loaded selections"
    );
    Ok(file.selections)
}

/// Refuse inputs with more active classrooms than configured
pub fn check_active_limit(selections: &[Selection], limit: usize) -> Result<()> {
    let active = selections.iter().filter(|s| s.active).count();
    if active > limit {
        anyhow::bail!(
            "{} active classrooms exceeds the limit of {} (max_active_classrooms)",
            active,
            limit
        );
    }
    Ok(())
}
