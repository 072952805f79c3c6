// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Conflict detection between classrooms
//!
//! Two occurrences overlap when `a.start < b.end && b.start < a.end`; a
//! meeting that ends exactly when another begins is not a conflict. Only
//! occurrences of different classrooms are compared.

use crate::error::Result;
use crate::expand::expand_selections;
use crate::types::{ConflictResult, Occurrence, Selection};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// Strict time overlap of two occurrences
#[must_use]
pub fn overlaps(a: &Occurrence, b: &Occurrence) -> bool {
    a.start < b.end && b.start < a.end
}

/// Every pair of overlapping occurrences from different classrooms
///
/// Pairs are returned as `(earlier, later)` by start time. Occurrences are
/// swept in start order, keeping only those still running, so the cost is
/// proportional to the number of concurrently open meetings rather than to
/// all pairs.
#[must_use]
pub fn find_overlaps(occurrences: &[Occurrence]) -> Vec<(&Occurrence, &Occurrence)> {
    overlapping_indices(occurrences)
        .into_iter()
        .map(|(i, j)| (&occurrences[i], &occurrences[j]))
        .collect()
}

/// Same sweep as [`find_overlaps`], reporting positions in `occurrences`
#[must_use]
pub fn overlapping_indices(occurrences: &[Occurrence]) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..occurrences.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&occurrences[a], &occurrences[b]);
        a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end))
    });

    let mut open: Vec<usize> = Vec::new();
    let mut pairs = Vec::new();

    for current in order {
        let now = &occurrences[current];
        open.retain(|&o| occurrences[o].end > now.start);
        for &earlier in &open {
            let before = &occurrences[earlier];
            if before.reg_id != now.reg_id && overlaps(before, now) {
                pairs.push((earlier, current));
            }
        }
        open.push(current);
    }

    pairs
}

/// Reduce overlapping occurrences to unordered classroom pairs
///
/// `order` lists classroom ids by precedence; each pair is oriented and
/// sorted by it. Classrooms missing from `order` sort last, by id.
#[must_use]
pub fn conflicts_from_occurrences(occurrences: &[Occurrence], order: &[&str]) -> Vec<ConflictResult> {
    let mut rank: HashMap<&str, usize> = HashMap::new();
    for (idx, reg_id) in order.iter().enumerate() {
        rank.entry(*reg_id).or_insert(idx);
    }
    let key = |reg_id: &str| (rank.get(reg_id).copied().unwrap_or(usize::MAX), reg_id.to_string());

    let mut pairs = BTreeSet::new();
    for (a, b) in find_overlaps(occurrences) {
        let (ka, kb) = (key(a.reg_id.as_str()), key(b.reg_id.as_str()));
        if ka <= kb {
            pairs.insert((ka, kb));
        } else {
            pairs.insert((kb, ka));
        }
    }

    pairs
        .into_iter()
        .map(|((_, reg_id1), (_, reg_id2))| ConflictResult { reg_id1, reg_id2 })
        .collect()
}

/// Classroom pairs with at least one overlapping occurrence
///
/// Returns an empty list when fewer than two selections are active.
pub fn detect_conflicts(selections: &[Selection]) -> Result<Vec<ConflictResult>> {
    let active: Vec<&Selection> = selections.iter().filter(|s| s.active).collect();
    if active.len() < 2 {
        debug!(active = active.len(), "fewer than two active classrooms, skipping detection");
        return Ok(Vec::new());
    }

    let occurrences = expand_selections(selections)?;
    let order: Vec<&str> = active.iter().map(|s| s.meta.reg_id.as_str()).collect();
    let conflicts = conflicts_from_occurrences(&occurrences, &order);

    info!(
        classrooms = active.len(),
        occurrences = occurrences.len(),
        conflicts = conflicts.len(),
        "conflict detection finished"
    );
    Ok(conflicts)
}
