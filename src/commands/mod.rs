// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod conflicts;
pub mod expand;
pub mod input;
pub mod rank;
pub mod span;
pub mod term;
