// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Rank command - LexoRank generation from the command line

use crate::rank;
use anyhow::{Context, Result};

/// Run rank command
pub fn run(action: &str, values: &[String], length: usize) -> Result<()> {
    for line in ranks_for(action, values, length)? {
        println!("{line}");
    }
    Ok(())
}

/// Ranks produced by `action`, one per output line
pub fn ranks_for(action: &str, values: &[String], length: usize) -> Result<Vec<String>> {
    let value = |idx: usize, what: &str| {
        values
            .get(idx)
            .map(String::as_str)
            .ok_or_else(|| anyhow::anyhow!("{} is required for 'rank {}'", what, action))
    };

    let out = match action {
        "init" | "initial" => vec![rank::gen_initial_rank()],

        "next" => {
            let current = value(0, "Rank")?;
            vec![rank::gen_next(current).with_context(|| format!("No rank after {current}"))?]
        }

        "prev" | "previous" => {
            let current = value(0, "Rank")?;
            vec![rank::gen_prev(current).with_context(|| format!("No rank before {current}"))?]
        }

        "between" => {
            let lower = value(0, "Lower rank")?;
            let upper = value(1, "Upper rank")?;
            vec![rank::between(lower, upper)?]
        }

        "spread" => {
            let count: usize = value(0, "Count")?
                .parse()
                .context("Count must be a non-negative integer")?;
            rank::spread(count, length)?
        }

        other => {
            anyhow::bail!("Unknown rank action: {}. Valid: init, next, prev, between, spread", other);
        }
    };

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_actions() {
        assert_eq!(ranks_for("init", &[], 6).unwrap(), vec!["h00000"]);
        assert_eq!(ranks_for("next", &args(&["h00000"]), 6).unwrap(), vec!["h00001"]);
        assert_eq!(ranks_for("previous", &args(&["h00001"]), 6).unwrap(), vec!["h00000"]);
        assert_eq!(ranks_for("between", &args(&["000000", "000002"]), 6).unwrap(), vec!["000001"]);
        assert_eq!(ranks_for("spread", &args(&["3"]), 4).unwrap().len(), 3);
    }

    #[test]
    fn test_missing_argument() {
        let err = ranks_for("between", &args(&["000000"]), 6).unwrap_err();
        assert!(err.to_string().contains("Upper rank is required"));
    }

    #[test]
    fn test_unknown_action() {
        assert!(ranks_for("shuffle", &[], 6).is_err());
    }
}
