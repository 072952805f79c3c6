// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for schedule expansion and rank generation

use thiserror::Error;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the scheduling core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A time or date string does not match its format
    #[error("invalid {field} `{value}`: expected {expected}")]
    Parse {
        /// Which input field was being read
        field: &'static str,
        /// The offending text
        value: String,
        /// Human-readable format description
        expected: &'static str,
    },

    /// A session whose end is not after its start
    #[error("session ending at {end} does not start before it ({start})")]
    EmptySession {
        /// Parsed start
        start: String,
        /// Parsed end
        end: String,
    },

    /// No rank strictly between two neighbours at the current length
    #[error("cannot generate rank between too-close values `{lower}` and `{upper}`")]
    InvalidRange {
        /// Lower neighbour
        lower: String,
        /// Upper neighbour
        upper: String,
    },

    /// Rank contains a character outside the base-62 alphabet
    #[error("invalid rank character `{0}`")]
    InvalidCharacter(char),

    /// Rank is already the largest value for its length
    #[error("rank `{0}` is already the maximum for its length")]
    RankOverflow(String),

    /// Rank is already the all-zero value
    #[error("rank `{0}` is already the minimum value")]
    RankUnderflow(String),

    /// Number does not fit in the requested number of digits
    #[error("value {value} does not fit in {length} base-62 digits")]
    ValueTooLarge {
        /// Value to encode
        value: u128,
        /// Requested length
        length: usize,
    },

    /// Rank longer than the codec can represent
    #[error("rank length {0} exceeds the supported maximum of {max}", max = crate::rank::codec::MAX_LENGTH)]
    RankTooLong(usize),
}

impl Error {
    pub(crate) fn parse(field: &'static str, value: &str, expected: &'static str) -> Self {
        Self::Parse {
            field,
            value: value.to_string(),
            expected,
        }
    }
}
