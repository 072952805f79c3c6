// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! LexoRank generation for stable ordering of list items
//!
//! A rank is a fixed-length base-62 string. Because ranks are zero-padded,
//! comparing them digit by digit agrees with comparing their values, and
//! inserting between two neighbours takes the midpoint without renumbering
//! siblings. Digits follow the alphabet order `0-9a-zA-Z`, which is not
//! ASCII order for mixed case, so sort with [`Rank`]'s `Ord`.
//!
//! There is no automatic rebalancing. When [`between`] reports
//! [`Error::InvalidRange`] the caller must widen the rank length or
//! reassign ranks, for instance with [`spread`].

pub mod codec;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Default rank length
pub const DEFAULT_LENGTH: usize = 6;

/// Rank handed to the first item of an empty collection
pub const INITIAL_RANK: &str = "h00000";

/// A validated rank string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rank {
    text: String,
    /// Alphabet index of each character of `text`
    digits: Vec<u8>,
}

impl Rank {
    /// Validate `s` against the alphabet and length limit
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s.chars().map(codec::char_to_index).collect::<Result<Vec<u8>>>()?;
        if digits.len() > codec::MAX_LENGTH {
            return Err(Error::RankTooLong(digits.len()));
        }
        Ok(Self {
            text: s.to_string(),
            digits,
        })
    }

    /// Rank for the first item of an empty collection
    #[must_use]
    pub fn initial() -> Self {
        Self {
            text: INITIAL_RANK.to_string(),
            // 'h' = 17
            digits: vec![17, 0, 0, 0, 0, 0],
        }
    }

    /// The rank text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Working length: the rank's own length, at least [`DEFAULT_LENGTH`]
    #[must_use]
    pub fn width(&self) -> usize {
        self.digits.len().max(DEFAULT_LENGTH)
    }

    /// Decoded value at [`Rank::width`]
    pub fn value(&self) -> Result<u128> {
        codec::string_to_number(&self.text, self.width())
    }

    /// Rank one step above this one, same width
    pub fn next(&self) -> Result<Self> {
        let width = self.width();
        let value = self.value()?;
        if value >= codec::max_value(width)? {
            return Err(Error::RankOverflow(self.text.clone()));
        }
        codec::number_to_string(value + 1, width).and_then(|s| Self::parse(&s))
    }

    /// Rank one step below this one, same width
    pub fn prev(&self) -> Result<Self> {
        let width = self.width();
        let value = self.value()?;
        let Some(lower) = value.checked_sub(1) else {
            return Err(Error::RankUnderflow(self.text.clone()));
        };
        codec::number_to_string(lower, width).and_then(|s| Self::parse(&s))
    }

    /// Midpoint rank strictly between `lower` and `upper`
    pub fn between(lower: &Self, upper: &Self) -> Result<Self> {
        let width = lower.width().max(upper.width());
        let a = codec::string_to_number(&lower.text, width)?;
        let b = codec::string_to_number(&upper.text, width)?;

        // Need at least one integer strictly inside (a, b)
        if a.saturating_add(1) >= b {
            return Err(Error::InvalidRange {
                lower: lower.text.clone(),
                upper: upper.text.clone(),
            });
        }

        let mid = a + (b - a) / 2;
        codec::number_to_string(mid, width).and_then(|s| Self::parse(&s))
    }

    /// Consume into the rank text
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        let width = self.digits.len().max(other.digits.len());
        let lhs = self.digits.iter().chain(std::iter::repeat(&0)).take(width);
        let rhs = other.digits.iter().chain(std::iter::repeat(&0)).take(width);
        // equal values of different length: shorter first
        lhs.cmp(rhs).then_with(|| self.digits.len().cmp(&other.digits.len()))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rank {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.text
    }
}

/// Rank for the first item of an empty collection
#[must_use]
pub fn gen_initial_rank() -> String {
    INITIAL_RANK.to_string()
}

/// Rank immediately after `rank`
pub fn gen_next(rank: &str) -> Result<String> {
    Rank::parse(rank)?.next().map(Rank::into_string)
}

/// Rank immediately before `rank`
pub fn gen_prev(rank: &str) -> Result<String> {
    Rank::parse(rank)?.prev().map(Rank::into_string)
}

/// Rank strictly between `a` and `b`
pub fn between(a: &str, b: &str) -> Result<String> {
    Rank::between(&Rank::parse(a)?, &Rank::parse(b)?).map(Rank::into_string)
}

/// `count` evenly spaced ascending ranks of `length` digits
///
/// Values are multiples of `(max + 1) / (count + 1)`, which leaves room at
/// both ends for later inserts.
pub fn spread(count: usize, length: usize) -> Result<Vec<String>> {
    let length = length.max(1);
    let slots = codec::max_value(length)? + 1;
    let parts = count as u128 + 1;
    if parts > slots {
        return Err(Error::ValueTooLarge {
            value: parts,
            length,
        });
    }

    (1..parts)
        .map(|k| codec::number_to_string(k * (slots / parts), length))
        .collect()
}
