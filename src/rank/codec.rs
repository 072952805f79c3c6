// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Fixed-length base-62 codec underlying rank ordering

use crate::error::{Error, Result};

/// Digit alphabet in ascending digit order
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number base
pub const BASE: u128 = 62;

/// Zero digit used for padding
pub const ZERO: char = '0';

/// Longest rank that fits in `u128` arithmetic (62^21 < 2^128 < 62^22)
pub const MAX_LENGTH: usize = 21;

/// Index of `c` in the alphabet
pub fn char_to_index(c: char) -> Result<u8> {
    let idx = match c {
        '0'..='9' => c as u32 - '0' as u32,
        'a'..='z' => c as u32 - 'a' as u32 + 10,
        'A'..='Z' => c as u32 - 'A' as u32 + 36,
        _ => return Err(Error::InvalidCharacter(c)),
    };
    // idx < 62 by construction
    u8::try_from(idx).map_err(|_| Error::InvalidCharacter(c))
}

/// Character for digit `i`, `None` outside `0..=61`
#[must_use]
pub fn index_to_char(i: u8) -> Option<char> {
    ALPHABET.get(usize::from(i)).map(|&b| char::from(b))
}

/// Right-pad `s` with the zero digit up to `length`; never truncates
#[must_use]
pub fn pad_right(s: &str, length: usize) -> String {
    let mut out = String::with_capacity(length.max(s.len()));
    out.push_str(s);
    while out.chars().count() < length {
        out.push(ZERO);
    }
    out
}

/// Decode `s` after padding it to `length`
pub fn string_to_number(s: &str, length: usize) -> Result<u128> {
    let padded = pad_right(s, length);
    let digits = padded.chars().count();
    if digits > MAX_LENGTH {
        return Err(Error::RankTooLong(digits));
    }

    let mut value: u128 = 0;
    for c in padded.chars() {
        value = value * BASE + u128::from(char_to_index(c)?);
    }
    Ok(value)
}

/// Encode `n` as exactly `length` digits, most significant first
pub fn number_to_string(n: u128, length: usize) -> Result<String> {
    if length > MAX_LENGTH {
        return Err(Error::RankTooLong(length));
    }
    if n >= BASE.pow(u32::try_from(length).map_err(|_| Error::RankTooLong(length))?) {
        return Err(Error::ValueTooLarge { value: n, length });
    }

    let mut digits = vec![ZERO; length];
    let mut rest = n;
    for slot in digits.iter_mut().rev() {
        // rest % BASE < 62 = ALPHABET.len()
        *slot = char::from(ALPHABET[(rest % BASE) as usize]);
        rest /= BASE;
    }
    Ok(digits.into_iter().collect())
}

/// Largest value representable with `length` digits
pub fn max_value(length: usize) -> Result<u128> {
    if length > MAX_LENGTH {
        return Err(Error::RankTooLong(length));
    }
    let exp = u32::try_from(length).map_err(|_| Error::RankTooLong(length))?;
    Ok(BASE.pow(exp) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_index_bounds() {
        assert_eq!(char_to_index('0').unwrap(), 0);
        assert_eq!(char_to_index('9').unwrap(), 9);
        assert_eq!(char_to_index('a').unwrap(), 10);
        assert_eq!(char_to_index('h').unwrap(), 17);
        assert_eq!(char_to_index('z').unwrap(), 35);
        assert_eq!(char_to_index('A').unwrap(), 36);
        assert_eq!(char_to_index('Z').unwrap(), 61);
    }

    #[test]
    fn test_char_index_rejects_foreign() {
        assert_eq!(char_to_index('-'), Err(Error::InvalidCharacter('-')));
        assert_eq!(char_to_index('é'), Err(Error::InvalidCharacter('é')));
        assert_eq!(index_to_char(62), None);
    }

    #[test]
    fn test_index_to_char_inverse() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            let i = u8::try_from(i).unwrap();
            assert_eq!(index_to_char(i), Some(char::from(b)));
            assert_eq!(char_to_index(char::from(b)).unwrap(), i);
        }
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("h", 6), "h00000");
        assert_eq!(pad_right("", 3), "000");
        assert_eq!(pad_right("abcdefg", 6), "abcdefg");
    }

    #[test]
    fn test_string_to_number() {
        assert_eq!(string_to_number("000000", 6).unwrap(), 0);
        assert_eq!(string_to_number("00000a", 6).unwrap(), 10);
        assert_eq!(string_to_number("000010", 6).unwrap(), 62);
        // "1" pads to "100000"
        assert_eq!(string_to_number("1", 6).unwrap(), 62u128.pow(5));
        assert_eq!(string_to_number("ZZZZZZ", 6).unwrap(), 62u128.pow(6) - 1);
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(0, 6).unwrap(), "000000");
        assert_eq!(number_to_string(61, 6).unwrap(), "00000Z");
        assert_eq!(number_to_string(62, 6).unwrap(), "000010");
        assert_eq!(
            number_to_string(62u128.pow(6), 6),
            Err(Error::ValueTooLarge { value: 62u128.pow(6), length: 6 })
        );
    }

    #[test]
    fn test_number_to_string_every_digit() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            let encoded = number_to_string(i as u128, 1).unwrap();
            assert_eq!(encoded, char::from(b).to_string());
            assert_eq!(string_to_number(&encoded, 1).unwrap(), i as u128);
        }
        assert_eq!(number_to_string(62 * 36 + 41, 2).unwrap(), "AF");
    }

    #[test]
    fn test_length_limit() {
        let long = "1".repeat(MAX_LENGTH + 1);
        assert_eq!(string_to_number(&long, 6), Err(Error::RankTooLong(MAX_LENGTH + 1)));
        assert!(string_to_number(&"Z".repeat(MAX_LENGTH), 6).is_ok());
        assert_eq!(max_value(6).unwrap(), 62u128.pow(6) - 1);
    }
}
