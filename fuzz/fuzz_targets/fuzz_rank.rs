// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use timetable::rank::Rank;

#[derive(Arbitrary, Debug)]
struct Input {
    lower: String,
    upper: String,
}

fuzz_target!(|input: Input| {
    let (Ok(a), Ok(b)) = (Rank::parse(&input.lower), Rank::parse(&input.upper)) else {
        return;
    };
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if let Ok(mid) = Rank::between(&lo, &hi) {
        assert!(lo < mid && mid < hi);
    }
    if let Ok(next) = lo.next() {
        assert!(lo < next);
    }
});
