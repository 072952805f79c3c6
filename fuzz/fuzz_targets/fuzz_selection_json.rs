// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use timetable::types::SelectionFile;

fuzz_target!(|data: &[u8]| {
    let Ok(file) = serde_json::from_slice::<SelectionFile>(data) else {
        return;
    };
    // Bad times and dates must come back as errors, never panics
    if let Ok(occurrences) = timetable::expand_selections(&file.selections) {
        for o in &occurrences {
            assert!(o.start < o.end);
        }
    }
    let _ = timetable::detect_conflicts(&file.selections);
});
