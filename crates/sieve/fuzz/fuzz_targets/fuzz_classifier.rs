//! Fuzz target for cell normalization and detection.
//!
//! This fuzzer tests that:
//! 1. Normalization is idempotent on any text
//! 2. Detection is deterministic and agrees with the quick check
//! 3. Normalized text never contains a cleanable character

#![no_main]

use libfuzzer_sys::fuzz_target;
use sieve::{CLEANABLE, detect_issues, has_uncleanable_chars, normalize};

fuzz_target!(|data: &[u8]| {
    let lossy = String::from_utf8_lossy(data);
    let value = lossy.as_ref();

    let once = normalize(value);
    assert_eq!(normalize(&once), once);
    for rule in CLEANABLE {
        assert!(!once.contains(rule.source));
    }

    let issues = detect_issues(value);
    assert_eq!(issues, detect_issues(value));
    assert_eq!(has_uncleanable_chars(value), !issues.is_empty());
});
