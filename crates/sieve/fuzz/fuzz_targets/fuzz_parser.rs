//! Fuzz target for the parser and the full processing pipeline.
//!
//! This fuzzer tests that:
//! 1. Arbitrary bytes either parse or fail with an input error, never panic
//! 2. Every parsed row lands in exactly one output table
//! 3. The clean table always serializes back to delimited text

#![no_main]

use libfuzzer_sys::fuzz_target;
use sieve::{Parser, ParserConfig, Sieve, SieveConfig, TextEncoding};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs
    if data.len() > 100_000 {
        return;
    }

    for encoding in [TextEncoding::Utf8, TextEncoding::Latin1] {
        let config = SieveConfig {
            parser: ParserConfig {
                encoding,
                ..ParserConfig::default()
            },
            ..SieveConfig::default()
        };

        match Sieve::with_config(config).process_bytes("fuzz.csv", data) {
            Ok(report) => {
                let outcome = &report.outcome;
                assert_eq!(outcome.original_row_count(), report.source.row_count);
                assert_eq!(
                    outcome.clean_row_count() + outcome.dirty_row_count(),
                    report.source.row_count
                );
                assert_eq!(outcome.problems.len(), outcome.dirty_row_count());
                let _ = report.clean_csv().unwrap();
                let _ = report.to_json_pretty().unwrap();
            }
            Err(e) => assert!(e.is_input_error(), "unexpected error: {}", e),
        }
    }

    // Delimiter auto-detection must not panic either
    let parser = Parser::with_config(ParserConfig {
        delimiter: None,
        ..ParserConfig::default()
    });
    let _ = parser.parse_bytes(data);
});
