//! CSV/TSV parser with decoding and delimiter detection.

use std::borrow::Cow;
use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SieveError};
use super::source::{DataTable, SourceMetadata};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Non-blank lines sampled for delimiter detection.
const SNIFF_LINES: usize = 10;

/// Text encoding of the raw input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// Strict UTF-8. Invalid sequences are an input error.
    #[default]
    Utf8,
    /// ISO-8859-1. Every byte maps to U+0000..U+00FF, so single-byte
    /// mainframe artifacts such as 0x85 stay visible to the classifier.
    Latin1,
}

impl TextEncoding {
    /// Get the canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(format!("Unknown encoding: {}. Use utf-8 or latin-1.", s)),
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the input has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
    /// Encoding of the raw bytes.
    pub encoding: TextEncoding,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: Some(b','),
            has_header: true,
            max_rows: None,
            quote: b'"',
            encoding: TextEncoding::Utf8,
        }
    }
}

impl ParserConfig {
    /// Reject settings the CSV reader cannot honor.
    pub fn validate(&self) -> Result<()> {
        if let Some(delimiter) = self.delimiter {
            if matches!(delimiter, b'\n' | b'\r') || !delimiter.is_ascii() {
                return Err(SieveError::Config(format!(
                    "Delimiter must be a single ASCII character other than a line break, got {:#04x}",
                    delimiter
                )));
            }
            if delimiter == self.quote {
                return Err(SieveError::Config(
                    "Delimiter and quote character must differ".to_string(),
                ));
            }
        }
        if self.max_rows == Some(0) {
            return Err(SieveError::Config("max_rows must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Parses delimited tabular data.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| SieveError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (table, metadata) = self.parse_named(file, &contents)?;
        Ok((table, metadata.with_path(path.to_path_buf())))
    }

    /// Parse an in-memory buffer that came from `name`.
    pub fn parse_named(
        &self,
        name: impl Into<String>,
        contents: &[u8],
    ) -> Result<(DataTable, SourceMetadata)> {
        let table = self.parse_bytes(contents)?;

        let format = match table.delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        };

        let metadata = SourceMetadata::new(
            name,
            contents,
            format,
            self.config.encoding.label(),
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Decode and parse a raw buffer.
    ///
    /// Fails before producing any rows when the buffer cannot be decoded or
    /// its structure is broken.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<DataTable> {
        self.config.validate()?;
        let text = decode(bytes, self.config.encoding)?;

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&text, self.config.quote)?,
        };

        self.parse_text(&text, delimiter)
    }

    /// Parse decoded text.
    fn parse_text(&self, text: &str, delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records = reader.records();

        let headers: Vec<String> = if self.config.has_header {
            match records.next() {
                Some(record) => dedupe_headers(record?.iter().map(|s| s.to_string()).collect()),
                None => {
                    return Err(SieveError::EmptyData(
                        "No columns to parse from input".to_string(),
                    ));
                }
            }
        } else {
            Vec::new()
        };

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut expected_cols = headers.len();

        for result in records {
            if let Some(max) = self.config.max_rows {
                if rows.len() >= max {
                    break;
                }
            }

            let record = result?;
            let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

            // Without a header the first record fixes the width
            if expected_cols == 0 {
                expected_cols = record.len();
            }

            if record.len() > expected_cols {
                return Err(SieveError::Parse {
                    row: line,
                    column: expected_cols + 1,
                    message: format!(
                        "expected {} fields, found {}",
                        expected_cols,
                        record.len()
                    ),
                });
            }

            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            // Pad row if needed
            row.resize(expected_cols, String::new());

            rows.push(row);
        }

        let headers = if self.config.has_header {
            headers
        } else {
            (0..expected_cols)
                .map(|i| format!("column_{}", i + 1))
                .collect()
        };

        if headers.is_empty() {
            return Err(SieveError::EmptyData("No columns found".to_string()));
        }

        debug!(
            rows = rows.len(),
            columns = headers.len(),
            delimiter = %(delimiter as char).escape_default(),
            "parsed table"
        );

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode raw bytes into text.
fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<Cow<'_, str>> {
    let text: Cow<'_, str> = match encoding {
        TextEncoding::Utf8 => {
            let text = std::str::from_utf8(bytes).map_err(|e| SieveError::Decode {
                offset: e.valid_up_to(),
                message: e.to_string(),
            })?;
            Cow::Borrowed(text)
        }
        TextEncoding::Latin1 => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
    };

    // A leading byte-order mark belongs to the file, not to the first header
    match text {
        Cow::Borrowed(s) => Ok(Cow::Borrowed(s.strip_prefix('\u{FEFF}').unwrap_or(s))),
        Cow::Owned(s) => match s.strip_prefix('\u{FEFF}') {
            Some(rest) => Ok(Cow::Owned(rest.to_string())),
            None => Ok(Cow::Owned(s)),
        },
    }
}

/// Make header names unique by suffixing repeats with `.1`, `.2`, ...
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(headers.len());

    for header in headers {
        let mut candidate = header.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", header, suffix);
            suffix += 1;
        }
        seen.push(candidate);
    }

    seen
}

/// Pick the candidate that splits the leading lines most consistently.
///
/// A candidate must occur in the header line. Candidates are ranked by how
/// many sampled lines have the header's field count, then by that count.
/// Remaining ties go to the earlier entry of `DELIMITERS`.
fn detect_delimiter(text: &str, quote: u8) -> Result<u8> {
    let sample: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();

    let Some(header) = sample.first() else {
        return Err(SieveError::EmptyData("No lines to analyze".to_string()));
    };

    let best = DELIMITERS
        .iter()
        .enumerate()
        .filter_map(|(position, &delim)| {
            let expected = count_unquoted(header, delim, quote);
            if expected == 0 {
                return None;
            }
            let agreeing = sample
                .iter()
                .filter(|line| count_unquoted(line, delim, quote) == expected)
                .count();
            Some(((agreeing, expected, Reverse(position)), delim))
        })
        .max_by_key(|(rank, _)| *rank)
        .map(|(_, delim)| delim);

    Ok(best.unwrap_or(b','))
}

/// Count occurrences of `delimiter` outside `quote`d sections of a line.
fn count_unquoted(line: &str, delimiter: u8, quote: u8) -> usize {
    let mut quoted = false;
    line.bytes()
        .filter(|&byte| {
            if byte == quote {
                quoted = !quoted;
            }
            !quoted && byte == delimiter
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = "a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data, b'"').unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = "a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data, b'"').unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted_delimiters() {
        let data = "name;note\n'a;b';1\n'c;d';2";
        assert_eq!(count_unquoted("'a;b';1", b';', b'\''), 1);
        assert_eq!(detect_delimiter(data, b'\'').unwrap(), b';');
    }

    #[test]
    fn test_detect_delimiter_prefers_consistent_field_count() {
        let data = "a;b,c\n1;2,3\n4;5\n6;7";
        assert_eq!(detect_delimiter(data, b'"').unwrap(), b';');
    }

    #[test]
    fn test_auto_detection_uses_configured_quote() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: None,
            quote: b'\'',
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"id|label\n1|'x|y'\n2|'z|w'\n").unwrap();
        assert_eq!(table.delimiter, b'|');
        assert_eq!(table.get(0, 1), Some("x|y"));
    }

    #[test]
    fn test_parse_csv() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b"name,age,city\nAlice,30,NYC\nBob,25,LA").unwrap();

        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, 0), Some("Alice"));
        assert_eq!(table.get(1, 1), Some("25"));
        assert_eq!(table.column_types[1], ColumnType::Integer);
    }

    #[test]
    fn test_parse_auto_detects_tab() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: None,
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"a\tb\n1\t2\n").unwrap();
        assert_eq!(table.delimiter, b'\t');
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let table = Parser::new().parse_bytes(b"id,name\n").unwrap();
        assert_eq!(table.column_count(), 2);
        assert!(table.is_empty());
        assert_eq!(table.column_types, vec![ColumnType::String, ColumnType::String]);
    }

    #[test]
    fn test_empty_input_is_error() {
        let err = Parser::new().parse_bytes(b"").unwrap_err();
        assert!(matches!(err, SieveError::EmptyData(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = Parser::new().parse_bytes(b"name\nab\xffcd\n").unwrap_err();
        match err {
            SieveError::Decode { offset, .. } => assert_eq!(offset, 7),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_latin1_keeps_high_bytes() {
        let parser = Parser::with_config(ParserConfig {
            encoding: TextEncoding::Latin1,
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"name\nab\x85cd\n").unwrap();
        assert_eq!(table.get(0, 0), Some("ab\u{85}cd"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = Parser::new().parse_bytes(b"a,b,c\n1,2\n").unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn test_long_rows_are_parse_errors() {
        let err = Parser::new().parse_bytes(b"a,b\n1,2\n3,4,5\n").unwrap_err();
        match err {
            SieveError::Parse { row, column, .. } => {
                assert_eq!(row, 3);
                assert_eq!(column, 3);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_leading_bom_is_stripped() {
        let table = Parser::new().parse_bytes("\u{FEFF}id,name\n1,x\n".as_bytes()).unwrap();
        assert_eq!(table.headers[0], "id");
    }

    #[test]
    fn test_duplicate_headers_are_renamed() {
        let table = Parser::new().parse_bytes(b"a,a,b,a\n1,2,3,4\n").unwrap();
        assert_eq!(table.headers, vec!["a", "a.1", "b", "a.2"]);
    }

    #[test]
    fn test_quoted_fields_keep_control_characters() {
        let table = Parser::new()
            .parse_bytes("name\n\"ab\u{0}cd\"\n".as_bytes())
            .unwrap();
        assert_eq!(table.get(0, 0), Some("ab\u{0}cd"));
    }

    #[test]
    fn test_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"a\n1\n2\n3\n").unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_no_header_generates_names() {
        let parser = Parser::with_config(ParserConfig {
            has_header: false,
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"x,y\nz,w\n").unwrap();
        assert_eq!(table.headers, vec!["column_1", "column_2"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_parse_named_metadata() {
        let (table, metadata) = Parser::new()
            .parse_named("customers.csv", b"id,name\n1,Alice\n")
            .unwrap();
        assert_eq!(metadata.file, "customers.csv");
        assert_eq!(metadata.format, "csv");
        assert_eq!(metadata.encoding, "utf-8");
        assert_eq!(metadata.row_count, table.row_count());
        assert_eq!(metadata.size_bytes, 16);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let parser = Parser::with_config(ParserConfig {
            delimiter: Some(b'"'),
            ..ParserConfig::default()
        });
        let err = parser.parse_bytes(b"a\n1\n").unwrap_err();
        assert!(matches!(err, SieveError::Config(_)));
        assert!(!err.is_input_error());

        let newline = ParserConfig {
            delimiter: Some(b'\n'),
            ..ParserConfig::default()
        };
        assert!(newline.validate().is_err());
        assert!(ParserConfig::default().validate().is_ok());
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("UTF8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("latin_1".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);
        assert!("ebcdic".parse::<TextEncoding>().is_err());
    }
}
