//! Tabular data and source metadata.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, SieveError};
use crate::schema::{ColumnType, infer_column_types};

/// Markers read as a missing value. Matched exactly, without trimming.
const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Metadata about the source data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file, when the data came from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// SHA-256 hash of the raw contents.
    pub hash: String,
    /// Size of the raw contents in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Encoding used to decode the contents.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
}

impl SourceMetadata {
    /// Create metadata for a buffer that has been parsed.
    pub fn new(
        file: impl Into<String>,
        contents: &[u8],
        format: impl Into<String>,
        encoding: impl Into<String>,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        Self {
            file: file.into(),
            path: None,
            hash: content_hash(contents),
            size_bytes: contents.len() as u64,
            format: format.into(),
            encoding: encoding.into(),
            row_count,
            column_count,
        }
    }

    /// Record the path the contents were read from.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

/// Compute the `sha256:<hex>` fingerprint of a buffer.
pub fn content_hash(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    format!("sha256:{:x}", hasher.finalize())
}

/// Represents parsed tabular data.
///
/// `row_indices[i]` is the position `rows[i]` had in the originally parsed
/// table, so rows stay traceable after the table has been split.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
    /// Original position of each row.
    pub row_indices: Vec<usize>,
    /// Inferred kind of each column.
    pub column_types: Vec<ColumnType>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table, inferring column kinds from the rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        let column_types = infer_column_types(&headers, &rows);
        let row_indices = (0..rows.len()).collect();

        Self {
            headers,
            rows,
            row_indices,
            column_types,
            delimiter,
        }
    }

    /// An empty table with the same columns, kinds and delimiter.
    pub fn empty_like(&self) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: Vec::new(),
            row_indices: Vec::new(),
            column_types: self.column_types.clone(),
            delimiter: self.delimiter,
        }
    }

    /// Append a row, keeping its original position.
    pub fn push_row(&mut self, original_index: usize, values: Vec<String>) {
        self.rows.push(values);
        self.row_indices.push(original_index);
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get all values for a column by index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| {
            row.get(index)
                .map(|s| s.as_str())
                .unwrap_or("")
        })
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.column_values(index).collect())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Original position of the row currently at `row`.
    pub fn original_index(&self, row: usize) -> Option<usize> {
        self.row_indices.get(row).copied()
    }

    /// Kind of the column at `col`.
    pub fn column_type(&self, col: usize) -> ColumnType {
        self.column_types.get(col).copied().unwrap_or_default()
    }

    /// Check whether the column at `col` holds text.
    pub fn is_textual(&self, col: usize) -> bool {
        self.column_type(col).is_textual()
    }

    /// Indices of the textual columns, in header order.
    pub fn textual_columns(&self) -> Vec<usize> {
        (0..self.column_count())
            .filter(|&col| self.is_textual(col))
            .collect()
    }

    /// Check if a value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        value.is_empty() || NULL_MARKERS.contains(&value)
    }

    /// Serialize the table back to delimited text.
    ///
    /// Writes the header followed by every row in order, without an index
    /// column. Missing values are written as empty fields.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        self.write_csv().map_err(SieveError::Write)
    }

    fn write_csv(&self) -> csv::Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|value| {
                if Self::is_null_value(value) {
                    ""
                } else {
                    value.as_str()
                }
            }))?;
        }

        writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataTable {
        DataTable::new(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec!["1".to_string(), "Alice".to_string()],
                vec!["2".to_string(), "NA".to_string()],
            ],
            b',',
        )
    }

    #[test]
    fn test_new_assigns_original_indices() {
        let table = sample_table();
        assert_eq!(table.row_indices, vec![0, 1]);
        assert_eq!(table.column_types, vec![ColumnType::Integer, ColumnType::String]);
        assert_eq!(table.textual_columns(), vec![1]);
    }

    #[test]
    fn test_push_row_keeps_index() {
        let table = sample_table();
        let mut subset = table.empty_like();
        subset.push_row(1, table.rows[1].clone());

        assert_eq!(subset.row_count(), 1);
        assert_eq!(subset.original_index(0), Some(1));
        assert_eq!(subset.column_types, table.column_types);
    }

    #[test]
    fn test_is_null_value() {
        assert!(DataTable::is_null_value(""));
        assert!(DataTable::is_null_value("NA"));
        assert!(DataTable::is_null_value("N/A"));
        assert!(DataTable::is_null_value("null"));
        assert!(DataTable::is_null_value("NULL"));
        assert!(DataTable::is_null_value("NaN"));
        assert!(!DataTable::is_null_value("value"));
        assert!(!DataTable::is_null_value("0"));
        assert!(!DataTable::is_null_value(" "));
        assert!(!DataTable::is_null_value("."));
    }

    #[test]
    fn test_to_csv_bytes_writes_missing_as_empty() {
        let table = sample_table();
        let csv = String::from_utf8(table.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(csv, "id,name\n1,Alice\n2,\n");
    }

    #[test]
    fn test_to_csv_bytes_quotes_delimiters() {
        let table = DataTable::new(
            vec!["name".to_string()],
            vec![vec!["Smith, John".to_string()]],
            b',',
        );
        let csv = String::from_utf8(table.to_csv_bytes().unwrap()).unwrap();
        assert_eq!(csv, "name\n\"Smith, John\"\n");
    }

    #[test]
    fn test_content_hash_format() {
        let hash = content_hash(b"a,b\n1,2\n");
        assert!(hash.starts_with("sha256:"));
        assert_eq!(hash.len(), "sha256:".len() + 64);
    }
}
