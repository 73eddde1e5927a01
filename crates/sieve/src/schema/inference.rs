//! Per-column value kind inference.

use crate::input::DataTable;

use super::types::ColumnType;

/// Spellings read as booleans. Anything else (yes/no, 1/0) stays text or number.
const BOOLEAN_LITERALS: &[&str] = &["true", "True", "TRUE", "false", "False", "FALSE"];

/// Infer the kind of every column of the table.
///
/// Without any data rows every column is text: there is nothing that could
/// make it numeric, and an empty column is trivially free of issues.
pub fn infer_column_types(headers: &[String], rows: &[Vec<String>]) -> Vec<ColumnType> {
    if rows.is_empty() {
        return vec![ColumnType::String; headers.len()];
    }

    (0..headers.len())
        .map(|index| {
            infer_column_type(
                rows.iter()
                    .map(|row| row.get(index).map(|s| s.as_str()).unwrap_or("")),
            )
        })
        .collect()
}

/// Infer the kind shared by a sequence of raw values.
///
/// Missing values are ignored. A column is numeric or boolean only when every
/// non-missing value is; a single free-text value makes the whole column text.
pub fn infer_column_type<'a>(values: impl IntoIterator<Item = &'a str>) -> ColumnType {
    let mut kind = ColumnType::Unknown;

    for value in values {
        if DataTable::is_null_value(value) {
            continue;
        }

        kind = kind.merge(detect_value_type(value));
        if kind == ColumnType::String {
            break;
        }
    }

    kind
}

/// Detect the type of a single value.
fn detect_value_type(value: &str) -> ColumnType {
    if BOOLEAN_LITERALS.contains(&value) {
        return ColumnType::Boolean;
    }

    // Only blanks are padding. Control characters and NEL are Unicode
    // whitespace too, but they must keep the column textual so they get checked.
    let trimmed = value.trim_matches(|c| c == ' ' || c == '\t');

    if trimmed.parse::<i64>().is_ok() {
        return ColumnType::Integer;
    }

    if trimmed.parse::<f64>().is_ok() {
        return ColumnType::Float;
    }

    ColumnType::String
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_column() {
        assert_eq!(infer_column_type(["1", "2", "30"]), ColumnType::Integer);
    }

    #[test]
    fn test_integer_with_missing_values() {
        assert_eq!(infer_column_type(["1", "", "NA", "4"]), ColumnType::Integer);
    }

    #[test]
    fn test_float_promotion() {
        assert_eq!(infer_column_type(["1", "2.5", "3"]), ColumnType::Float);
    }

    #[test]
    fn test_boolean_column() {
        assert_eq!(infer_column_type(["True", "false", "TRUE"]), ColumnType::Boolean);
    }

    #[test]
    fn test_padded_numbers() {
        assert_eq!(infer_column_type([" 1", "2\t"]), ColumnType::Integer);
    }

    #[test]
    fn test_control_characters_keep_column_textual() {
        assert_eq!(infer_column_type(["1", "2\u{85}"]), ColumnType::String);
        assert_eq!(infer_column_type(["1", "\u{1F}3"]), ColumnType::String);
    }

    #[test]
    fn test_yes_no_is_text() {
        assert_eq!(infer_column_type(["yes", "no"]), ColumnType::String);
    }

    #[test]
    fn test_single_text_value_makes_string() {
        assert_eq!(infer_column_type(["1", "2", "three"]), ColumnType::String);
    }

    #[test]
    fn test_all_missing_is_unknown() {
        assert_eq!(infer_column_type(["", "NA", "null"]), ColumnType::Unknown);
    }

    #[test]
    fn test_control_character_value_is_string() {
        assert_eq!(infer_column_type(["12", "1\u{0}2"]), ColumnType::String);
    }

    #[test]
    fn test_header_only_columns_are_text() {
        let headers = vec!["id".to_string(), "name".to_string()];
        assert_eq!(
            infer_column_types(&headers, &[]),
            vec![ColumnType::String, ColumnType::String]
        );
    }

    #[test]
    fn test_infer_column_types_per_column() {
        let headers = vec!["id".to_string(), "name".to_string()];
        let rows = vec![
            vec!["1".to_string(), "Alice".to_string()],
            vec!["2".to_string(), "Bob".to_string()],
        ];
        assert_eq!(
            infer_column_types(&headers, &rows),
            vec![ColumnType::Integer, ColumnType::String]
        );
    }
}
