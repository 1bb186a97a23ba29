//! Line splitting and field conversion shared by the reader and writer.

use crate::error::{Result, TableError};

/// Trailing marker appended to every serialized data line.
pub const SENTINEL: char = '#';

/// Field delimiter.
pub(crate) const DELIMITER: char = ',';

/// Normalizes a header value by trimming whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim().to_string()
}

/// Splits a header line into column names.
pub fn parse_header_line(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(normalize_header).collect()
}

/// Parses one data field, dropping a single trailing sentinel.
///
/// `line` and `column` are only used for error reporting.
pub fn parse_field(raw: &str, line: usize, column: usize) -> Result<f64> {
    let trimmed = raw.trim();
    let text = trimmed.strip_suffix(SENTINEL).unwrap_or(trimmed);
    text.trim().parse::<f64>().map_err(|_| TableError::Parse {
        line,
        column,
        value: raw.to_string(),
    })
}

/// Parses a comma-separated data line into exactly `width` numbers.
pub fn parse_data_line(raw: &str, width: usize, line: usize) -> Result<Vec<f64>> {
    let fields: Vec<&str> = raw.split(DELIMITER).collect();
    if fields.len() != width {
        return Err(TableError::RowWidth {
            line,
            expected: width,
            found: fields.len(),
        });
    }
    fields
        .iter()
        .enumerate()
        .map(|(column, field)| parse_field(field, line, column))
        .collect()
}

/// Formats a value with the shortest decimal that parses back to the same `f64`.
///
/// Integral values carry no fractional part (`1.0` becomes `1`).
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  accelX  "), "accelX");
        assert_eq!(normalize_header("time"), "time");
    }

    #[test]
    fn test_parse_header_line() {
        assert_eq!(parse_header_line("t, x ,y,z"), vec!["t", "x", "y", "z"]);
    }

    #[test]
    fn test_parse_field_strips_sentinel() {
        assert_eq!(parse_field("3.5#", 1, 0).unwrap(), 3.5);
        assert_eq!(parse_field("3.5", 1, 0).unwrap(), 3.5);
        assert_eq!(parse_field(" -2 ", 1, 0).unwrap(), -2.0);
    }

    #[test]
    fn test_parse_field_strips_one_sentinel_only() {
        let err = parse_field("3.5##", 4, 2).unwrap_err();
        assert!(matches!(
            err,
            TableError::Parse { line: 4, column: 2, ref value } if value == "3.5##"
        ));
    }

    #[test]
    fn test_parse_field_rejects_text() {
        assert!(parse_field("abc", 1, 0).is_err());
        assert!(parse_field("", 1, 0).is_err());
        assert!(parse_field("#", 1, 0).is_err());
    }

    #[test]
    fn test_parse_data_line_width() {
        assert_eq!(
            parse_data_line("5,1,2,3#", 4, 1).unwrap(),
            vec![5.0, 1.0, 2.0, 3.0]
        );
        let err = parse_data_line("5,1,2", 4, 7).unwrap_err();
        assert!(matches!(
            err,
            TableError::RowWidth {
                line: 7,
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_format_value_round_trips() {
        assert_eq!(format_value(1.0), "1");
        assert_eq!(format_value(0.1), "0.1");
        assert_eq!(format_value(-2.5), "-2.5");
        let tricky = 0.1 + 0.2;
        assert_eq!(format_value(tricky).parse::<f64>().unwrap(), tricky);
    }
}
