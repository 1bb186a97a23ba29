//! Error types for table loading, access, and serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, reading, or writing a [`Table`](crate::Table).
#[derive(Debug, Error)]
pub enum TableError {
    // === File Read Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// More leading lines were requested to be skipped than the file holds.
    #[error("cannot skip {skip} lines in {path}: file has only {available}")]
    SkipExceedsFile {
        path: PathBuf,
        skip: usize,
        available: usize,
    },

    /// No header line follows the skipped lines.
    #[error("missing header line in {path}")]
    MissingHeader { path: PathBuf },

    /// A data line does not have one field per column.
    #[error("line {line}: expected {expected} fields, found {found}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A table needs at least one column.
    #[error("table has no columns")]
    NoColumns,

    // === Parse Errors ===
    /// A field is not a valid floating-point number.
    #[error("line {line}, column {column}: '{value}' is not a number")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    // === Index Errors ===
    /// Row index past the end of the table.
    #[error("row {index} out of range (table has {rows} rows)")]
    RowOutOfRange { index: usize, rows: usize },

    /// Column index past the end of the table.
    #[error("column {index} out of range (table has {columns} columns)")]
    ColumnOutOfRange { index: usize, columns: usize },

    /// Inclusive range with its start after its end.
    #[error("invalid range {start}..={end}")]
    InvalidRange { start: usize, end: usize },

    // === Key Errors ===
    /// No column carries the requested name.
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    // === Dimension Errors ===
    /// Supplied sequence length does not match the table shape.
    #[error("expected {expected} values, got {found}")]
    Dimension { expected: usize, found: usize },

    // === Write Errors ===
    /// Failed to write the serialized table.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TableError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");

        let err = TableError::Parse {
            line: 3,
            column: 1,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "line 3, column 1: 'abc' is not a number");
    }

    #[test]
    fn test_error_source_is_io() {
        use std::error::Error as _;

        let err = TableError::Write {
            path: PathBuf::from("out.csv"),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to write out.csv"));
    }
}
