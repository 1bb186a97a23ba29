//! CSV serialization of a table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TableError};
use crate::table::Table;

use super::line::{DELIMITER, SENTINEL, format_value};

/// Builds the output records: the header, then rows from index 1 on.
///
/// The last field of each data record carries the sentinel, so a plain
/// comma join of a record yields the finished line.
pub fn records(table: &Table) -> Vec<Vec<String>> {
    let mut records = Vec::with_capacity(table.row_count().max(1));
    records.push(table.column_names().to_vec());
    for row in table.values().iter().skip(1) {
        let mut fields: Vec<String> = row.iter().copied().map(format_value).collect();
        if let Some(last) = fields.last_mut() {
            last.push(SENTINEL);
        }
        records.push(fields);
    }
    records
}

/// Renders the table as text, one `\n`-terminated line per record.
pub fn render(table: &Table) -> String {
    let separator = DELIMITER.to_string();
    let mut out = String::new();
    for record in records(table) {
        out.push_str(&record.join(separator.as_str()));
        out.push('\n');
    }
    out
}

/// Writes the table to `path`, creating or truncating the file.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let write_err = |source: std::io::Error| TableError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render(table).as_bytes())
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::debug!(
        path = %path.display(),
        rows = table.row_count().saturating_sub(1),
        "saved table"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table() -> Table {
        Table::from_values(
            vec!["t".to_string(), "x".to_string()],
            vec![vec![0.0, 1.0], vec![0.5, -2.0], vec![1.0, 3.25]],
        )
        .unwrap()
    }

    #[test]
    fn test_records_skip_first_row() {
        let records = records(&table());
        assert_eq!(
            records,
            vec![
                vec!["t".to_string(), "x".to_string()],
                vec!["0.5".to_string(), "-2#".to_string()],
                vec!["1".to_string(), "3.25#".to_string()],
            ]
        );
    }

    #[test]
    fn test_write_table_matches_string_form() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let table = table();

        write_table(&table, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, table.to_csv_string());
    }

    #[test]
    fn test_write_table_single_empty_column_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("unnamed.csv");
        let table =
            Table::from_values(vec![String::new()], vec![vec![1.0], vec![2.0]]).unwrap();

        write_table(&table, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "\n1#\n");
        assert_eq!(written, table.to_csv_string());

        let reloaded = Table::read(&path, 0).unwrap();
        assert_eq!(reloaded.column_names(), [""]);
        assert_eq!(reloaded.values(), &[vec![0.0]]);
    }

    #[test]
    fn test_write_table_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents that are longer than the table\n".repeat(4)).unwrap();

        write_table(&table(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "t,x\n0.5,-2#\n1,3.25#\n");
    }

    #[test]
    fn test_write_table_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/out.csv");

        let result = write_table(&table(), &path);
        assert!(matches!(result, Err(TableError::Write { .. })));
    }
}
