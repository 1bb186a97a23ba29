//! CSV file reading with a configurable block of leading lines to skip.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, TableError};
use crate::options::ReadOptions;
use crate::table::Table;

use super::line::parse_header_line;

/// Reads the whole file as UTF-8 text.
fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            TableError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TableError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Splits text into lines, accepting `\n` and `\r\n` terminators.
fn split_lines(text: &str) -> Vec<&str> {
    // Skip BOM if present
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines().collect()
}

/// Drops blank lines at the end of the input.
fn trim_trailing_blank<'a, 'b>(lines: &'a [&'b str]) -> &'a [&'b str] {
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |idx| idx + 1);
    &lines[..end]
}

/// Reads a table from `path`.
///
/// The first `options.skip_lines` lines are discarded. Without explicit
/// column names the next line is the header, otherwise data starts at once.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<Table> {
    let text = read_text(path)?;
    let lines = split_lines(&text);

    if options.skip_lines > lines.len() {
        return Err(TableError::SkipExceedsFile {
            path: path.to_path_buf(),
            skip: options.skip_lines,
            available: lines.len(),
        });
    }
    let rest = trim_trailing_blank(&lines[options.skip_lines..]);

    let (column_names, data, first_line) = match &options.column_names {
        Some(names) => (names.clone(), rest, options.skip_lines + 1),
        None => {
            let Some((header, data)) = rest.split_first() else {
                return Err(TableError::MissingHeader {
                    path: path.to_path_buf(),
                });
            };
            (parse_header_line(header), data, options.skip_lines + 2)
        }
    };

    let mut table = Table::parse_lines(data, column_names, first_line)?;
    table.set_source(path);

    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_table_with_header() {
        let file = create_temp_csv("meta\nt,x,y,z\n5,1,2,3#\n6,4,5,6#\n");
        let table = read_table(file.path(), &ReadOptions::new(1)).unwrap();

        assert_eq!(table.column_names(), ["t", "x", "y", "z"]);
        assert_eq!(table.values(), &[vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 4.0, 5.0, 6.0]]);
        assert_eq!(table.source(), Some(file.path()));
    }

    #[test]
    fn test_read_table_with_explicit_names() {
        let file = create_temp_csv("meta\nmore meta\n10,1\n12,2\n");
        let options = ReadOptions::new(2).with_column_names(["t", "v"]);
        let table = read_table(file.path(), &options).unwrap();

        assert_eq!(table.column_names(), ["t", "v"]);
        assert_eq!(table.column(0).unwrap(), vec![0.0, 2.0]);
    }

    #[test]
    fn test_read_table_crlf_and_bom() {
        let file = create_temp_csv("\u{feff}t,x\r\n1,2#\r\n3,4#\r\n\r\n");
        let table = read_table(file.path(), &ReadOptions::new(0)).unwrap();

        assert_eq!(table.column_names(), ["t", "x"]);
        assert_eq!(table.values(), &[vec![0.0, 2.0], vec![2.0, 4.0]]);
    }

    #[test]
    fn test_read_table_skip_exceeds_file() {
        let file = create_temp_csv("a\nb\n");
        let result = read_table(file.path(), &ReadOptions::new(3));

        assert!(matches!(
            result,
            Err(TableError::SkipExceedsFile {
                skip: 3,
                available: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_read_table_missing_header() {
        let file = create_temp_csv("a\nb\n");
        let result = read_table(file.path(), &ReadOptions::new(2));

        assert!(matches!(result, Err(TableError::MissingHeader { .. })));
    }

    #[test]
    fn test_read_table_reports_file_line_numbers() {
        let file = create_temp_csv("meta\nt,x\n1,2\n3,oops\n");
        let result = read_table(file.path(), &ReadOptions::new(1));

        assert!(matches!(
            result,
            Err(TableError::Parse { line: 4, column: 1, .. })
        ));
    }

    #[test]
    fn test_read_table_file_not_found() {
        let result = read_table(Path::new("/definitely/not/here.csv"), &ReadOptions::new(0));

        assert!(matches!(result, Err(TableError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_table_non_utf8_is_file_read() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"t,x\n1,\xff\xfe#\n").unwrap();
        let result = read_table(file.path(), &ReadOptions::new(0));

        assert!(matches!(
            result,
            Err(TableError::FileRead { ref source, .. }) if source.kind() == ErrorKind::InvalidData
        ));
    }

    #[test]
    fn test_read_table_directory_is_file_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = read_table(dir.path(), &ReadOptions::new(0));

        assert!(matches!(result, Err(TableError::FileRead { ref path, .. }) if path == dir.path()));
    }
}
