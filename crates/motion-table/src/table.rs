//! The in-memory numeric table.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::axes::AccelAxes;
use crate::csv::{self, parse_data_line};
use crate::error::{Result, TableError};
use crate::options::ReadOptions;

/// Row-major submatrix returned by the batch accessors.
pub type Matrix = Vec<Vec<f64>>;

/// A rectangular matrix of `f64` values with named columns.
///
/// Column 0 is treated as a timestamp: every constructor rebases it so that
/// the first row holds `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableData")]
pub struct Table {
    column_names: Vec<String>,
    values: Matrix,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<PathBuf>,
}

/// Unvalidated serde form of [`Table`].
#[derive(Deserialize)]
struct TableData {
    column_names: Vec<String>,
    values: Matrix,
    #[serde(default)]
    source: Option<PathBuf>,
}

impl TryFrom<TableData> for Table {
    type Error = TableError;

    /// Checks the shape only; values are kept as serialized.
    fn try_from(data: TableData) -> Result<Self> {
        check_shape(&data.column_names, &data.values)?;
        Ok(Self {
            column_names: data.column_names,
            values: data.values,
            source: data.source,
        })
    }
}

/// At least one column, and one value per column in every row.
fn check_shape(column_names: &[String], values: &[Vec<f64>]) -> Result<()> {
    if column_names.is_empty() {
        return Err(TableError::NoColumns);
    }
    if let Some(row) = values.iter().find(|row| row.len() != column_names.len()) {
        return Err(TableError::Dimension {
            expected: column_names.len(),
            found: row.len(),
        });
    }
    Ok(())
}

impl Table {
    // === Construction ===

    /// Builds a table from text lines, parsing every line from `start_row` on.
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        column_names: Vec<String>,
        start_row: usize,
    ) -> Result<Self> {
        if start_row > lines.len() {
            return Err(TableError::RowOutOfRange {
                index: start_row,
                rows: lines.len(),
            });
        }
        Self::parse_lines(&lines[start_row..], column_names, start_row + 1)
    }

    /// Builds a table from an existing matrix.
    pub fn from_values(column_names: Vec<String>, values: Matrix) -> Result<Self> {
        check_shape(&column_names, &values)?;
        let mut table = Self {
            column_names,
            values,
            source: None,
        };
        table.rebase_timestamps();
        Ok(table)
    }

    /// Reads a table from a file, taking column names from the header line
    /// that follows the first `skip_lines` lines.
    pub fn read(path: impl AsRef<Path>, skip_lines: usize) -> Result<Self> {
        csv::read_table(path.as_ref(), &ReadOptions::new(skip_lines))
    }

    /// Reads a table from a file with explicit options.
    pub fn read_with_options(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Self> {
        csv::read_table(path.as_ref(), options)
    }

    /// Parses data lines; `first_line` is the 1-based number of `lines[0]`
    /// in its source, used in error messages.
    pub(crate) fn parse_lines<S: AsRef<str>>(
        lines: &[S],
        column_names: Vec<String>,
        first_line: usize,
    ) -> Result<Self> {
        if column_names.is_empty() {
            return Err(TableError::NoColumns);
        }
        let width = column_names.len();
        let values = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| parse_data_line(line.as_ref(), width, first_line + idx))
            .collect::<Result<Matrix>>()?;

        let mut table = Self {
            column_names,
            values,
            source: None,
        };
        table.rebase_timestamps();
        Ok(table)
    }

    pub(crate) fn set_source(&mut self, path: &Path) {
        self.source = Some(path.to_path_buf());
    }

    /// Shifts column 0 so the first row's value is exactly zero.
    fn rebase_timestamps(&mut self) {
        let Some(origin) = self.values.first().map(|row| row[0]) else {
            return;
        };
        if origin == 0.0 {
            return;
        }
        self.values[0][0] = 0.0;
        for row in self.values.iter_mut().skip(1) {
            row[0] -= origin;
        }
    }

    // === Shape ===

    /// The full matrix, row-major.
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// File the table was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Index of the first column named exactly `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index < self.row_count() {
            Ok(())
        } else {
            Err(TableError::RowOutOfRange {
                index,
                rows: self.row_count(),
            })
        }
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index < self.column_count() {
            Ok(())
        } else {
            Err(TableError::ColumnOutOfRange {
                index,
                columns: self.column_count(),
            })
        }
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.index_of(name).ok_or_else(|| TableError::ColumnNotFound {
            name: name.to_string(),
        })
    }

    // === Row access ===

    pub fn row(&self, index: usize) -> Result<&[f64]> {
        self.check_row(index)?;
        Ok(&self.values[index])
    }

    /// Rows `start..=end`.
    pub fn rows_range(&self, start: usize, end: usize) -> Result<Matrix> {
        if start > end {
            return Err(TableError::InvalidRange { start, end });
        }
        self.check_row(end)?;
        Ok(self.values[start..=end].to_vec())
    }

    /// Rows in the requested order; indices may repeat.
    pub fn rows(&self, indices: &[usize]) -> Result<Matrix> {
        indices
            .iter()
            .map(|&idx| self.row(idx).map(<[f64]>::to_vec))
            .collect()
    }

    // === Column access ===

    pub fn column(&self, index: usize) -> Result<Vec<f64>> {
        self.check_column(index)?;
        Ok(self.values.iter().map(|row| row[index]).collect())
    }

    pub fn column_by_name(&self, name: &str) -> Result<Vec<f64>> {
        self.column(self.resolve(name)?)
    }

    /// One output row per table row, holding the requested columns in order.
    pub fn columns(&self, indices: &[usize]) -> Result<Matrix> {
        for &idx in indices {
            self.check_column(idx)?;
        }
        Ok(self
            .values
            .iter()
            .map(|row| indices.iter().map(|&idx| row[idx]).collect())
            .collect())
    }

    /// Columns `start..=end`.
    pub fn columns_range(&self, start: usize, end: usize) -> Result<Matrix> {
        if start > end {
            return Err(TableError::InvalidRange { start, end });
        }
        let indices: Vec<usize> = (start..=end).collect();
        self.columns(&indices)
    }

    pub fn columns_by_name<S: AsRef<str>>(&self, names: &[S]) -> Result<Matrix> {
        let indices = names
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.columns(&indices)
    }

    /// Locates the X, Y, and Z acceleration columns by name.
    pub fn acceleration_axes(&self) -> AccelAxes {
        AccelAxes::detect(&self.column_names)
    }

    /// The X, Y, Z acceleration columns as an N×3 matrix.
    ///
    /// An axis with no matching column falls back to column 0.
    pub fn acceleration_columns(&self) -> Result<Matrix> {
        let axes = self.acceleration_axes();
        for (axis, found) in axes.iter() {
            if found.is_none() {
                tracing::warn!(axis, "no acceleration column found, using column 0");
            }
        }
        self.columns(&axes.indices_or_first())
    }

    // === Mutation ===

    pub fn set_value(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        self.check_row(row)?;
        self.check_column(column)?;
        self.values[row][column] = value;
        Ok(())
    }

    pub fn set_row(&mut self, row: usize, values: &[f64]) -> Result<()> {
        self.check_row(row)?;
        if values.len() != self.column_count() {
            return Err(TableError::Dimension {
                expected: self.column_count(),
                found: values.len(),
            });
        }
        self.values[row].copy_from_slice(values);
        Ok(())
    }

    pub fn set_column(&mut self, column: usize, values: &[f64]) -> Result<()> {
        self.check_column(column)?;
        if values.len() != self.row_count() {
            return Err(TableError::Dimension {
                expected: self.row_count(),
                found: values.len(),
            });
        }
        for (row, &value) in self.values.iter_mut().zip(values) {
            row[column] = value;
        }
        Ok(())
    }

    // === Serialization ===

    /// Serializes the table: header, then rows 1.. each ending in `#`.
    ///
    /// Row 0 is never written.
    pub fn to_csv_string(&self) -> String {
        csv::render(self)
    }

    /// Writes [`Self::to_csv_string`] output to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        csv::write_table(self, path.as_ref())
    }
}
