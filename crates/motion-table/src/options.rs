//! Options controlling how a CSV file is turned into a table.

use serde::{Deserialize, Serialize};

/// How to locate the header and data lines in a file.
///
/// - `skip_lines`: leading metadata lines discarded unconditionally.
/// - `column_names`: when `None`, the line after the skipped block is the
///   header. When set, data starts right after the skipped block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOptions {
    pub skip_lines: usize,
    #[serde(default)]
    pub column_names: Option<Vec<String>>,
}

impl ReadOptions {
    /// Options that skip `skip_lines` lines and read the header from the file.
    pub fn new(skip_lines: usize) -> Self {
        Self {
            skip_lines,
            column_names: None,
        }
    }

    /// Supply column names instead of reading a header line.
    #[must_use]
    pub fn with_column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if the header is read from the file.
    pub fn reads_header(&self) -> bool {
        self.column_names.is_none()
    }
}
