//! In-memory numeric CSV tables for motion sensor recordings.
//!
//! A [`Table`] is a rectangular `f64` matrix with named columns. Column 0 is
//! a timestamp and is rebased to start at zero whenever a table is built.
//!
//! # Features
//!
//! - **Loading**: skip leading metadata lines, read the header or supply names
//! - **Access**: rows and columns by index, inclusive range, or name
//! - **Acceleration**: locate X/Y/Z acceleration columns by name
//! - **Saving**: header plus rows 1.., each data line ending in `#`
//!
//! # Example
//!
//! ```no_run
//! use motion_table::{ReadOptions, Table};
//!
//! fn main() -> motion_table::Result<()> {
//!     // One metadata line, then a header
//!     let mut table = Table::read("walk.csv", 1)?;
//!     let xyz = table.acceleration_columns()?;
//!     assert_eq!(xyz.len(), table.row_count());
//!
//!     // Supply names when the file has no header
//!     let options = ReadOptions::new(2).with_column_names(["t", "ax", "ay", "az"]);
//!     let raw = Table::read_with_options("raw.csv", &options)?;
//!     println!("{} rows", raw.row_count());
//!
//!     table.set_value(1, 1, 0.0)?;
//!     table.save("walk-clean.csv")?;
//!     Ok(())
//! }
//! ```

mod axes;
mod csv;
mod error;
mod options;
mod table;

// === Error Types ===
pub use error::{Result, TableError};

// === Table ===
pub use axes::AccelAxes;
pub use options::ReadOptions;
pub use table::{Matrix, Table};

// === Text Format ===
pub use csv::{SENTINEL, format_value};
