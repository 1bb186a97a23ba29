//! CSV reading and writing.

mod line;
mod reader;
mod writer;

pub use line::{SENTINEL, format_value, parse_data_line};
pub use reader::read_table;
pub use writer::{render, write_table};
