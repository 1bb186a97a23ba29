//! Terminal rendering of tables and acceleration summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use motion_table::{AccelAxes, format_value};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_all(table: &mut Table, alignment: CellAlignment) {
    for column in table.column_iter_mut() {
        column.set_cell_alignment(alignment);
    }
}

/// Renders the first `head` rows under the given headers.
pub fn values_table<S: AsRef<str>>(headers: &[S], rows: &[Vec<f64>], head: usize) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|h| header_cell(h.as_ref())));
    apply_table_style(&mut table);
    for row in rows.iter().take(head) {
        table.add_row(row.iter().copied().map(format_value));
    }
    align_all(&mut table, CellAlignment::Right);
    table
}

/// Renders which column each acceleration axis resolved to.
pub fn axes_table(axes: &AccelAxes, column_names: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Axis"), header_cell("Column")]);
    apply_table_style(&mut table);
    for (axis, found) in axes.iter() {
        let column = match found {
            Some(idx) => Cell::new(&column_names[idx]),
            None => {
                let fallback = column_names.first().map_or("", String::as_str);
                Cell::new(format!("{fallback} (not found)")).fg(Color::Yellow)
            }
        };
        table.add_row(vec![Cell::new(axis.to_uppercase()), column]);
    }
    table
}
