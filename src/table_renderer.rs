use crate::format::{DisplayRow, HEADERS, truncate_middle};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Render the default text table. Nothing at all is produced for zero rows.
#[must_use]
pub fn render_table(rows: &[DisplayRow], name_width: Option<usize>) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::ASCII_FULL_CONDENSED);
    table.set_header(HEADERS.to_vec());

    for row in rows {
        let name = match name_width {
            Some(w) => truncate_middle(&row.name, w),
            None => row.name.clone(),
        };

        let cells = vec![
            Cell::new(&row.mod_time),
            Cell::new(&row.size),
            Cell::new(&row.kind),
            Cell::new(name),
        ];
        if row.is_summary {
            table.add_row(
                cells
                    .into_iter()
                    .map(|c| c.add_attribute(Attribute::Bold))
                    .collect::<Vec<_>>(),
            );
        } else {
            table.add_row(cells);
        }
    }

    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    format!("{table}\n")
}
