use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use resizer_core::RenderView;

/// Prints both lists, marking the pre-selected rows with `*`.
///
/// Rows are numbered from 1; these are the numbers `resizer resize`
/// accepts for `--window` and `--monitor`.
pub fn print(view: &RenderView) {
    println!("{}", table("Window", &view.windows, view.selection.window));
    println!("{}", table("Monitor", &view.monitors, view.selection.monitor));
    println!(
        "\n{} windows, {} monitors found",
        view.windows.len(),
        view.monitors.len()
    );
}

fn table(heading: &str, rows: &[String], selected: Option<usize>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new(heading),
            Cell::new(""),
        ]);

    for (i, label) in rows.iter().enumerate() {
        let marker = if selected == Some(i) { "*" } else { "" };
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(label),
            Cell::new(marker),
        ]);
    }
    table
}
