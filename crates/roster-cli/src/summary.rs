use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::Column;

use crate::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    match (&result.output, result.dry_run) {
        (Some(path), _) => println!("Output: {}", path.display()),
        (None, true) => println!("Output: (dry run)"),
        (None, false) => {}
    }
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Records"),
        header_cell("Merged"),
        header_cell("Phones"),
        header_cell("Emails"),
        header_cell("Rejected phones"),
        header_cell("Rejected emails"),
        header_cell("Ignored columns"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(stats.rows),
        Cell::new(stats.records).add_attribute(Attribute::Bold),
        Cell::new(stats.merged_rows),
        Cell::new(stats.phones),
        Cell::new(stats.emails),
        count_cell(stats.rejected_phones, Color::Yellow),
        count_cell(stats.rejected_emails, Color::Yellow),
        count_cell(stats.ignored_columns, Color::DarkYellow),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Decoded field type, dimmed for columns no row step acts on.
pub fn field_cell(column: &Column) -> Cell {
    match column.field.token() {
        Some(token) => Cell::new(token)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        None => dim_cell("ignored"),
    }
}

pub fn tags_cell(tags: &[String]) -> Cell {
    if tags.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(tags.join(", "))
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
