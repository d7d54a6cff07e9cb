use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use labuan_model::{
    ASSESSMENT_YEAR, PART_A_EXTENDED_COLUMNS, PERIOD_COLUMNS, PipelineOptions, output_columns,
};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());
    println!(
        "Rows: {}  Columns: {}",
        result.report.rows, result.report.columns
    );
    println!("{}", miss_table(result));
}

/// Per-field null counts plus a total row.
pub fn miss_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Missing"),
        header_cell("Filled"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let rows = result.report.rows;
    for (field, &missing) in &result.report.misses {
        table.add_row(vec![
            Cell::new(field)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(missing, Color::Yellow),
            Cell::new(rows.saturating_sub(missing)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(result.report.total_misses(), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Form section a layout column is printed in.
pub fn column_section(column: &str) -> &'static str {
    if column.starts_with("year_") {
        ASSESSMENT_YEAR
    } else if PERIOD_COLUMNS.iter().any(|c| *c == column) {
        "Periods"
    } else if PART_A_EXTENDED_COLUMNS.iter().any(|c| *c == column) {
        "Part A (extended)"
    } else if column.starts_with('C') {
        "Part C"
    } else if column.starts_with('D') {
        "Part D"
    } else {
        "Part A"
    }
}

/// Numbered output columns with their form section.
pub fn layout_table(options: &PipelineOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Column", "Section"]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, column) in output_columns(options).into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(column),
            Cell::new(column_section(column)),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
