use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use etl_cli::pipeline::TableSummary;
use etl_model::TableKind;
use etl_output::SinkReport;

pub fn print_summary(summaries: &[TableSummary], dry_run: bool) {
    if dry_run {
        println!("Dry run: no files written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Loaded"),
        header_cell("Duplicates"),
        header_cell("Valid"),
        header_cell("Rejected"),
        header_cell("Transformed file"),
        header_cell("Rejected file"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = [0usize; 4];
    for summary in summaries {
        totals[0] += summary.loaded;
        totals[1] += summary.duplicates_removed;
        totals[2] += summary.valid;
        totals[3] += summary.rejected;
        table.add_row(vec![
            Cell::new(summary.table.output_name()).fg(Color::Green),
            Cell::new(summary.loaded),
            count_cell(summary.duplicates_removed, Color::Yellow),
            Cell::new(summary.valid),
            count_cell(summary.rejected, Color::Red),
            output_cell(summary.transformed_output.as_ref()),
            output_cell(summary.rejected_output.as_ref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals[0]).add_attribute(Attribute::Bold),
        count_cell(totals[1], Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(totals[2]).add_attribute(Attribute::Bold),
        count_cell(totals[3], Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

/// Print the schema registry.
pub fn print_tables() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Output"),
        header_cell("Description"),
        header_cell("Columns"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    for kind in TableKind::ALL {
        let columns = kind
            .schema()
            .columns()
            .iter()
            .map(|column| format!("{} ({})", column.name, column.field_type))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(kind.source_name()).fg(Color::Green),
            Cell::new(format!("{}.csv", kind.output_name())),
            Cell::new(kind.description()),
            Cell::new(columns),
        ]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn output_cell(report: Option<&SinkReport>) -> Cell {
    match report {
        Some(report) => Cell::new(report.path.display()),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
