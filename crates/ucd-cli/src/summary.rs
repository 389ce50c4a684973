use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ucd_cli::types::{BuildResult, FileSummary};

pub fn print_summary(result: &BuildResult) {
    println!("UCD: {}", result.ucd_dir.display());
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Transform"),
        header_cell("Records"),
        header_cell("Written"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut total_records = 0usize;
    for summary in &result.files {
        total_records += summary.records;
        table.add_row(vec![
            file_cell(summary),
            transform_cell(summary.transform),
            Cell::new(summary.records),
            written_cell(summary),
            status_cell(summary),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!("{} files", result.files.len())),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        failed_total_cell(result.failed_count()),
    ]);
    println!("{table}");

    if !result.missing.is_empty() {
        println!("Not found: {}", result.missing.join(", "));
    }
    let failures: Vec<&FileSummary> = result
        .files
        .iter()
        .filter(|file| file.error.is_some())
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for file in failures {
            if let Some(error) = &file.error {
                eprintln!("- {}: {error}", file.file_name);
            }
        }
    }
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
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_cell(summary: &FileSummary) -> Cell {
    Cell::new(&summary.file_name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn transform_cell(transform: Option<&str>) -> Cell {
    match transform {
        Some(name) => Cell::new(name).fg(Color::Magenta),
        None => dim_cell("-"),
    }
}

fn written_cell(summary: &FileSummary) -> Cell {
    match &summary.output {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn status_cell(summary: &FileSummary) -> Cell {
    if summary.error.is_some() {
        return Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold);
    }
    match summary.warnings.as_slice() {
        [] => Cell::new("ok").fg(Color::Green),
        warnings => Cell::new(format!("WARN: {}", warnings.join("; "))).fg(Color::Yellow),
    }
}

fn failed_total_cell(failed: usize) -> Cell {
    if failed > 0 {
        Cell::new(format!("{failed} failed"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("0 failed")
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
