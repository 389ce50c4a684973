use std::path::Path;

use anyhow::{Context, Result, anyhow};
use comfy_table::{CellAlignment, Table};
use tracing::info;

use ucd_cli::pipeline::{BuildOptions, convert_file, document_json, run_build};
use ucd_cli::types::BuildResult;
use ucd_standards::{FieldTable, default_field_table_path, load_field_table};

use crate::cli::{BuildArgs, FieldsArg, ParseArgs};
use crate::summary::{align_column, apply_table_style, header_cell};

/// Loads the field table named on the command line, or the default one.
fn load_table(args: &FieldsArg) -> Result<FieldTable> {
    let path = args
        .fields
        .clone()
        .unwrap_or_else(default_field_table_path);
    load_field_table(&path).with_context(|| format!("load field table {}", path.display()))
}

pub fn run_build_command(args: &BuildArgs) -> Result<BuildResult> {
    let table = load_table(&args.table)?;
    let options = BuildOptions::new(&args.ucd_dir)
        .with_output_dir(args.output_dir.clone())
        .with_dry_run(args.dry_run);
    info!(
        ucd_dir = %options.ucd_dir.display(),
        output_dir = %options.output_dir.display(),
        dry_run = options.dry_run,
        configured = table.len(),
        "starting build"
    );
    run_build(&table, &options)
}

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let table = load_table(&args.table)?;
    let file_name = file_name(&args.file)?;
    let spec = table.require(file_name)?;
    let converted = convert_file(&args.file, spec)?;
    for warning in converted.warnings() {
        eprintln!("warning: {warning}");
    }
    println!("{}", document_json(&converted.document)?);
    Ok(())
}

pub fn run_files(args: &FieldsArg) -> Result<()> {
    let table = load_table(args)?;
    let mut output = Table::new();
    output.set_header(vec![
        header_cell("File"),
        header_cell("Fields"),
        header_cell("Delimiter"),
        header_cell("Transform"),
    ]);
    apply_table_style(&mut output);
    align_column(&mut output, 2, CellAlignment::Center);
    for spec in table.iter() {
        output.add_row(vec![
            spec.file_name.clone(),
            spec.fields.join(", "),
            spec.options.delimiter.escape_default().to_string(),
            spec.transform
                .as_ref()
                .map_or_else(|| "-".to_string(), |transform| transform.name().to_string()),
        ]);
    }
    println!("{output}");
    Ok(())
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("{} has no UTF-8 file name", path.display()))
}
