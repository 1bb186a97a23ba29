use anyhow::{Context, Result};
use tracing::{info, info_span};

use motion_table::Table;

use crate::cli::{AccelArgs, InspectArgs, RebaseArgs, SourceArgs};
use crate::render::{axes_table, values_table};

pub fn load(source: &SourceArgs) -> Result<Table> {
    Table::read_with_options(&source.file, &source.read_options())
        .with_context(|| format!("load {}", source.file.display()))
}

pub fn run_inspect(args: &InspectArgs) -> Result<String> {
    let table = load(&args.source)?;
    if args.json {
        return serde_json::to_string_pretty(&table).context("serialize table");
    }
    let mut out = String::new();
    out.push_str(&format!("File: {}\n", args.source.file.display()));
    out.push_str(&format!(
        "Shape: {} rows x {} columns\n",
        table.row_count(),
        table.column_count()
    ));
    out.push_str(&format!("Columns: {}\n", table.column_names().join(", ")));
    out.push_str(&values_table(table.column_names(), table.values(), args.head).to_string());
    out.push('\n');
    Ok(out)
}

pub fn run_rebase(args: &RebaseArgs) -> Result<String> {
    let span = info_span!("rebase", file = %args.source.file.display());
    let _guard = span.enter();

    let table = load(&args.source)?;
    table
        .save(&args.output)
        .with_context(|| format!("save {}", args.output.display()))?;
    info!(
        output = %args.output.display(),
        rows = table.row_count().saturating_sub(1),
        "wrote rebased table"
    );
    Ok(format!(
        "Wrote {} rows to {}\n",
        table.row_count().saturating_sub(1),
        args.output.display()
    ))
}

pub fn run_accel(args: &AccelArgs) -> Result<String> {
    let table = load(&args.source)?;
    let axes = table.acceleration_axes();
    let xyz = table
        .acceleration_columns()
        .context("select acceleration columns")?;

    let mut out = axes_table(&axes, table.column_names()).to_string();
    out.push('\n');
    out.push_str(&values_table(&["X", "Y", "Z"], &xyz, args.head).to_string());
    out.push('\n');
    Ok(out)
}
