//! Load, transform and write one return file.

use std::path::Path;

use anyhow::{Context, Result};
use labuan_ingest::load_table;
use labuan_model::{EMPLOYER_NAME, PipelineOptions, any_to_string, derived};
use labuan_transform::process_file_with_report;
use polars::prelude::{AnyValue, DataFrame};
use tracing::{Level, info_span, trace};

use crate::logging::redact_value;
use crate::output::write_csv;
use crate::types::RunResult;

/// Transform `input` into the form layout and write it to `output`.
pub fn transform_file(
    input: &Path,
    output: &Path,
    options: &PipelineOptions,
) -> Result<RunResult> {
    let span = info_span!("transform", input = %input.display());
    let _guard = span.enter();

    let df = load_table(input).context("error loading spreadsheet")?;
    let (mut projected, report) = process_file_with_report(df, options)
        .with_context(|| format!("error transforming {}", input.display()))?;
    trace_rows(&projected);
    write_csv(&mut projected, output)?;

    Ok(RunResult {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        options: options.clone(),
        report,
    })
}

fn trace_rows(df: &DataFrame) {
    if !tracing::enabled!(Level::TRACE) {
        return;
    }
    let Ok(names) = df.column(&derived::name_line(EMPLOYER_NAME, 1)) else {
        return;
    };
    for row in 0..df.height() {
        let name = any_to_string(names.get(row).unwrap_or(AnyValue::Null));
        trace!(row, employer = %redact_value(&name), "row ready");
    }
}
