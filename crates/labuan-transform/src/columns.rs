//! Column name cleanup and the final output projection.

use labuan_model::{PipelineOptions, output_columns};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::frame::column_lookup;

/// Clean a header: trim, turn embedded line breaks into spaces, trim again.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim()
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

/// Rename every column to its cleaned form. Returns the number renamed.
pub fn normalize_column_names(df: &mut DataFrame) -> Result<usize> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut renamed = 0usize;
    for name in names {
        let cleaned = normalize_column_name(&name);
        if cleaned != name {
            debug!(from = ?name, to = %cleaned, "normalized column name");
            df.rename(&name, cleaned.as_str().into())?;
            renamed += 1;
        }
    }
    Ok(renamed)
}

/// Select the layout's columns in order, renaming described source columns
/// (`"A4 (Business Type)"`) to their bare code.
pub fn project_columns(df: &DataFrame, options: &PipelineOptions) -> Result<DataFrame> {
    let lookup = column_lookup(df);
    let layout = output_columns(options);

    let mut selection: Vec<&str> = Vec::with_capacity(layout.len());
    for code in &layout {
        let name = lookup
            .resolve(code)
            .ok_or_else(|| TransformError::MissingColumn {
                column: (*code).to_string(),
            })?;
        selection.push(name);
    }

    let mut projected = df.select(selection.iter().copied())?;
    for (code, name) in layout.iter().zip(&selection) {
        if code != name {
            projected.rename(name, (*code).into())?;
        }
    }
    Ok(projected)
}
