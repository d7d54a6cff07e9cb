//! Writing the projected table and the run report.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::types::RunResult;

/// `<stem>_form.csv` beside the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "return".to_string());
    input.with_file_name(format!("{stem}_form.csv"))
}

/// Write the table as CSV with a header row. Nulls become empty fields.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create output file {}", path.display()))?;
    CsvWriter::new(BufWriter::new(file))
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write output file {}", path.display()))?;
    info!(path = %path.display(), rows = df.height(), columns = df.width(), "wrote form table");
    Ok(())
}

/// Write the run report as pretty-printed JSON.
pub fn write_report(result: &RunResult, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create report file {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), result)
        .with_context(|| format!("write report file {}", path.display()))?;
    info!(path = %path.display(), "wrote run report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_beside_input() {
        assert_eq!(
            default_output_path(Path::new("returns/2023.xlsx")),
            PathBuf::from("returns/2023_form.csv")
        );
        assert_eq!(
            default_output_path(Path::new("acme.csv")),
            PathBuf::from("acme_form.csv")
        );
    }
}
