//! Entry point for loading a tax return regardless of its file type.

use std::path::Path;
use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use crate::csv::read_csv_table;
use crate::error::Result;
use crate::workbook::read_workbook_table;

/// Source file kinds, decided by file name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Workbook,
}

impl SourceKind {
    /// `.csv` is comma-separated; everything else is treated as a workbook.
    pub fn from_path(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv { Self::Csv } else { Self::Workbook }
    }
}

/// Load a tax-return file into a DataFrame.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    let kind = SourceKind::from_path(path);
    let span = info_span!("load", path = %path.display(), kind = ?kind);
    let _guard = span.enter();
    let start = Instant::now();

    let df = match kind {
        SourceKind::Csv => read_csv_table(path)?,
        SourceKind::Workbook => read_workbook_table(path)?,
    };

    info!(
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis() as u64,
        "loaded source table"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_decided_by_extension() {
        assert_eq!(SourceKind::from_path(Path::new("return.csv")), SourceKind::Csv);
        assert_eq!(SourceKind::from_path(Path::new("RETURN.CSV")), SourceKind::Csv);
        assert_eq!(
            SourceKind::from_path(Path::new("return.xlsx")),
            SourceKind::Workbook
        );
        assert_eq!(SourceKind::from_path(Path::new("return")), SourceKind::Workbook);
    }
}
