//! Spreadsheet workbooks (xls, xlsx, xlsm, xlsb, ods).
//!
//! Only the first worksheet is read. Row 0 is the header.

use std::collections::BTreeMap;
use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::{NaiveDateTime, NaiveTime};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use labuan_model::format_numeric;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellColumnType {
    Int64,
    Float64,
    Utf8,
}

/// Reads the first worksheet of a workbook into a DataFrame.
pub fn read_workbook_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?
        .map_err(|e| workbook_error(e.to_string()))?;

    let rows: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Err(IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    };

    let headers = unique_headers(header_row);
    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (col_idx, name) in headers.iter().enumerate() {
        let cells: Vec<Option<&Data>> = data_rows.iter().map(|row| row.get(col_idx)).collect();
        let column_type = infer_column_type(&cells);
        debug!(column = %name, ?column_type, "inferred workbook column type");
        columns.push(cells_to_column(name, &cells, column_type));
    }

    Ok(DataFrame::new(columns)?)
}

/// Header names with blanks filled and duplicates suffixed `.1`, `.2`, ...
fn unique_headers(row: &[Data]) -> Vec<String> {
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    row.iter()
        .enumerate()
        .map(|(idx, cell)| {
            let raw = cell_to_text(cell).unwrap_or_default();
            let base = if raw.trim().is_empty() {
                format!("column_{}", idx + 1)
            } else {
                raw
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{base}.{count}")
            };
            *count += 1;
            name
        })
        .collect()
}

/// Numeric columns stay numeric; anything containing text or dates is text.
fn infer_column_type(cells: &[Option<&Data>]) -> CellColumnType {
    let mut saw_float = false;
    let mut saw_number = false;
    for cell in cells.iter().flatten() {
        match cell {
            Data::Empty => {}
            Data::Int(_) => saw_number = true,
            Data::Float(v) => {
                saw_number = true;
                if !(v.is_finite() && (v - v.trunc()).abs() < 1e-10) {
                    saw_float = true;
                }
            }
            _ => return CellColumnType::Utf8,
        }
    }
    match (saw_number, saw_float) {
        (true, false) => CellColumnType::Int64,
        (true, true) => CellColumnType::Float64,
        (false, _) => CellColumnType::Utf8,
    }
}

fn cells_to_column(name: &str, cells: &[Option<&Data>], column_type: CellColumnType) -> Column {
    match column_type {
        CellColumnType::Int64 => {
            let values: Vec<Option<i64>> = cells
                .iter()
                .map(|c| c.and_then(|cell| cell.as_i64()))
                .collect();
            Series::new(name.into(), values).into_column()
        }
        CellColumnType::Float64 => {
            let values: Vec<Option<f64>> = cells
                .iter()
                .map(|c| c.and_then(|cell| cell.as_f64()))
                .collect();
            Series::new(name.into(), values).into_column()
        }
        CellColumnType::Utf8 => {
            let values: Vec<Option<String>> =
                cells.iter().map(|c| c.and_then(cell_to_text)).collect();
            Series::new(name.into(), values).into_column()
        }
    }
}

/// Renders a cell as text. Dates at midnight render as `YYYY-MM-DD`.
fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) => Some(format_numeric(*v)),
        Data::Bool(v) => Some(v.to_string()),
        Data::DateTime(_) | Data::DateTimeIso(_) => match cell.as_datetime() {
            Some(dt) => Some(format_datetime(dt)),
            None => cell.as_string(),
        },
        Data::DurationIso(s) => Some(s.clone()),
    }
}

fn format_datetime(dt: NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
