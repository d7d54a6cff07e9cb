//! DataFrame column access helpers.

use labuan_model::{ColumnLookup, any_to_string_non_empty};
use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, Series};

use crate::error::{Result, TransformError};

/// Lookup over the frame's current column names.
pub fn column_lookup(df: &DataFrame) -> ColumnLookup {
    ColumnLookup::new(df.get_column_names().iter().map(|name| name.as_str()))
}

/// Resolve a form code to a column name, failing when it is absent.
pub fn require_column(df: &DataFrame, code: &str) -> Result<String> {
    column_lookup(df)
        .resolve(code)
        .map(str::to_string)
        .ok_or_else(|| TransformError::MissingColumn {
            column: code.to_string(),
        })
}

/// Every cell of a column as text; nulls and blank strings are `None`.
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_string_non_empty(value));
    }
    Ok(values)
}

/// Add or replace a text column.
pub fn set_string_column(df: &mut DataFrame, name: &str, values: Vec<Option<String>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Add or replace a column holding the same text in every row.
pub fn set_constant_column(df: &mut DataFrame, name: &str, value: &str) -> Result<()> {
    let col = Column::new(name.into(), vec![value; df.height()]);
    df.with_column(col)?;
    Ok(())
}

/// Number of null cells in a derived column.
pub fn null_count(values: &[Option<String>]) -> usize {
    values.iter().filter(|value| value.is_none()).count()
}
