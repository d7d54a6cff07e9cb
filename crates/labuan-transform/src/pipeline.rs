//! The form-filling pipeline.
//!
//! Stages run in a fixed order over one table:
//! 1. **Columns**: clean header names
//! 2. **Assessment year**: spread row 0's year over `year_1`..`year_4`
//! 3. **Employer name**: wrap `A1` into two 52-character lines
//! 4. **Address**: decompose `A2` into lines, postcode, city and state
//! 5. **TIN**: keep only the digits of `A3`
//! 6. **Dates**: `A7`, then the `A10`/`A11` periods when enabled
//! 7. **Amounts**: `A14` to four decimals when periods are enabled
//! 8. **Projection**: select the layout's columns in order
//!
//! Extraction misses leave nulls and are counted in the [`TransformReport`];
//! only missing columns and malformed types abort the call.

use std::collections::BTreeMap;
use std::time::Instant;

use labuan_model::fields::{EMPLOYER_NAME_WIDTH, PERIOD_SEPARATOR};
use labuan_model::{
    ADDRESS_FIELD, ASSESSMENT_YEAR, EMPLOYER_NAME, MONETARY_FIELD, PERIOD_FIELDS,
    PipelineOptions, SINGLE_DATE_FIELD, TIN_FIELD, YearDigits, any_to_f64, any_to_string,
    derived,
};
use polars::prelude::{AnyValue, DataFrame};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::address::{parse_address, wrap_address_line};
use crate::columns::{normalize_column_names, project_columns};
use crate::date::{decompose_date, parse_flexible_date, parse_period_date, split_period};
use crate::error::{Result, TransformError};
use crate::frame::{
    null_count, require_column, set_constant_column, set_string_column, string_values,
};
use crate::numeric::format_monetary;
use crate::text::{first_digit_run, first_two_lines, split_string};

/// Address columns decomposed by the pipeline.
pub const ADDRESS_FIELDS: [&str; 1] = [ADDRESS_FIELD];

/// Outcome counts for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformReport {
    /// Rows in the input and output tables.
    pub rows: usize,
    /// Columns in the projected output.
    pub columns: usize,
    /// Source headers that needed cleaning.
    pub renamed_columns: usize,
    /// Null derived values per derived field, including zero counts.
    pub misses: BTreeMap<String, usize>,
}

impl TransformReport {
    fn record(&mut self, field: impl Into<String>, misses: usize) {
        self.misses.insert(field.into(), misses);
    }

    /// Total null derived values across all fields.
    pub fn total_misses(&self) -> usize {
        self.misses.values().sum()
    }
}

/// Transform a loaded tax return into the form's column layout.
pub fn process_file(df: DataFrame, options: &PipelineOptions) -> Result<DataFrame> {
    process_file_with_report(df, options).map(|(projected, _)| projected)
}

/// Like [`process_file`], also returning per-field miss counts.
pub fn process_file_with_report(
    mut df: DataFrame,
    options: &PipelineOptions,
) -> Result<(DataFrame, TransformReport)> {
    let span = info_span!(
        "process_file",
        rows = df.height(),
        columns = df.width(),
        part_c = options.include_part_c,
        periods = options.split_periods
    );
    let _guard = span.enter();
    let start = Instant::now();
    let mut report = TransformReport {
        rows: df.height(),
        ..TransformReport::default()
    };

    report.renamed_columns = normalize_column_names(&mut df)?;
    if df.height() == 0 {
        return Err(TransformError::EmptyTable);
    }
    derive_assessment_year(&mut df)?;
    derive_employer_name(&mut df, &mut report)?;
    for code in ADDRESS_FIELDS {
        info_span!("address", field = code)
            .in_scope(|| derive_address(&mut df, code, &mut report))?;
    }
    derive_tin_digits(&mut df, &mut report)?;
    derive_single_date(&mut df, SINGLE_DATE_FIELD, options.year_digits, &mut report)?;
    if options.split_periods {
        for code in PERIOD_FIELDS {
            info_span!("period", field = code)
                .in_scope(|| derive_period(&mut df, code, options.year_digits, &mut report))?;
        }
        format_monetary_field(&mut df, MONETARY_FIELD)?;
    }

    let projected = project_columns(&df, options)?;
    report.columns = projected.width();

    info!(
        rows = report.rows,
        columns = report.columns,
        misses = report.total_misses(),
        duration_ms = start.elapsed().as_millis() as u64,
        "form fields derived"
    );
    Ok((projected, report))
}

/// `year_1`..`year_4` from the first four characters of row 0's year.
fn derive_assessment_year(df: &mut DataFrame) -> Result<()> {
    let name = require_column(df, ASSESSMENT_YEAR)?;
    let value = any_to_string(df.column(&name)?.get(0).unwrap_or(AnyValue::Null));
    let digits: Vec<char> = value.trim().chars().take(4).collect();
    if digits.len() < 4 {
        return Err(TransformError::InvalidAssessmentYear { value });
    }
    for (idx, digit) in digits.iter().enumerate() {
        set_constant_column(df, &derived::year_digit(idx + 1), &digit.to_string())?;
    }
    Ok(())
}

/// Upper-cased employer name wrapped into `A1_1` and `A1_2`.
fn derive_employer_name(df: &mut DataFrame, report: &mut TransformReport) -> Result<()> {
    let name = require_column(df, EMPLOYER_NAME)?;
    let values = string_values(df, &name)?;

    let mut first_lines = Vec::with_capacity(values.len());
    let mut second_lines = Vec::with_capacity(values.len());
    for (row, value) in values.iter().enumerate() {
        let Some(value) = value else {
            first_lines.push(None);
            second_lines.push(None);
            continue;
        };
        let chunks = split_string(&value.to_uppercase(), " ", EMPLOYER_NAME_WIDTH);
        if chunks.len() > 2 {
            debug!(row, chunks = chunks.len(), "employer name exceeds two lines");
        }
        let (first, second) = first_two_lines(&chunks);
        first_lines.push(Some(first));
        second_lines.push(Some(second));
    }

    report.record(derived::name_line(EMPLOYER_NAME, 1), null_count(&first_lines));
    set_string_column(df, &derived::name_line(EMPLOYER_NAME, 1), first_lines)?;
    set_string_column(df, &derived::name_line(EMPLOYER_NAME, 2), second_lines)?;
    Ok(())
}

/// Address lines, postcode, city and state for one address field.
fn derive_address(df: &mut DataFrame, code: &str, report: &mut TransformReport) -> Result<()> {
    let name = require_column(df, code)?;
    let values = string_values(df, &name)?;
    let height = values.len();

    let mut address_1 = Vec::with_capacity(height);
    let mut address_2 = Vec::with_capacity(height);
    let mut postcodes = Vec::with_capacity(height);
    let mut cities = Vec::with_capacity(height);
    let mut states = Vec::with_capacity(height);

    for (row, value) in values.iter().enumerate() {
        let parts = value.as_deref().map(parse_address).unwrap_or_default();
        if parts.postcode.is_none() {
            debug!(row, "no postcode found");
        }
        if parts.state.is_none() {
            debug!(row, "no state matched");
        }
        let (line_1, line_2) = match parts.line.as_deref() {
            Some(line) => {
                let (first, second) = wrap_address_line(line);
                (Some(first), Some(second))
            }
            None => (None, None),
        };
        address_1.push(line_1);
        address_2.push(line_2);
        postcodes.push(parts.postcode);
        cities.push(parts.city);
        states.push(parts.state);
    }

    report.record(derived::address_line(code, 1), null_count(&address_1));
    report.record(derived::postcode(code), null_count(&postcodes));
    report.record(derived::city(code), null_count(&cities));
    report.record(derived::state(code), null_count(&states));

    set_string_column(df, &derived::address_line(code, 1), address_1)?;
    set_string_column(df, &derived::address_line(code, 2), address_2)?;
    set_string_column(df, &derived::postcode(code), postcodes)?;
    set_string_column(df, &derived::city(code), cities)?;
    set_string_column(df, &derived::state(code), states)?;
    Ok(())
}

/// Replace the TIN with its first run of digits.
fn derive_tin_digits(df: &mut DataFrame, report: &mut TransformReport) -> Result<()> {
    let name = require_column(df, TIN_FIELD)?;
    let digits: Vec<Option<String>> = string_values(df, &name)?
        .iter()
        .map(|value| value.as_deref().and_then(first_digit_run).map(str::to_string))
        .collect();
    report.record(TIN_FIELD, null_count(&digits));
    set_string_column(df, &name, digits)
}

/// `<prefix>_day`, `<prefix>_month` and `<prefix>_year` from parsed dates.
fn set_date_columns(
    df: &mut DataFrame,
    prefix: &str,
    dates: &[Option<chrono::NaiveDate>],
    year_digits: YearDigits,
) -> Result<()> {
    let mut days = Vec::with_capacity(dates.len());
    let mut months = Vec::with_capacity(dates.len());
    let mut years = Vec::with_capacity(dates.len());
    for date in dates {
        let parts = date.map(|d| decompose_date(d, year_digits));
        days.push(parts.as_ref().map(|p| p.day.clone()));
        months.push(parts.as_ref().map(|p| p.month.clone()));
        years.push(parts.map(|p| p.year));
    }
    set_string_column(df, &derived::date_part(prefix, "day"), days)?;
    set_string_column(df, &derived::date_part(prefix, "month"), months)?;
    set_string_column(df, &derived::date_part(prefix, "year"), years)?;
    Ok(())
}

/// Single date field with flexible format inference.
fn derive_single_date(
    df: &mut DataFrame,
    code: &str,
    year_digits: YearDigits,
    report: &mut TransformReport,
) -> Result<()> {
    let name = require_column(df, code)?;
    let dates: Vec<_> = string_values(df, &name)?
        .iter()
        .enumerate()
        .map(|(row, value)| {
            let parsed = value.as_deref().and_then(parse_flexible_date);
            if parsed.is_none() {
                debug!(row, field = code, "unparseable date");
            }
            parsed
        })
        .collect();
    report.record(code, dates.iter().filter(|d| d.is_none()).count());
    set_date_columns(df, code, &dates, year_digits)
}

/// Period field `"<dd-mm-yyyy> hingga <dd-mm-yyyy>"`: raw halves plus
/// decomposed dates for each half.
fn derive_period(
    df: &mut DataFrame,
    code: &str,
    year_digits: YearDigits,
    report: &mut TransformReport,
) -> Result<()> {
    let name = require_column(df, code)?;
    let values = string_values(df, &name)?;

    let mut from_raw = Vec::with_capacity(values.len());
    let mut to_raw = Vec::with_capacity(values.len());
    for (row, value) in values.iter().enumerate() {
        let parts = value.as_deref().map(split_period).unwrap_or_default();
        if value.is_some() && parts.to.is_none() {
            debug!(
                row,
                field = code,
                separator = PERIOD_SEPARATOR.trim(),
                "period has no end date"
            );
        }
        from_raw.push(parts.from);
        to_raw.push(parts.to);
    }

    for (half, raw) in [("from", &from_raw), ("to", &to_raw)] {
        let prefix = derived::period_half(code, half);
        let dates: Vec<_> = raw
            .iter()
            .map(|value| value.as_deref().and_then(parse_period_date))
            .collect();
        report.record(prefix.clone(), dates.iter().filter(|d| d.is_none()).count());
        set_date_columns(df, &prefix, &dates, year_digits)?;
    }

    set_string_column(df, &derived::period_half(code, "from"), from_raw)?;
    set_string_column(df, &derived::period_half(code, "to"), to_raw)?;
    Ok(())
}

/// Rewrite a monetary column as four-decimal text. Non-numeric values abort.
fn format_monetary_field(df: &mut DataFrame, code: &str) -> Result<()> {
    let name = require_column(df, code)?;
    let column = df.column(&name)?;
    let mut formatted = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let value = column.get(row).unwrap_or(AnyValue::Null);
        let amount = any_to_f64(value).map_err(|value| TransformError::InvalidNumber {
            column: code.to_string(),
            row,
            value,
        })?;
        formatted.push(format_monetary(amount));
    }
    set_string_column(df, &name, formatted)
}
