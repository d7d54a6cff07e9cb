//! Data model for the Labuan tax-return form transformer.
//!
//! - **fields**: form-field codes and derived column naming
//! - **gazetteer**: the fixed list of Malaysian states and territories
//! - **layout**: ordered output column lists for each form layout
//! - **lookup**: resolving form codes to loaded column names
//! - **options**: pipeline configuration
//! - **parts**: derived address and date components
//! - **polars_utils**: `AnyValue` conversions shared by ingest and transform

pub mod fields;
pub mod gazetteer;
pub mod layout;
pub mod lookup;
pub mod options;
pub mod parts;
pub mod polars_utils;

pub use fields::{
    ADDRESS_FIELD, ASSESSMENT_YEAR, EMPLOYER_NAME, MONETARY_FIELD, PERIOD_FIELDS,
    SINGLE_DATE_FIELD, TIN_FIELD, derived,
};
pub use gazetteer::{MALAYSIA_STATES, STATE_ABBREVIATIONS, abbreviate_state};
pub use layout::{
    BASIC_COLUMNS, PART_A_EXTENDED_COLUMNS, PART_C_COLUMNS, PERIOD_COLUMNS, output_columns,
};
pub use lookup::ColumnLookup;
pub use options::{PipelineOptions, YearDigits};
pub use parts::{AddressComponents, DateParts, PeriodParts};
pub use polars_utils::{
    any_to_f64, any_to_string, any_to_string_non_empty, format_numeric, parse_f64,
};
