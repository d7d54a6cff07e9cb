//! Labuan tax-return form transformation.
//!
//! Turns one loaded return into the column layout printed on the form:
//!
//! - **text**: greedy word wrapping for fixed-width lines
//! - **address**: postcode, state and city extraction from free text
//! - **date**: flexible date parsing and digit-box rendering
//! - **numeric**: monetary formatting
//! - **columns**: header cleanup and the final projection
//! - **frame**: DataFrame column helpers
//! - **pipeline**: the ordered stages tying it together

pub mod address;
pub mod columns;
pub mod date;
pub mod error;
pub mod frame;
pub mod numeric;
pub mod pipeline;
pub mod text;

pub use address::{parse_address, wrap_address_line};
pub use columns::{normalize_column_name, normalize_column_names, project_columns};
pub use date::{decompose_date, parse_flexible_date, parse_period_date, split_period};
pub use error::{Result, TransformError};
pub use numeric::format_monetary;
pub use pipeline::{ADDRESS_FIELDS, TransformReport, process_file, process_file_with_report};
pub use text::split_string;
