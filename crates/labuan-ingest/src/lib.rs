//! Tax-return ingestion.
//!
//! Loads a single source file into a Polars DataFrame:
//!
//! - **CSV**: files named `*.csv`, read with Polars schema inference
//! - **Workbooks**: anything else, first worksheet via calamine
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use labuan_ingest::load_table;
//!
//! let df = load_table(Path::new("returns/2023.xlsx"))?;
//! ```

mod csv;
mod error;
mod loader;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use csv::{read_csv_table, validate_encoding};
pub use loader::{SourceKind, load_table};
pub use workbook::read_workbook_table;
