//! Loading source files through the public entry point.

use std::io::Write;

use labuan_ingest::{IngestError, load_table};
use tempfile::Builder;

fn temp_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn csv_keeps_raw_header_names() {
    let file = temp_file(
        ".csv",
        b"Tahun Taksiran, A1 ,\"A7 (Commencement\nDate)\"\n2023,ACME,01/02/2020\n",
    );
    let df = load_table(file.path()).unwrap();

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(
        names,
        vec!["Tahun Taksiran", " A1 ", "A7 (Commencement\nDate)"]
    );
    assert_eq!(df.height(), 1);
}

#[test]
fn csv_with_multiple_rows() {
    let file = temp_file(".csv", b"A1,A2\nONE,ADDR 1\nTWO,ADDR 2\n");
    let df = load_table(file.path()).unwrap();
    assert_eq!(df.height(), 2);
    let a1 = df.column("A1").unwrap().str().unwrap();
    assert_eq!(a1.get(1), Some("TWO"));
}

#[test]
fn unreadable_workbook_is_a_load_error() {
    let file = temp_file(".xlsx", b"this is not a zip archive");
    let err = load_table(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::Workbook { .. }));
    assert!(err.to_string().starts_with("failed to read workbook"));
}

#[test]
fn missing_workbook_is_not_found() {
    let err = load_table(std::path::Path::new("/nonexistent/return.xlsx")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
