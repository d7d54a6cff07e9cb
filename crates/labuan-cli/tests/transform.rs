//! Integration tests for the transform command's library pieces.

use std::fs;
use std::path::{Path, PathBuf};

use labuan_cli::output::write_report;
use labuan_cli::pipeline::transform_file;
use labuan_cli::summary::{column_section, miss_table};
use labuan_model::{PipelineOptions, output_columns};
use tempfile::TempDir;

const FULL_HEADER: &str = "Tahun Taksiran,A1,A2,A3,A4,A5,A6,A7,A8,A9,A10,A11,A12,A13,A14,A15,A16,A17,A18,A19,A20,C1,C2,C3,C4,D1,D2,D3,D4";

const FULL_ROW: &str = "2023,Acme Holdings (Labuan) Ltd,\"Level 2, Main Office Tower, Jalan Merdeka, 87000 Labuan, Wilayah Persekutuan Labuan\",LE 1234567-08,Trading,Labuan,LL12345,15/03/2021,1,2,01-01-2022 hingga 31-12-2022,01-01-2022 hingga 31-12-2022,X,X,1234.5,X,X,X,X,X,X,0,0,0,0,0,0,0,0";

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn output_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn full_layout_csv_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "acme.csv", &format!("{FULL_HEADER}\n{FULL_ROW}\n"));
    let output = dir.path().join("acme_form.csv");

    let result = transform_file(&input, &output, &PipelineOptions::default()).unwrap();
    assert_eq!(result.report.rows, 1);
    assert_eq!(result.report.columns, 50);

    let lines = output_lines(&output);
    assert_eq!(lines.len(), 2);
    insta::assert_snapshot!(lines[0], @"year_1,year_2,year_3,year_4,A1,A1_1,A1_2,A2_address_1,A2_address_2,A2_postcode,A2_city,A2_state,A3,A4,A5,A6,A7_day,A7_month,A7_year,A8,A9,A10_from_day,A10_from_month,A10_from_year,A10_to_day,A10_to_month,A10_to_year,A11_from_day,A11_from_month,A11_from_year,A11_to_day,A11_to_month,A11_to_year,A12,A13,A14,A15,A16,A17,A18,A19,A20,C1,C2,C3,C4,D1,D2,D3,D4");

    let row = &lines[1];
    assert!(row.starts_with("2,0,2,3,Acme Holdings (Labuan) Ltd,ACME HOLDINGS (LABUAN) LTD,"));
    assert!(row.contains("\"LEVEL 2, MAIN OFFICE TOWER, JALAN MERDEKA\""));
    assert!(row.contains(",87000,"));
    assert!(row.contains(",W.P. LABUAN,1234567,"));
    assert!(row.contains(",1  5,0  3,2   0   2   1,"));
    assert!(row.contains(",1234.5000,"));
}

#[test]
fn basic_layout_needs_only_basic_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "basic.csv",
        "Tahun Taksiran,A1,A2,A3,A4,A5,A6,A7,A8,A9\n\
         2024,Beta Ltd,\"Unit 5, Jalan Sabah, 88000 Kota Kinabalu, Sabah\",123,Fund,Labuan,LL1,2020-06-01,1,2\n",
    );
    let output = dir.path().join("basic_form.csv");

    let result = transform_file(&input, &output, &PipelineOptions::basic()).unwrap();
    assert_eq!(result.report.columns, 21);

    let lines = output_lines(&output);
    insta::assert_snapshot!(lines[0], @"year_1,year_2,year_3,year_4,A1,A1_1,A1_2,A2_address_1,A2_address_2,A2_postcode,A2_city,A2_state,A3,A4,A5,A6,A7_day,A7_month,A7_year,A8,A9");
    assert!(lines[1].contains(",88000,\"KOTA KINABALU,\",SABAH,123,"));
}

#[test]
fn missing_input_reports_load_failure() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.xlsx");
    let output = dir.path().join("absent_form.csv");

    let err = transform_file(&input, &output, &PipelineOptions::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("error loading spreadsheet"));
    assert!(message.contains("file not found"));
    assert!(!output.exists());
}

#[test]
fn missing_column_names_the_code() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "short.csv", "Tahun Taksiran,A1\n2023,Acme\n");
    let output = dir.path().join("short_form.csv");

    let err = transform_file(&input, &output, &PipelineOptions::basic()).unwrap_err();
    assert!(format!("{err:#}").contains("required column 'A2' not found"));
}

#[test]
fn run_report_is_json() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "acme.csv", &format!("{FULL_HEADER}\n{FULL_ROW}\n"));
    let output = dir.path().join("acme_form.csv");
    let report_path = dir.path().join("report.json");

    let result = transform_file(&input, &output, &PipelineOptions::default()).unwrap();
    write_report(&result, &report_path).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["rows"], 1);
    assert_eq!(report["columns"], 50);
    assert_eq!(report["options"]["year_digits"], "Four");
    assert_eq!(report["misses"]["A2_postcode"], 0);
    assert_eq!(report["misses"]["A7"], 0);
}

#[test]
fn miss_table_lists_every_field() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "acme.csv", &format!("{FULL_HEADER}\n{FULL_ROW}\n"));
    let output = dir.path().join("acme_form.csv");

    let result = transform_file(&input, &output, &PipelineOptions::default()).unwrap();
    let rendered = miss_table(&result).force_no_tty().to_string();
    for field in result.report.misses.keys() {
        assert!(rendered.contains(field.as_str()), "{field} missing from table");
    }
    assert!(rendered.contains("TOTAL"));
}

#[test]
fn layout_sections_follow_form_order() {
    let mut sections: Vec<&str> = Vec::new();
    for column in output_columns(&PipelineOptions::default()) {
        let section = column_section(column);
        if sections.last() != Some(&section) {
            sections.push(section);
        }
    }
    insta::assert_snapshot!(sections.join(" | "), @"Tahun Taksiran | Part A | Periods | Part A (extended) | Part C | Part D");
}
