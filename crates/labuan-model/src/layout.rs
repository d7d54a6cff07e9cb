//! Output column layouts.
//!
//! Each list mirrors the box order of the printed form. The full layout is
//! `BASIC_COLUMNS`, then (when periods are split) `PERIOD_COLUMNS` and
//! `PART_A_EXTENDED_COLUMNS`, then (when Part C is included) `PART_C_COLUMNS`.

use crate::options::PipelineOptions;

/// Assessment year, Part A identity, address, and commencement date.
pub const BASIC_COLUMNS: [&str; 21] = [
    "year_1",
    "year_2",
    "year_3",
    "year_4",
    "A1",
    "A1_1",
    "A1_2",
    "A2_address_1",
    "A2_address_2",
    "A2_postcode",
    "A2_city",
    "A2_state",
    "A3",
    "A4",
    "A5",
    "A6",
    "A7_day",
    "A7_month",
    "A7_year",
    "A8",
    "A9",
];

/// Accounting (`A10`) and basis (`A11`) periods, decomposed per half.
pub const PERIOD_COLUMNS: [&str; 12] = [
    "A10_from_day",
    "A10_from_month",
    "A10_from_year",
    "A10_to_day",
    "A10_to_month",
    "A10_to_year",
    "A11_from_day",
    "A11_from_month",
    "A11_from_year",
    "A11_to_day",
    "A11_to_month",
    "A11_to_year",
];

/// Remaining Part A boxes, printed after the periods.
pub const PART_A_EXTENDED_COLUMNS: [&str; 9] =
    ["A12", "A13", "A14", "A15", "A16", "A17", "A18", "A19", "A20"];

/// Part C and Part D boxes.
pub const PART_C_COLUMNS: [&str; 8] = ["C1", "C2", "C3", "C4", "D1", "D2", "D3", "D4"];

/// Ordered output columns for the given options.
pub fn output_columns(options: &PipelineOptions) -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = BASIC_COLUMNS.to_vec();
    if options.split_periods {
        columns.extend(PERIOD_COLUMNS);
        columns.extend(PART_A_EXTENDED_COLUMNS);
    }
    if options.include_part_c {
        columns.extend(PART_C_COLUMNS);
    }
    columns
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn full_layout_has_no_duplicates() {
        let columns = output_columns(&PipelineOptions::default());
        let unique: BTreeSet<&str> = columns.iter().copied().collect();
        assert_eq!(unique.len(), columns.len());
        assert_eq!(columns.len(), 21 + 12 + 9 + 8);
    }

    #[test]
    fn basic_layout_stops_at_a9() {
        let columns = output_columns(&PipelineOptions::basic());
        assert_eq!(columns.first(), Some(&"year_1"));
        assert_eq!(columns.last(), Some(&"A9"));
    }

    #[test]
    fn part_c_follows_periods() {
        let columns = output_columns(&PipelineOptions::default());
        let a20 = columns.iter().position(|c| *c == "A20").unwrap();
        let c1 = columns.iter().position(|c| *c == "C1").unwrap();
        assert_eq!(c1, a20 + 1);
    }
}
