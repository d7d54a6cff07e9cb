//! Configuration options for form processing.

use serde::{Deserialize, Serialize};

/// How many year digits are printed in a date's year boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YearDigits {
    /// Last two digits, e.g. `"2   1"` for 2021.
    Two,
    /// Full year, e.g. `"2   0   2   1"`.
    #[default]
    Four,
}

impl YearDigits {
    /// Number of digit boxes.
    pub fn width(self) -> usize {
        match self {
            YearDigits::Two => 2,
            YearDigits::Four => 4,
        }
    }
}

/// Options controlling which parts of the form are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Project the Part C and Part D boxes (`C1`..`C4`, `D1`..`D4`).
    pub include_part_c: bool,

    /// Decompose the `A10`/`A11` periods and project `A10`..`A20`.
    pub split_periods: bool,

    /// Year rendering for every date field.
    pub year_digits: YearDigits,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            include_part_c: true,
            split_periods: true,
            year_digits: YearDigits::Four,
        }
    }
}

impl PipelineOptions {
    /// The minimal layout: identity, address and commencement date only.
    pub fn basic() -> Self {
        Self {
            include_part_c: false,
            split_periods: false,
            year_digits: YearDigits::Four,
        }
    }

    #[must_use]
    pub fn with_part_c(mut self, enable: bool) -> Self {
        self.include_part_c = enable;
        self
    }

    #[must_use]
    pub fn with_periods(mut self, enable: bool) -> Self {
        self.split_periods = enable;
        self
    }

    #[must_use]
    pub fn with_year_digits(mut self, digits: YearDigits) -> Self {
        self.year_digits = digits;
        self
    }
}
