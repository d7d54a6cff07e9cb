//! Form-field codes read by the pipeline.
//!
//! Source columns are keyed by the code printed next to each box on the
//! paper form. Derived columns are named `<code>_<suffix>`.

/// Assessment year column; only row 0 is read.
pub const ASSESSMENT_YEAR: &str = "Tahun Taksiran";

/// Employer (entity) name.
pub const EMPLOYER_NAME: &str = "A1";

/// Correspondence address.
pub const ADDRESS_FIELD: &str = "A2";

/// Tax identification number; reduced to its digits.
pub const TIN_FIELD: &str = "A3";

/// Commencement / incorporation date.
pub const SINGLE_DATE_FIELD: &str = "A7";

/// Accounting and basis periods, written as `<from> hingga <to>`.
pub const PERIOD_FIELDS: [&str; 2] = ["A10", "A11"];

/// Monetary amount printed with four decimal places.
pub const MONETARY_FIELD: &str = "A14";

/// Literal separator between the two halves of a period field.
pub const PERIOD_SEPARATOR: &str = " hingga ";

/// Maximum characters per employer-name line.
pub const EMPLOYER_NAME_WIDTH: usize = 52;

/// Maximum characters per address line.
pub const ADDRESS_LINE_WIDTH: usize = 62;

/// Derived column names.
pub mod derived {
    /// `year_1` .. `year_4`, one per assessment-year digit box.
    pub fn year_digit(position: usize) -> String {
        format!("year_{position}")
    }

    /// Employer-name line `line` (1 or 2).
    pub fn name_line(code: &str, line: usize) -> String {
        format!("{code}_{line}")
    }

    /// Wrapped address line `line` (1 or 2).
    pub fn address_line(code: &str, line: usize) -> String {
        format!("{code}_address_{line}")
    }

    pub fn postcode(code: &str) -> String {
        format!("{code}_postcode")
    }

    pub fn city(code: &str) -> String {
        format!("{code}_city")
    }

    pub fn state(code: &str) -> String {
        format!("{code}_state")
    }

    /// Date component column, e.g. `A7_day` or `A10_from_month`.
    pub fn date_part(prefix: &str, part: &str) -> String {
        format!("{prefix}_{part}")
    }

    /// Raw half of a period field: `A10_from` / `A10_to`.
    pub fn period_half(code: &str, half: &str) -> String {
        format!("{code}_{half}")
    }
}

#[cfg(test)]
mod tests {
    use super::derived;

    #[test]
    fn derived_names_follow_form_codes() {
        assert_eq!(derived::year_digit(3), "year_3");
        assert_eq!(derived::name_line("A1", 2), "A1_2");
        assert_eq!(derived::address_line("A2", 1), "A2_address_1");
        assert_eq!(derived::postcode("A2"), "A2_postcode");
        assert_eq!(derived::date_part("A10_from", "day"), "A10_from_day");
        assert_eq!(derived::period_half("A11", "to"), "A11_to");
    }
}
