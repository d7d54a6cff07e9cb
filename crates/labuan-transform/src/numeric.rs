//! Monetary amounts as printed on the form.

/// Fractional digits printed for monetary boxes.
pub const MONETARY_DECIMALS: usize = 4;

/// Render an amount with exactly four decimal places. Nulls stay null.
pub fn format_monetary(value: Option<f64>) -> Option<String> {
    value.map(|v| format!("{v:.prec$}", prec = MONETARY_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_four_decimals() {
        assert_eq!(format_monetary(Some(1234.5)).as_deref(), Some("1234.5000"));
        assert_eq!(format_monetary(Some(0.0)).as_deref(), Some("0.0000"));
        assert_eq!(format_monetary(Some(0.12345678)).as_deref(), Some("0.1235"));
    }

    #[test]
    fn null_passes_through() {
        assert_eq!(format_monetary(None), None);
    }
}
