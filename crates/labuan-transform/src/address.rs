//! Address decomposition by elimination.
//!
//! A free-text correspondence address such as
//! `"NO 1, JALAN X, TAMAN Y, 50000 KUALA LUMPUR, WILAYAH PERSEKUTUAN KUALA LUMPUR"`
//! is split into the line before the postcode, the postcode, the state (from a
//! fixed gazetteer) and the city, which is whatever is left once the other
//! three are removed. The city step is a heuristic, not a parser: repeated
//! fragments are removed everywhere they occur.

use std::sync::LazyLock;

use labuan_model::fields::ADDRESS_LINE_WIDTH;
use labuan_model::{AddressComponents, MALAYSIA_STATES, abbreviate_state};
use regex::Regex;

use crate::text::{first_two_lines, split_string};

/// A standalone five-digit token.
static POSTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]{5}\b").expect("Invalid postcode regex"));

/// First gazetteer entry contained in `address`. Case-sensitive; callers
/// upper-case the address first.
pub fn extract_state(address: &str) -> Option<&'static str> {
    MALAYSIA_STATES
        .iter()
        .copied()
        .find(|state| address.contains(state))
}

/// First standalone five-digit token.
pub fn extract_postcode(address: &str) -> Option<&str> {
    POSTCODE_REGEX.find(address).map(|m| m.as_str())
}

/// Text before the first postcode, trimmed.
pub fn extract_address_line(address: &str) -> Option<&str> {
    POSTCODE_REGEX
        .find(address)
        .map(|m| address[..m.start()].trim())
}

/// Remove the line, postcode and state from `address` and trim the rest.
///
/// All three must be present and non-empty, otherwise there is nothing to
/// eliminate against and the city is unknown.
pub fn extract_city(
    address: &str,
    line: Option<&str>,
    postcode: Option<&str>,
    state: Option<&str>,
) -> Option<String> {
    let (line, postcode, state) = match (line, postcode, state) {
        (Some(l), Some(p), Some(s)) if !l.is_empty() && !p.is_empty() && !s.is_empty() => {
            (l, p, s)
        }
        _ => return None,
    };
    let remainder = address
        .replace(line, "")
        .replace(postcode, "")
        .replace(state, "");
    Some(remainder.trim().to_string())
}

/// Decompose an address. The address is upper-cased first so that every
/// component is taken from the same text. The returned state is already
/// abbreviated (`W.P.`, `F.T.`); the city was computed from the long form.
pub fn parse_address(address: &str) -> AddressComponents {
    let upper = address.to_uppercase();
    let line = extract_address_line(&upper);
    let postcode = extract_postcode(&upper);
    let state = extract_state(&upper);
    let city = extract_city(&upper, line, postcode, state);

    AddressComponents {
        line: line.map(str::to_string),
        postcode: postcode.map(str::to_string),
        state: state.map(abbreviate_state),
        city,
        country: None,
    }
}

/// Wrap an address line into the two printed address rows.
///
/// The line is split on commas, so each row has its comma separators
/// restored: doubled spaces become `", "` after trimming.
pub fn wrap_address_line(line: &str) -> (String, String) {
    let chunks = split_string(&line.to_uppercase(), ",", ADDRESS_LINE_WIDTH);
    let (first, second) = first_two_lines(&chunks);
    (restore_commas(&first), restore_commas(&second))
}

fn restore_commas(chunk: &str) -> String {
    chunk.trim().replace("  ", ", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_found_by_containment() {
        assert_eq!(
            extract_state("12 JALAN ABC, 50000 SELANGOR"),
            Some("SELANGOR")
        );
        assert_eq!(extract_state("12 JALAN ABC, 50000"), None);
    }

    #[test]
    fn state_lookup_is_case_sensitive() {
        assert_eq!(extract_state("12 jalan abc, 50000 selangor"), None);
    }

    #[test]
    fn postcode_must_stand_alone() {
        assert_eq!(extract_postcode("LOT 123456, 87000 LABUAN"), Some("87000"));
        assert_eq!(extract_postcode("LOT 1234, LABUAN"), None);
    }

    #[test]
    fn line_is_text_before_postcode() {
        assert_eq!(
            extract_address_line("NO 1 JALAN X, 50000 KUALA LUMPUR"),
            Some("NO 1 JALAN X,")
        );
        assert_eq!(extract_address_line("NO 1 JALAN X"), None);
    }

    #[test]
    fn city_is_the_remainder() {
        let address = "NO 1 JALAN X, 50000 KUALA LUMPUR";
        let city = extract_city(
            address,
            Some("NO 1 JALAN X,"),
            Some("50000"),
            Some("KUALA LUMPUR"),
        );
        assert_eq!(city.as_deref(), Some(""));
    }

    #[test]
    fn city_requires_all_three_components() {
        assert_eq!(
            extract_city("NO 1, 50000 KOTA", Some("NO 1,"), Some("50000"), None),
            None
        );
        assert_eq!(
            extract_city("50000 KOTA SELANGOR", Some(""), Some("50000"), Some("SELANGOR")),
            None
        );
    }

    #[test]
    fn parse_labuan_address() {
        let parts = parse_address(
            "Level 2, Main Office Tower, Jalan Merdeka, 87000 Labuan, Wilayah Persekutuan Labuan",
        );
        assert_eq!(
            parts.line.as_deref(),
            Some("LEVEL 2, MAIN OFFICE TOWER, JALAN MERDEKA,")
        );
        assert_eq!(parts.postcode.as_deref(), Some("87000"));
        assert_eq!(parts.state.as_deref(), Some("W.P. LABUAN"));
        assert_eq!(parts.city.as_deref(), Some("LABUAN,"));
        assert_eq!(parts.country, None);
    }

    #[test]
    fn parse_without_postcode_yields_only_state() {
        let parts = parse_address("JALAN Y, SABAH");
        assert_eq!(parts.line, None);
        assert_eq!(parts.postcode, None);
        assert_eq!(parts.state.as_deref(), Some("SABAH"));
        assert_eq!(parts.city, None);
    }

    #[test]
    fn wrap_restores_commas() {
        let (first, second) = wrap_address_line("No 1, Jalan X, Taman Y,");
        assert_eq!(first, "NO 1, JALAN X, TAMAN Y");
        assert_eq!(second, "");
    }

    #[test]
    fn wrap_spills_to_second_line() {
        let line = "LOT 10, BLOCK A, FINANCIAL PARK COMPLEX, JALAN MERDEKA, KAMPUNG RANCHA-RANCHA,";
        let (first, second) = wrap_address_line(line);
        assert_eq!(first, "LOT 10, BLOCK A, FINANCIAL PARK COMPLEX, JALAN MERDEKA");
        assert_eq!(second, "KAMPUNG RANCHA-RANCHA");
        assert!(first.chars().count() <= 62);
    }
}
