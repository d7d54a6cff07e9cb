//! Date parsing and digit-box rendering.
//!
//! Form date boxes take one digit each, so a date is rendered as its
//! zero-padded digits separated by padding spaces: day 7 becomes `"0  7"`,
//! year 2021 becomes `"2   0   2   1"`.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use labuan_model::fields::PERIOD_SEPARATOR;
use labuan_model::{DateParts, PeriodParts, YearDigits};

/// Spaces between day and month digits.
pub const DAY_MONTH_GAP: usize = 2;

/// Spaces between year digits.
pub const YEAR_GAP: usize = 3;

/// Date-only formats, tried in order. Ambiguous numeric dates read month
/// first (`03/04/2021` is 4 March); day-first forms only catch values whose
/// first number cannot be a month, such as `15/03/2021`.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%m.%d.%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%B %d, %Y",
];

/// Datetime formats; only the date is kept.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Strict format for each half of a period field.
const PERIOD_FORMAT: &str = "%d-%m-%Y";

/// Parse a date written in any of the common layouts found in returns.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Parse one half of a period, which must be `dd-mm-yyyy`.
pub fn parse_period_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), PERIOD_FORMAT).ok()
}

/// Split `"<from> hingga <to>"` at the first separator. Without a separator
/// the whole value is `from` and `to` is absent.
pub fn split_period(value: &str) -> PeriodParts {
    match value.split_once(PERIOD_SEPARATOR) {
        Some((from, to)) => PeriodParts {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
        },
        None => PeriodParts {
            from: Some(value.to_string()),
            to: None,
        },
    }
}

/// Zero-pad `value` to `width` digits and join the digits with `gap` spaces.
pub fn spaced_digits(value: u32, width: usize, gap: usize) -> String {
    let padded = format!("{value:0width$}");
    let separator = " ".repeat(gap);
    padded
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Render a date into its digit boxes.
pub fn decompose_date(date: NaiveDate, year_digits: YearDigits) -> DateParts {
    let year = u32::try_from(date.year()).unwrap_or_default();
    let year = match year_digits {
        YearDigits::Four => year,
        YearDigits::Two => year % 100,
    };
    DateParts {
        day: spaced_digits(date.day(), 2, DAY_MONTH_GAP),
        month: spaced_digits(date.month(), 2, DAY_MONTH_GAP),
        year: spaced_digits(year, year_digits.width(), YEAR_GAP),
    }
}
