//! Derived values produced while filling the form.

use serde::{Deserialize, Serialize};

/// Components of a free-text address, decomposed by elimination.
///
/// `line`, `postcode` and `state` are verbatim substrings of the source
/// address when present. `city` is whatever remains after removing them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponents {
    pub line: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    /// Never populated by the parser; the form prints no country box.
    pub country: Option<String>,
}

/// Day, month and year rendered as spaced digits for pre-printed boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// The two halves of a `<from> hingga <to>` period field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodParts {
    pub from: Option<String>,
    pub to: Option<String>,
}
