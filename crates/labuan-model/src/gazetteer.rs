//! Malaysian states and federal territories as printed on the form.

/// Ordered gazetteer scanned by state extraction. First match wins.
pub const MALAYSIA_STATES: [&str; 17] = [
    "JOHOR",
    "KEDAH",
    "KELANTAN",
    "MELAKA",
    "NEGERI SEMBILAN",
    "PAHANG",
    "PULAU PINANG",
    "PERAK",
    "PERLIS",
    "SABAH",
    "SARAWAK",
    "SELANGOR",
    "TERENGGANU",
    "WILAYAH PERSEKUTUAN KUALA LUMPUR",
    "WILAYAH PERSEKUTUAN PUTRAJAYA",
    "WILAYAH PERSEKUTUAN LABUAN",
    "FEDERAL TERRITORY OF LABUAN",
];

/// Long-form prefixes shortened to fit the state box.
pub const STATE_ABBREVIATIONS: [(&str, &str); 2] = [
    ("WILAYAH PERSEKUTUAN", "W.P."),
    ("FEDERAL TERRITORY OF", "F.T."),
];

/// Apply [`STATE_ABBREVIATIONS`] to a state value.
pub fn abbreviate_state(state: &str) -> String {
    STATE_ABBREVIATIONS
        .iter()
        .fold(state.to_string(), |acc, (long, short)| acc.replace(long, short))
}
