//! Greedy word wrapping for fixed-width form lines.

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit regex"));

/// Split `text` on `separator` and pack the words into chunks of at most
/// `max_len` characters, joining words inside a chunk with a single space.
///
/// A word longer than `max_len` becomes its own oversized chunk; nothing is
/// truncated. Always returns at least one chunk: empty input yields `[""]`.
///
/// ```
/// use labuan_transform::text::split_string;
///
/// assert_eq!(split_string("AAAA BBBB CCCC", " ", 9), vec!["AAAA BBBB", "CCCC"]);
/// ```
pub fn split_string(text: &str, separator: &str, max_len: usize) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split(separator) {
        let word_len = word.chars().count();
        let joiner = usize::from(!current.is_empty());
        if current_len + word_len + joiner > max_len && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += word_len + 1;
        }
    }

    if !current.is_empty() || parts.is_empty() {
        parts.push(current);
    }
    parts
}

/// The two printed lines of a wrapped value. Chunks past the second are
/// dropped; the second line is empty when everything fits on one.
pub fn first_two_lines(chunks: &[String]) -> (String, String) {
    let first = chunks.first().cloned().unwrap_or_default();
    let second = chunks.get(1).cloned().unwrap_or_default();
    (first, second)
}

/// First run of ASCII digits, e.g. the number inside `"C 1234567-08"`.
pub fn first_digit_run(value: &str) -> Option<&str> {
    DIGIT_RUN_REGEX.find(value).map(|m| m.as_str())
}
