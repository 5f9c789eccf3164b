//! Whitespace and decimal separator normalization

use regex::Regex;
use std::sync::LazyLock;

/// Decimal separators rewritten to `.` by [`normalize_text`]
pub const DEFAULT_DECIMAL_SEPARATORS: &[char] = &[','];

static SPACES_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Normalize plain text for total matching.
///
/// Every Unicode whitespace character (tabs, newlines, no-break spaces and
/// the like) is unified to an ordinary space, all spaces are then deleted,
/// and commas become periods. `"Итого\u{a0}1 234,50"` becomes
/// `"Итого1234.50"`.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    normalize_text_with(text, DEFAULT_DECIMAL_SEPARATORS)
}

/// Same as [`normalize_text`] with a custom set of decimal separators.
#[must_use]
pub fn normalize_text_with(text: &str, decimal_separators: &[char]) -> String {
    let unified: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    // Runs are deleted, not collapsed
    let joined = SPACES_REGEX.replace_all(&unified, "");

    joined
        .chars()
        .map(|c| {
            if decimal_separators.contains(&c) {
                '.'
            } else {
                c
            }
        })
        .collect()
}
