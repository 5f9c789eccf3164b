//! Total amount matching

use crate::error::{ParseError, Result};
use crate::normalize::{DEFAULT_DECIMAL_SEPARATORS, normalize_text_with};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Marker word that must precede the total
pub const DEFAULT_MARKER: &str = "итого";

static DEFAULT_MATCHER: LazyLock<TotalMatcher> =
    LazyLock::new(|| TotalMatcher::new(DEFAULT_MARKER).unwrap());

/// A matched total, e.g. `итого123.45`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalAmount {
    /// Matched slice, marker included
    pub raw: String,

    /// Number part of the match
    pub amount: String,
}

impl TotalAmount {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The number without the marker, e.g. `123.45`
    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }
}

impl fmt::Display for TotalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Finds `<marker><digits>.<digits>` in normalized text
#[derive(Debug, Clone)]
pub struct TotalMatcher {
    marker: String,
    pattern: Regex,
}

impl TotalMatcher {
    /// Build a matcher for `marker`. Matching is case-insensitive.
    pub fn new(marker: &str) -> Result<Self> {
        Self::with_separators(marker, DEFAULT_DECIMAL_SEPARATORS)
    }

    /// Build a matcher for text normalized with `decimal_separators`.
    ///
    /// The marker goes through the same normalization as the text, so
    /// `"к оплате"` matches `коплате123.45`.
    pub fn with_separators(marker: &str, decimal_separators: &[char]) -> Result<Self> {
        let marker = normalize_text_with(marker, decimal_separators).to_lowercase();
        if marker.is_empty() {
            return Err(ParseError::InvalidMarker(marker));
        }

        let pattern = Regex::new(&format!(r"{}([0-9]+\.[0-9]+)", regex::escape(&marker)))
            .map_err(|e| ParseError::InvalidMarker(e.to_string()))?;

        Ok(Self { marker, pattern })
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Return the first total in `normalized`, scanning left to right
    #[must_use]
    pub fn find(&self, normalized: &str) -> Option<TotalAmount> {
        let lower = normalized.to_lowercase();
        let caps = self.pattern.captures(&lower)?;
        let whole = caps.get(0)?;
        let amount = caps.get(1)?;

        Some(TotalAmount {
            raw: whole.as_str().to_string(),
            amount: amount.as_str().to_string(),
        })
    }
}

impl Default for TotalMatcher {
    fn default() -> Self {
        DEFAULT_MATCHER.clone()
    }
}

/// Find the first `итого<digits>.<digits>` in already normalized text
#[must_use]
pub fn find_total(normalized: &str) -> Option<TotalAmount> {
    DEFAULT_MATCHER.find(normalized)
}

/// Normalization plus matching over plain text
#[derive(Debug, Clone)]
pub struct TotalExtractor {
    matcher: TotalMatcher,
    decimal_separators: Vec<char>,
}

impl TotalExtractor {
    /// Extractor for `marker` with its matcher built for `decimal_separators`
    pub fn from_marker(marker: &str, decimal_separators: Vec<char>) -> Result<Self> {
        let matcher = TotalMatcher::with_separators(marker, &decimal_separators)?;
        Ok(Self::new(matcher, decimal_separators))
    }

    #[must_use]
    pub const fn new(matcher: TotalMatcher, decimal_separators: Vec<char>) -> Self {
        Self {
            matcher,
            decimal_separators,
        }
    }

    #[must_use]
    pub const fn matcher(&self) -> &TotalMatcher {
        &self.matcher
    }

    #[must_use]
    pub fn decimal_separators(&self) -> &[char] {
        &self.decimal_separators
    }

    /// Normalize `text` and return its first total
    #[must_use]
    pub fn extract(&self, text: &str) -> Option<TotalAmount> {
        let normalized = normalize_text_with(text, &self.decimal_separators);
        self.matcher.find(&normalized)
    }
}

impl Default for TotalExtractor {
    fn default() -> Self {
        Self::new(TotalMatcher::default(), DEFAULT_DECIMAL_SEPARATORS.to_vec())
    }
}
