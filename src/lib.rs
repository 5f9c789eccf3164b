// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::significant_drop_tightening)]

//! Receipt Total Extractor
//!
//! Pulls the HTML body out of an email, renders it to plain text and finds
//! the first `итого<number>` figure in it.
//!
//! # Pipeline
//!
//! - [`extract_html_text`]: inline `text/html` parts, joined with spaces
//! - [`html_to_text`]: text nodes of the parsed document, trimmed
//! - [`normalize_text`]: whitespace removed, commas turned into periods
//! - [`find_total`]: first `итого\d+\.\d+`, case-insensitive
//!
//! # Example
//!
//! ```rust
//! use receipt_total::parse_receipt;
//!
//! let raw = "Subject: Receipt\r\nContent-Type: text/html; charset=utf-8\r\n\r\n\
//!            <p>Итого&nbsp;123,45 руб.</p>";
//! let receipt = parse_receipt(1, raw.as_bytes()).unwrap();
//!
//! assert_eq!(receipt.total_str(), "итого123.45");
//! ```

mod body;
mod config;
mod error;
mod fetch;
mod html;
mod normalize;
mod parser;
mod total;
mod types;

pub use body::extract_html_text;
pub use config::{ENV_FILE, ImapConfig, MatchConfig, load_env_file};
pub use error::{FetchError, ParseError, Result};
pub use fetch::{fetch_raw_message, fetch_receipt, target_sequence};
pub use html::html_to_text;
pub use normalize::{DEFAULT_DECIMAL_SEPARATORS, normalize_text, normalize_text_with};
pub use parser::{extract_total, parse_receipt, parse_receipt_with};
pub use total::{DEFAULT_MARKER, TotalAmount, TotalExtractor, TotalMatcher, find_total};
pub use types::Receipt;
