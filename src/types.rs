//! Core types for processed receipts

use crate::total::TotalAmount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One message run through the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// IMAP sequence number (0 for messages read from disk)
    pub seq: u32,

    /// Message ID from headers
    pub message_id: Option<String>,

    /// Subject line
    pub subject: String,

    /// Date sent, if the header parses
    pub date: Option<DateTime<Utc>>,

    /// Text of all HTML parts before normalization
    pub text: String,

    /// First total found in the text
    pub total: Option<TotalAmount>,
}

impl Receipt {
    /// Check if a total was found
    #[must_use]
    pub const fn has_total(&self) -> bool {
        self.total.is_some()
    }

    /// The matched total, or an empty string
    #[must_use]
    pub fn total_str(&self) -> &str {
        self.total.as_ref().map_or("", TotalAmount::as_str)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Итоговая сумма: {}", self.total_str())
    }
}
