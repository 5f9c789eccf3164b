//! Message parsing: headers plus the total extraction pipeline

use crate::body::extract_html_text;
use crate::error::{ParseError, Result};
use crate::total::{TotalAmount, TotalExtractor};
use crate::types::Receipt;
use chrono::{DateTime, Utc};
use mailparse::MailHeader;
use tracing::debug;

/// Parse raw message bytes and extract the total with the default marker
pub fn parse_receipt(seq: u32, raw: &[u8]) -> Result<Receipt> {
    parse_receipt_with(seq, raw, &TotalExtractor::default())
}

/// Parse raw message bytes and extract the total with `extractor`
pub fn parse_receipt_with(seq: u32, raw: &[u8], extractor: &TotalExtractor) -> Result<Receipt> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ParseError::Structure(e.to_string()))?;

    let message_id = find_header(&parsed.headers, "message-id");
    let subject = find_header(&parsed.headers, "subject").unwrap_or_default();
    let date = extract_date(&parsed.headers);
    let text = extract_html_text(&parsed)?;
    let total = extractor.extract(&text);

    debug!(
        seq,
        subject = %subject,
        found = total.is_some(),
        "Parsed receipt"
    );

    Ok(Receipt {
        seq,
        message_id,
        subject,
        date,
        text,
        total,
    })
}

/// Run only the pipeline: HTML parts, normalization, first total
pub fn extract_total(raw: &[u8]) -> Result<Option<TotalAmount>> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ParseError::Structure(e.to_string()))?;
    let text = extract_html_text(&parsed)?;
    Ok(TotalExtractor::default().extract(&text))
}

fn find_header(headers: &[MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(MailHeader::get_value)
}

fn extract_date(headers: &[MailHeader]) -> Option<DateTime<Utc>> {
    find_header(headers, "date")
        .and_then(|value| DateTime::parse_from_rfc2822(value.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
