//! Selection of the HTML body parts of a message

use crate::error::{ParseError, Result};
use crate::html::html_to_text;
use mailparse::{DispositionType, ParsedMail};
use tracing::debug;

/// Collect the text of every inline `text/html` part of a message.
///
/// Each part is converted with [`html_to_text`] and appended with one
/// leading space. Multipart containers are walked recursively; attachments
/// and non-HTML parts are skipped. A message without HTML parts yields an
/// empty string.
pub fn extract_html_text(parsed: &ParsedMail) -> Result<String> {
    let mut text = String::new();
    collect_html_parts(parsed, &mut text)?;
    Ok(text)
}

fn collect_html_parts(part: &ParsedMail, text: &mut String) -> Result<()> {
    if !part.subparts.is_empty() {
        for subpart in &part.subparts {
            collect_html_parts(subpart, text)?;
        }
        return Ok(());
    }

    if !is_inline_html(part) {
        return Ok(());
    }

    let body = part
        .get_body()
        .map_err(|e| ParseError::Decode(e.to_string()))?;
    debug!(bytes = body.len(), charset = %part.ctype.charset, "Extracting HTML part");

    text.push(' ');
    text.push_str(&html_to_text(&body));
    Ok(())
}

fn is_inline_html(part: &ParsedMail) -> bool {
    let attachment = matches!(
        part.get_content_disposition().disposition,
        DispositionType::Attachment
    );

    !attachment && part.ctype.mimetype.to_lowercase().contains("text/html")
}
