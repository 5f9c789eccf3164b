//! HTML to plain text conversion

use scraper::{Html, Node};
use tracing::debug;

/// Render the text content of an HTML document.
///
/// Text nodes are appended in document order (pre-order walk), elements
/// contribute nothing of their own. Entities are decoded by the parser and
/// surrounding whitespace is trimmed from the result.
///
/// The parser follows the HTML5 error-recovery rules, so unclosed tags,
/// missing `html`/`body` elements and stray text still produce a tree.
#[must_use]
pub fn html_to_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    if !document.errors.is_empty() {
        debug!(
            errors = document.errors.len(),
            "Recovered from malformed markup"
        );
    }

    let mut text = String::with_capacity(markup.len());
    for node in document.tree.root().descendants() {
        if let Node::Text(fragment) = node.value() {
            text.push_str(fragment);
        }
    }

    text.trim().to_string()
}
