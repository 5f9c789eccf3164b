use receipt_total::html_to_text;

#[test]
fn test_text_nodes_concatenated() {
    let text = html_to_text("<html><body><h1>Hello</h1><p>World</p></body></html>");
    assert_eq!(text, "HelloWorld");
}

#[test]
fn test_text_only_document_trimmed() {
    assert_eq!(html_to_text("  plain receipt text \n"), "plain receipt text");
}

#[test]
fn test_document_order_preserved() {
    let text = html_to_text("<div><span>Итого</span> 5,00 <b>руб.</b></div>");
    assert_eq!(text, "Итого 5,00 руб.");
}

#[test]
fn test_entities_decoded() {
    let text = html_to_text("<b>a &amp; b&nbsp;c &lt;d&gt;</b>");
    assert_eq!(text, "a & b\u{a0}c <d>");
}

#[test]
fn test_head_text_included() {
    let text = html_to_text("<html><head><title>Чек</title></head><body>Итого</body></html>");
    assert_eq!(text, "ЧекИтого");
}

#[test]
fn test_unclosed_tags_recovered() {
    assert_eq!(html_to_text("<p>Итого 10.50<p>"), "Итого 10.50");
}

#[test]
fn test_table_markup() {
    let text = html_to_text("<table><tr><td>Итого</td><td>1 250,00</td></tr></table>");
    assert_eq!(text, "Итого1 250,00");
}

#[test]
fn test_garbage_markup_does_not_fail() {
    let text = html_to_text("<<<>>>&&&");
    assert!(text.contains("&&&"));
}

#[test]
fn test_empty_input() {
    assert_eq!(html_to_text(""), "");
}
