use receipt_total::*;

#[test]
fn test_find_total_basic() {
    let total = find_total("итого123.45").unwrap();
    assert_eq!(total.as_str(), "итого123.45");
    assert_eq!(total.amount(), "123.45");
    assert_eq!(total.to_string(), "итого123.45");
}

#[test]
fn test_case_and_separator_insensitive() {
    let a = find_total(&normalize_text("Итого 123,45")).unwrap();
    let b = find_total(&normalize_text("ИТОГО123.45")).unwrap();
    assert!(a.as_str().ends_with("123.45"));
    assert_eq!(a, b);
}

#[test]
fn test_marker_without_digits() {
    assert!(find_total("итогоруб.").is_none());
    assert!(find_total("итого").is_none());
}

#[test]
fn test_digits_without_marker() {
    assert!(find_total("сумма123.45").is_none());
}

#[test]
fn test_integer_amount_does_not_match() {
    assert!(find_total("итого123руб").is_none());
}

#[test]
fn test_marker_must_touch_number() {
    assert!(find_total("итогокоплате:123.45руб.").is_none());
    assert!(find_total("итого:123.45").is_none());
}

#[test]
fn test_first_match_wins() {
    let total = find_total("итого1.00итого2.00").unwrap();
    assert_eq!(total.as_str(), "итого1.00");
}

#[test]
fn test_stops_after_first_decimal_group() {
    let total = find_total("итого1.2.3").unwrap();
    assert_eq!(total.as_str(), "итого1.2");
}

#[test]
fn test_match_inside_text() {
    let total = find_total("заказ№42итого99.90руб.спасибо").unwrap();
    assert_eq!(total.as_str(), "итого99.90");
}

#[test]
fn test_non_ascii_digits_ignored() {
    assert!(find_total("итого١٢.٣٤").is_none());
}

#[test]
fn test_custom_marker() {
    let matcher = TotalMatcher::new("Total").unwrap();
    assert_eq!(matcher.marker(), "total");

    let total = matcher.find("Subtotal5.00TOTAL9.99").unwrap();
    assert_eq!(total.as_str(), "total5.00");
}

#[test]
fn test_marker_is_escaped() {
    let matcher = TotalMatcher::new("sum(").unwrap();
    assert_eq!(matcher.find("sum(1.5)").unwrap().amount(), "1.5");
    assert!(matcher.find("sum1.5").is_none());
}

#[test]
fn test_empty_marker_rejected() {
    assert!(matches!(
        TotalMatcher::new("  "),
        Err(ParseError::InvalidMarker(_))
    ));
}

#[test]
fn test_default_matcher_uses_default_marker() {
    assert_eq!(TotalMatcher::default().marker(), DEFAULT_MARKER);
}

#[test]
fn test_extractor_normalizes_first() {
    let extractor = TotalExtractor::default();
    let total = extractor.extract(" Итого\u{a0}1\u{a0}250,00 руб.").unwrap();
    assert_eq!(total.as_str(), "итого1250.00");
}

#[test]
fn test_extractor_custom_separators() {
    let extractor = TotalExtractor::new(TotalMatcher::new("total").unwrap(), vec![';']);
    assert_eq!(extractor.decimal_separators(), &[';']);
    assert_eq!(extractor.extract("Total 12;30").unwrap().amount(), "12.30");
    assert!(extractor.extract("Total 12,30").is_none());
}

#[test]
fn test_marker_with_inner_whitespace() {
    let matcher = TotalMatcher::new("к  оплате").unwrap();
    assert_eq!(matcher.marker(), "коплате");

    let total = matcher.find(&normalize_text("Итого к оплате 123,45 руб.")).unwrap();
    assert_eq!(total.as_str(), "коплате123.45");
}

#[test]
fn test_marker_with_separator_normalized() {
    let extractor = TotalExtractor::from_marker("Total;", vec![';']).unwrap();
    assert_eq!(extractor.matcher().marker(), "total.");
    assert_eq!(extractor.extract("TOTAL; 4;20").unwrap().amount(), "4.20");
}
