use receipt_total::target_sequence;

#[test]
fn test_target_sequence() {
    assert_eq!(target_sequence(10, 3), Some(7));
    assert_eq!(target_sequence(5, 0), Some(5));
    assert_eq!(target_sequence(4, 3), Some(1));
}

#[test]
fn test_target_sequence_out_of_range() {
    assert_eq!(target_sequence(3, 3), None);
    assert_eq!(target_sequence(2, 3), None);
    assert_eq!(target_sequence(0, 0), None);
}
