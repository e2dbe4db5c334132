use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(15, 30));
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_try_from_range() {
    let Ok(span) = Span::try_from_range(50..100) else {
        panic!("expected Ok for valid range");
    };
    assert_eq!(span.to_range(), 50..100);
}

#[test]
fn test_span_try_from_range_too_large() {
    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Span::try_from_range(large..large + 1),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_range(0..large),
        Err(SpanError::EndTooLarge(_))
    ));
}

#[test]
#[allow(clippy::reversed_empty_ranges)]
fn test_span_try_from_range_inverted() {
    assert_eq!(
        Span::try_from_range(10..5),
        Err(SpanError::Inverted { start: 10, end: 5 })
    );
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::StartTooLarge(0x1_0000_0000).to_string();
    assert!(msg.contains("start"));
    assert!(msg.contains("0x100000000"));
}

#[test]
fn test_span_display() {
    assert_eq!(format!("{}", Span::new(3, 7)), "3..7");
    assert_eq!(format!("{:?}", Span::DUMMY), "0..0");
}
