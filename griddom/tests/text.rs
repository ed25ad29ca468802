use griddom::text::{align_offset, display_width, truncate_to_width};
use griddom::TextAlign;

// ============================================================================
// Display Width
// ============================================================================

#[test]
fn test_ascii_width() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_wide_chars_count_double() {
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width("a日b"), 4);
}

// ============================================================================
// Truncation
// ============================================================================

#[test]
fn test_truncate_fits_untouched() {
    assert_eq!(truncate_to_width("abc", 3), "abc");
    assert_eq!(truncate_to_width("abc", 10), "abc");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 5), "hell…");
    assert_eq!(display_width(&truncate_to_width("hello world", 5)), 5);
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_truncate_respects_wide_chars() {
    // A wide char that would straddle the cut is dropped entirely.
    let out = truncate_to_width("日本語", 4);
    assert_eq!(out, "日…");
    assert!(display_width(&out) <= 4);
}

// ============================================================================
// Alignment
// ============================================================================

#[test]
fn test_align_offsets() {
    assert_eq!(align_offset(4, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
    assert_eq!(align_offset(4, 10, TextAlign::Right), 6);
}

#[test]
fn test_align_overflow_pins_left() {
    assert_eq!(align_offset(20, 10, TextAlign::Right), 0);
}
