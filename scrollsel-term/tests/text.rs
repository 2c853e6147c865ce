use scrollsel_term::text::{char_width, display_width, fit_to_width, truncate_to_width};

#[test]
fn test_widths() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate_to_width("hello", 5), "hello");
    assert_eq!(truncate_to_width("hello world", 5), "hell…");
    assert_eq!(truncate_to_width("hello", 0), "");
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}

#[test]
fn test_fit_pads_and_truncates() {
    assert_eq!(fit_to_width("ab", 4), "ab  ");
    assert_eq!(fit_to_width("abcdef", 4), "abc…");
    assert_eq!(fit_to_width("", 2), "  ");
}
