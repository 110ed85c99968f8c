//! UTF-8 helpers for caret handling.

use std::borrow::Cow;

/// Clamp a byte index to a valid UTF-8 character boundary of `s`.
///
/// Indices past the end clamp to `s.len()`; indices inside a multi-byte
/// character move back to its start.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "1€"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 99), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Previous caret position before `i`, or 0 at the start.
///
/// ```
/// use input_core::prev_cursor_boundary;
///
/// let s = "1€2";
/// assert_eq!(prev_cursor_boundary(s, 5), 4);
/// assert_eq!(prev_cursor_boundary(s, 4), 1);
/// assert_eq!(prev_cursor_boundary(s, 0), 0);
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Next caret position after `i`, or `s.len()` at the end.
///
/// ```
/// use input_core::next_cursor_boundary;
///
/// let s = "1€2";
/// assert_eq!(next_cursor_boundary(s, 1), 4);
/// assert_eq!(next_cursor_boundary(s, 5), 5);
/// ```
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i >= s.len() {
        return s.len();
    }

    let mut it = s[i..].char_indices();
    let _ = it.next();
    it.next().map(|(idx, _)| i + idx).unwrap_or(s.len())
}

/// Strip CR and LF; embedded controls are single-line.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("10,5"), "10,5");
/// assert_eq!(filter_single_line("10\r\n,5"), "10,5");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains('\n') && !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|&c| c != '\n' && c != '\r').collect())
}
