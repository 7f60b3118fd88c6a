#![forbid(unsafe_code)]

//! Offset helpers for hosts that store text differently.
//!
//! Ranges in this crate are byte offsets into UTF-8 text. Hosts with UTF-16
//! storage can translate them with [`utf16_range`]. The cursor helpers
//! support the live-edit pattern: remember the cursor as a distance from the
//! end of the document, convert again, then place it back from the end.

use std::ops::Range;

/// Number of UTF-16 code units needed for `text`.
#[inline]
#[must_use]
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Translate a byte range of `text` into UTF-16 code units.
///
/// Returns `None` when the range is out of bounds or does not fall on char
/// boundaries.
///
/// ```
/// use emojiswap::offsets::utf16_range;
///
/// let text = "a😀b";
/// assert_eq!(utf16_range(text, 1..5), Some(1..3));
/// assert_eq!(utf16_range(text, 2..5), None);
/// ```
#[must_use]
pub fn utf16_range(text: &str, range: Range<usize>) -> Option<Range<usize>> {
    if range.start > range.end {
        return None;
    }
    let before = text.get(..range.start)?;
    let inside = text.get(range.clone())?;
    let start = utf16_len(before);
    Some(start..start + utf16_len(inside))
}

/// Distance of `cursor` from the end of `text`, in bytes.
#[inline]
#[must_use]
pub fn cursor_to_end(text: &str, cursor: usize) -> usize {
    text.len().saturating_sub(cursor)
}

/// Absolute cursor for a distance from the end of `text`, moved back to a
/// char boundary when needed.
#[must_use]
pub fn cursor_from_end(text: &str, from_end: usize) -> usize {
    let mut cursor = text.len().saturating_sub(from_end);
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}
