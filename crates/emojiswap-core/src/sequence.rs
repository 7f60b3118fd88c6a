#![forbid(unsafe_code)]

//! A run of scalars believed to form one emoji.

use std::fmt;
use std::ops::Range;

use smallvec::SmallVec;

use crate::classify::{
    ScalarClass, classify, is_keycap_base, is_keycap_mark, is_variation_selector_16,
};

/// An ordered run of scalars plus the byte range of the source text it was
/// read from.
///
/// The range always addresses exactly the scalars held: `&source[range]`
/// yields the same characters as [`Sequence::scalars`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    scalars: SmallVec<[char; 8]>,
    range: Range<usize>,
    last: Option<ScalarClass>,
}

impl Sequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append scalars that begin at byte `offset` of the source.
    ///
    /// Appending to an empty sequence anchors it at `offset`; otherwise
    /// `offset` must continue the current range.
    pub fn append(&mut self, offset: usize, scalars: &[char]) {
        if scalars.is_empty() {
            return;
        }
        if self.scalars.is_empty() {
            self.range = offset..offset;
        }
        debug_assert_eq!(offset, self.range.end, "sequence appends must be contiguous");
        self.range.end += scalars.iter().map(|c| c.len_utf8()).sum::<usize>();
        self.scalars.extend_from_slice(scalars);
        self.last = scalars.last().copied().map(classify);
    }

    /// Remove the most recently appended scalar, shrinking the range.
    pub fn pop(&mut self) -> Option<char> {
        let popped = self.scalars.pop()?;
        self.range.end -= popped.len_utf8();
        self.last = self.scalars.last().copied().map(classify);
        Some(popped)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    #[inline]
    #[must_use]
    pub fn scalars(&self) -> &[char] {
        &self.scalars
    }

    /// Byte range in the source text.
    #[inline]
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Class of the most recently appended scalar.
    #[inline]
    #[must_use]
    pub fn last_class(&self) -> Option<ScalarClass> {
        self.last
    }

    /// Complete once the last appended scalar does not bind to a follower.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.last.is_some_and(|class| !class.is_binding())
    }

    #[inline]
    #[must_use]
    pub fn ends_with_joiner(&self) -> bool {
        self.last == Some(ScalarClass::ZeroWidthJoiner)
    }

    /// Every keycap base in the run is enclosed: followed by U+20E3, with
    /// an optional U+FE0F in between.
    #[must_use]
    pub fn is_keycap_valid(&self) -> bool {
        self.scalars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| is_keycap_base(c))
            .all(|(i, _)| {
                self.scalars[i + 1..]
                    .iter()
                    .copied()
                    .find(|&c| !is_variation_selector_16(c))
                    .is_some_and(is_keycap_mark)
            })
    }

    /// The scalars as a string.
    #[must_use]
    pub fn text(&self) -> String {
        self.scalars.iter().collect()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.scalars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
