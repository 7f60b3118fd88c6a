#![forbid(unsafe_code)]

//! Image lookup keys.
//!
//! A key is the lowercase hexadecimal code point of each scalar, zero padded
//! to a minimum width and joined by a separator. Joiners and the emoji
//! variation selector never appear in keys.
//!
//! ```
//! use emojiswap::key::KeyFormat;
//!
//! let twemoji = KeyFormat::new(2, "-");
//! assert_eq!(twemoji.key(['#', '\u{FE0F}', '\u{20E3}']), "23-20e3");
//!
//! let noto = KeyFormat::new(4, "_");
//! assert_eq!(noto.key(['\u{1F1FA}', '\u{1F1F8}']), "1f1fa_1f1f8");
//! ```

use emojiswap_core::classify::{classify, is_modifier};

use crate::config::{Config, MAX_CODE_POINT_WIDTH};

/// Format a single code point as lowercase hex padded to `width` digits.
#[inline]
#[must_use]
pub fn format_code_point(c: char, width: usize) -> String {
    format!("{:0width$x}", c as u32)
}

/// Key formatting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFormat<'a> {
    width: usize,
    separator: &'a str,
}

impl<'a> KeyFormat<'a> {
    /// `width` is clamped to 8.
    #[must_use]
    pub fn new(width: u8, separator: &'a str) -> Self {
        Self {
            width: usize::from(width.min(MAX_CODE_POINT_WIDTH)),
            separator,
        }
    }

    #[must_use]
    pub fn from_config(config: &'a Config) -> Self {
        Self::new(config.minimum_code_point_width(), config.separator())
    }

    /// Build the key for `scalars`, skipping joiners and emoji variation
    /// selectors.
    #[must_use]
    pub fn key<I>(&self, scalars: I) -> String
    where
        I: IntoIterator<Item = char>,
    {
        let mut key = String::new();
        for c in scalars.into_iter().filter(|&c| !classify(c).is_invisible()) {
            if !key.is_empty() {
                key.push_str(self.separator);
            }
            key.push_str(&format_code_point(c, self.width));
        }
        key
    }

    /// Key for one scalar.
    #[must_use]
    pub fn single(&self, c: char) -> String {
        format_code_point(c, self.width)
    }
}

/// Scalars that participate in the primary key of a sequence.
pub fn key_scalars(scalars: &[char], use_modifiers: bool) -> impl Iterator<Item = char> + '_ {
    scalars
        .iter()
        .copied()
        .filter(|&c| !classify(c).is_invisible())
        .filter(move |&c| use_modifiers || !is_modifier(c))
}

/// Primary key: the whole sequence with joiners and selectors stripped.
#[must_use]
pub fn primary_key(scalars: &[char], format: &KeyFormat<'_>, use_modifiers: bool) -> String {
    format.key(key_scalars(scalars, use_modifiers))
}

/// Candidate keys from most to least specific: the primary key followed by
/// each shorter prefix of the keyed scalars, ending with the first scalar
/// alone.
#[must_use]
pub fn candidate_keys(scalars: &[char], format: &KeyFormat<'_>, use_modifiers: bool) -> Vec<String> {
    let keyed: Vec<char> = key_scalars(scalars, use_modifiers).collect();
    (1..=keyed.len())
        .rev()
        .map(|len| format.key(keyed[..len].iter().copied()))
        .collect()
}
