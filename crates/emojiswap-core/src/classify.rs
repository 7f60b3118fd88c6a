#![forbid(unsafe_code)]

//! Scalar classification for emoji sequences.
//!
//! Every function here is a pure lookup over the static tables in
//! [`crate::tables`]. Nothing allocates and nothing is cached.
//!
//! # Example
//! ```
//! use emojiswap_core::classify::{ScalarClass, classify, is_emoji};
//!
//! assert_eq!(classify('\u{200D}'), ScalarClass::ZeroWidthJoiner);
//! assert_eq!(classify('\u{1F1FA}'), ScalarClass::RegionalIndicator);
//! assert!(is_emoji('😀'));
//! assert!(!is_emoji('a'));
//! ```

use crate::tables::{ADDITIONAL_CHARACTERS, BLOCKS, KEYCAP_BASES, in_ranges};

const ZERO_WIDTH_JOINER: u32 = 0x200D;
const VARIATION_SELECTOR_15: u32 = 0xFE0E;
const VARIATION_SELECTOR_16: u32 = 0xFE0F;
const COMBINING_ENCLOSING_KEYCAP: u32 = 0x20E3;
const OBJECT_REPLACEMENT: u32 = 0xFFFC;
const REPLACEMENT: u32 = 0xFFFD;

/// Role a single scalar plays inside an emoji sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarClass {
    /// A pictograph that can start or extend a sequence.
    EmojiBase,
    /// U+200D ZERO WIDTH JOINER.
    ZeroWidthJoiner,
    /// U+FE0E, requests text presentation.
    VariationSelectorText,
    /// U+FE0F, requests emoji presentation.
    VariationSelectorEmoji,
    /// U+20E3 COMBINING ENCLOSING KEYCAP.
    KeycapMark,
    /// `#`, `*` or an ASCII digit.
    KeycapBase,
    /// U+1F1E6..=U+1F1FF.
    RegionalIndicator,
    /// Skin tone modifier, U+1F3FB..=U+1F3FF.
    Modifier,
    /// Anything else.
    NonEmoji,
}

impl ScalarClass {
    /// Binding scalars leave the sequence waiting for a following scalar.
    #[inline]
    #[must_use]
    pub const fn is_binding(self) -> bool {
        matches!(
            self,
            Self::ZeroWidthJoiner | Self::VariationSelectorEmoji | Self::KeycapMark
        )
    }

    /// Scalars that may start a sequence.
    #[inline]
    #[must_use]
    pub const fn is_emoji(self) -> bool {
        matches!(
            self,
            Self::EmojiBase | Self::KeycapBase | Self::RegionalIndicator | Self::Modifier
        )
    }

    /// Scalars that never receive an image of their own and ride along with
    /// the visible scalar before them.
    #[inline]
    #[must_use]
    pub const fn is_invisible(self) -> bool {
        matches!(self, Self::ZeroWidthJoiner | Self::VariationSelectorEmoji)
    }
}

/// Classify a scalar.
#[must_use]
pub fn classify(c: char) -> ScalarClass {
    match c as u32 {
        ZERO_WIDTH_JOINER => ScalarClass::ZeroWidthJoiner,
        VARIATION_SELECTOR_15 => ScalarClass::VariationSelectorText,
        VARIATION_SELECTOR_16 => ScalarClass::VariationSelectorEmoji,
        COMBINING_ENCLOSING_KEYCAP => ScalarClass::KeycapMark,
        0x1F1E6..=0x1F1FF => ScalarClass::RegionalIndicator,
        0x1F3FB..=0x1F3FF => ScalarClass::Modifier,
        _ if is_keycap_base(c) => ScalarClass::KeycapBase,
        _ if is_emoji(c) => ScalarClass::EmojiBase,
        _ => ScalarClass::NonEmoji,
    }
}

/// Whether `c` is an emoji candidate on its own.
///
/// The object replacement and replacement characters are rejected first.
/// Then the named blocks are tested in priority order; the first block whose
/// range contains the scalar decides, subtracting its exception sets. Scalars
/// outside every block fall back to the additional characters list.
#[must_use]
pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    if cp == OBJECT_REPLACEMENT || cp == REPLACEMENT {
        return false;
    }
    match BLOCKS.iter().find(|block| block.contains(cp)) {
        Some(block) => block.is_emoji(cp),
        None => in_ranges(ADDITIONAL_CHARACTERS, cp),
    }
}

#[inline]
#[must_use]
pub const fn is_zero_width_joiner(c: char) -> bool {
    c as u32 == ZERO_WIDTH_JOINER
}

/// U+FE0E, text presentation.
#[inline]
#[must_use]
pub const fn is_variation_selector_15(c: char) -> bool {
    c as u32 == VARIATION_SELECTOR_15
}

/// U+FE0F, emoji presentation.
#[inline]
#[must_use]
pub const fn is_variation_selector_16(c: char) -> bool {
    c as u32 == VARIATION_SELECTOR_16
}

#[inline]
#[must_use]
pub const fn is_regional_indicator(c: char) -> bool {
    matches!(c as u32, 0x1F1E6..=0x1F1FF)
}

#[inline]
#[must_use]
pub const fn is_modifier(c: char) -> bool {
    matches!(c as u32, 0x1F3FB..=0x1F3FF)
}

#[inline]
#[must_use]
pub const fn is_keycap_mark(c: char) -> bool {
    c as u32 == COMBINING_ENCLOSING_KEYCAP
}

#[inline]
#[must_use]
pub fn is_keycap_base(c: char) -> bool {
    in_ranges(KEYCAP_BASES, c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_scalars_classify_by_role() {
        assert_eq!(classify('\u{200D}'), ScalarClass::ZeroWidthJoiner);
        assert_eq!(classify('\u{FE0E}'), ScalarClass::VariationSelectorText);
        assert_eq!(classify('\u{FE0F}'), ScalarClass::VariationSelectorEmoji);
        assert_eq!(classify('\u{20E3}'), ScalarClass::KeycapMark);
        assert_eq!(classify('#'), ScalarClass::KeycapBase);
        assert_eq!(classify('7'), ScalarClass::KeycapBase);
        assert_eq!(classify('\u{1F1E6}'), ScalarClass::RegionalIndicator);
        assert_eq!(classify('\u{1F3FD}'), ScalarClass::Modifier);
        assert_eq!(classify('😀'), ScalarClass::EmojiBase);
        assert_eq!(classify('a'), ScalarClass::NonEmoji);
    }

    #[test]
    fn replacement_characters_are_never_emoji() {
        assert!(!is_emoji('\u{FFFC}'));
        assert!(!is_emoji('\u{FFFD}'));
    }

    #[test]
    fn emoticons_block_has_no_exceptions() {
        for cp in 0x1F600..=0x1F64F {
            let c = char::from_u32(cp).unwrap();
            assert!(is_emoji(c), "{cp:#x}");
        }
    }

    #[test]
    fn block_exceptions_are_respected() {
        assert!(is_emoji('\u{2600}')); // black sun with rays
        assert!(!is_emoji('\u{2605}')); // black star
        assert!(is_emoji('\u{2702}')); // black scissors
        assert!(!is_emoji('\u{2701}'));
        assert!(is_emoji('\u{1F680}')); // rocket
        assert!(!is_emoji('\u{1F6D5}')); // unassigned in tracked revision
        assert!(is_emoji('\u{1F923}'));
        assert!(!is_emoji('\u{1F93B}'));
        assert!(is_emoji('\u{1F92A}')); // 5.0
        assert!(is_emoji('\u{1F9D0}'));
        assert!(!is_emoji('\u{1F970}')); // 11.0
        assert!(!is_emoji('\u{1FA70}')); // 12.0
    }

    #[test]
    fn additional_characters_are_emoji() {
        assert!(is_emoji('#'));
        assert!(is_emoji('*'));
        assert!(is_emoji('0'));
        assert!(is_emoji('\u{00A9}'));
        assert!(is_emoji('\u{2B50}'));
        assert!(is_emoji('\u{1F004}'));
        assert!(is_emoji('\u{1F1FA}'));
        assert!(!is_emoji('\u{2B51}'));
    }

    #[test]
    fn modifiers_are_emoji_on_their_own() {
        for cp in 0x1F3FB..=0x1F3FF {
            let c = char::from_u32(cp).unwrap();
            assert!(is_modifier(c));
            assert!(is_emoji(c));
        }
    }

    #[test]
    fn joiners_and_selectors_are_not_emoji() {
        assert!(!is_emoji('\u{200D}'));
        assert!(!is_emoji('\u{FE0E}'));
        assert!(!is_emoji('\u{FE0F}'));
        assert!(!is_emoji('\u{20E3}'));
    }

    #[test]
    fn binding_and_invisible_sets() {
        assert!(ScalarClass::ZeroWidthJoiner.is_binding());
        assert!(ScalarClass::VariationSelectorEmoji.is_binding());
        assert!(ScalarClass::KeycapMark.is_binding());
        assert!(!ScalarClass::Modifier.is_binding());
        assert!(!ScalarClass::VariationSelectorText.is_binding());

        assert!(ScalarClass::ZeroWidthJoiner.is_invisible());
        assert!(ScalarClass::VariationSelectorEmoji.is_invisible());
        assert!(!ScalarClass::KeycapMark.is_invisible());
    }

    #[test]
    fn classification_agrees_with_predicates() {
        for cp in (0..0x20000u32).step_by(7) {
            let Some(c) = char::from_u32(cp) else { continue };
            let class = classify(c);
            assert_eq!(class.is_emoji(), is_emoji(c), "{cp:#x}");
            assert_eq!(class == ScalarClass::KeycapBase, is_keycap_base(c));
            assert_eq!(class == ScalarClass::RegionalIndicator, is_regional_indicator(c));
        }
    }
}
