#![forbid(unsafe_code)]

//! Static emoji classification data.
//!
//! Block membership follows the Unicode emoji data for Emoji 5.0 (Unicode 10).
//! Symbols and Pictographs Extended-A postdates that release, so the whole
//! block is unassigned in this revision; it is listed so that a data update
//! only has to shrink its exception set.
//!
//! Every table is a sorted list of disjoint, closed `(start, end)` ranges and
//! is searched with [`slice::partition_point`]. Updating to a newer Unicode
//! revision is a data change in this file only.
//!
//! # Invariants
//!
//! 1. Each range list is sorted by start and pairwise disjoint.
//! 2. Block ranges in [`BLOCKS`] do not overlap one another.
//! 3. [`ADDITIONAL_CHARACTERS`] only lists code points outside every block.
//! 4. Exception lists only contain code points inside their own block.

/// Emoji data revision the tables are versioned against.
pub const EMOJI_DATA_VERSION: &str = "5.0";

/// A named Unicode block together with the code points inside it that are
/// not emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiBlock {
    /// Unicode block name.
    pub name: &'static str,
    /// First code point of the block.
    pub start: u32,
    /// Last code point of the block (inclusive).
    pub end: u32,
    /// Code points with no assigned character in the tracked revision.
    pub unassigned: &'static [(u32, u32)],
    /// Assigned characters without emoji presentation.
    pub non_emoji: &'static [(u32, u32)],
}

impl EmojiBlock {
    /// Whether `cp` falls inside the block range.
    #[inline]
    #[must_use]
    pub const fn contains(&self, cp: u32) -> bool {
        cp >= self.start && cp <= self.end
    }

    /// Whether `cp` lies in the block and is not excluded by either
    /// exception set.
    #[inline]
    #[must_use]
    pub fn is_emoji(&self, cp: u32) -> bool {
        self.contains(cp) && !in_ranges(self.unassigned, cp) && !in_ranges(self.non_emoji, cp)
    }
}

/// Test membership of `cp` in a sorted list of closed ranges.
#[inline]
#[must_use]
pub fn in_ranges(ranges: &[(u32, u32)], cp: u32) -> bool {
    let idx = ranges.partition_point(|&(start, _)| start <= cp);
    idx > 0 && cp <= ranges[idx - 1].1
}

/// Emoji blocks in lookup priority order.
pub static BLOCKS: [EmojiBlock; 7] = [
    EmojiBlock {
        name: "Miscellaneous Symbols",
        start: 0x2600,
        end: 0x26FF,
        unassigned: &[],
        non_emoji: MISCELLANEOUS_SYMBOLS_NON_EMOJI,
    },
    EmojiBlock {
        name: "Dingbats",
        start: 0x2700,
        end: 0x27BF,
        unassigned: &[],
        non_emoji: DINGBATS_NON_EMOJI,
    },
    EmojiBlock {
        name: "Miscellaneous Symbols and Pictographs",
        start: 0x1F300,
        end: 0x1F5FF,
        unassigned: &[],
        non_emoji: PICTOGRAPHS_NON_EMOJI,
    },
    EmojiBlock {
        name: "Emoticons",
        start: 0x1F600,
        end: 0x1F64F,
        unassigned: &[],
        non_emoji: &[],
    },
    EmojiBlock {
        name: "Transport and Map Symbols",
        start: 0x1F680,
        end: 0x1F6FF,
        unassigned: TRANSPORT_UNASSIGNED,
        non_emoji: TRANSPORT_NON_EMOJI,
    },
    EmojiBlock {
        name: "Supplemental Symbols and Pictographs",
        start: 0x1F900,
        end: 0x1F9FF,
        unassigned: SUPPLEMENTAL_UNASSIGNED,
        non_emoji: SUPPLEMENTAL_NON_EMOJI,
    },
    EmojiBlock {
        name: "Symbols and Pictographs Extended-A",
        start: 0x1FA70,
        end: 0x1FAFF,
        unassigned: EXTENDED_A_UNASSIGNED,
        non_emoji: &[],
    },
];

/// Emoji outside every block in [`BLOCKS`], including the keycap bases and
/// the regional indicator letters so that they are candidates before they
/// combine.
pub static ADDITIONAL_CHARACTERS: &[(u32, u32)] = &[
    // Basic Latin: number sign, asterisk, digits
    (0x0023, 0x0023),
    (0x002A, 0x002A),
    (0x0030, 0x0039),
    // Latin-1 Supplement
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    // General Punctuation
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    // Letterlike Symbols
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    // Arrows
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    // Miscellaneous Technical
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    // Enclosed Alphanumerics
    (0x24C2, 0x24C2),
    // Geometric Shapes
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    // Supplemental Arrows-B
    (0x2934, 0x2935),
    // Miscellaneous Symbols and Arrows
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    // CJK Symbols and Punctuation
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    // Enclosed CJK Letters and Months
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    // Mahjong Tiles
    (0x1F004, 0x1F004),
    // Playing Cards
    (0x1F0CF, 0x1F0CF),
    // Enclosed Alphanumeric Supplement
    (0x1F170, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1E6, 0x1F1FF),
    // Enclosed Ideographic Supplement
    (0x1F201, 0x1F202),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F250, 0x1F251),
];

/// Bases of keycap sequences: `#`, `*` and the ASCII digits.
pub static KEYCAP_BASES: &[(u32, u32)] = &[(0x0023, 0x0023), (0x002A, 0x002A), (0x0030, 0x0039)];

const MISCELLANEOUS_SYMBOLS_NON_EMOJI: &[(u32, u32)] = &[
    (0x2605, 0x260D), (0x260F, 0x2610), (0x2612, 0x2613), (0x2616, 0x2617), (0x2619, 0x261C),
    (0x261E, 0x261F), (0x2621, 0x2621), (0x2624, 0x2625), (0x2627, 0x2629), (0x262B, 0x262D),
    (0x2630, 0x2637), (0x263B, 0x263F), (0x2641, 0x2641), (0x2643, 0x2647), (0x2654, 0x265F),
    (0x2661, 0x2662), (0x2664, 0x2664), (0x2667, 0x2667), (0x2669, 0x267A), (0x267C, 0x267E),
    (0x2680, 0x2691), (0x2698, 0x2698), (0x269A, 0x269A), (0x269D, 0x269F), (0x26A2, 0x26A9),
    (0x26AC, 0x26AF), (0x26B2, 0x26BC), (0x26BF, 0x26C3), (0x26C6, 0x26C7), (0x26C9, 0x26CD),
    (0x26D0, 0x26D0), (0x26D2, 0x26D2), (0x26D5, 0x26E8), (0x26EB, 0x26EF), (0x26F6, 0x26F6),
    (0x26FB, 0x26FC), (0x26FE, 0x26FF),
];

const DINGBATS_NON_EMOJI: &[(u32, u32)] = &[
    (0x2700, 0x2701), (0x2703, 0x2704), (0x2706, 0x2707), (0x270E, 0x270E), (0x2710, 0x2711),
    (0x2713, 0x2713), (0x2715, 0x2715), (0x2717, 0x271C), (0x271E, 0x2720), (0x2722, 0x2727),
    (0x2729, 0x2732), (0x2735, 0x2743), (0x2745, 0x2746), (0x2748, 0x274B), (0x274D, 0x274D),
    (0x274F, 0x2752), (0x2756, 0x2756), (0x2758, 0x2762), (0x2765, 0x2794), (0x2798, 0x27A0),
    (0x27A2, 0x27AF), (0x27B1, 0x27BE),
];

const PICTOGRAPHS_NON_EMOJI: &[(u32, u32)] = &[
    (0x1F322, 0x1F323), (0x1F394, 0x1F395), (0x1F398, 0x1F398), (0x1F39C, 0x1F39D),
    (0x1F3F1, 0x1F3F2), (0x1F3F6, 0x1F3F6), (0x1F4FE, 0x1F4FE), (0x1F53E, 0x1F548),
    (0x1F54F, 0x1F54F), (0x1F568, 0x1F56E), (0x1F571, 0x1F572), (0x1F57B, 0x1F586),
    (0x1F588, 0x1F589), (0x1F58E, 0x1F58F), (0x1F591, 0x1F594), (0x1F597, 0x1F5A3),
    (0x1F5A6, 0x1F5A7), (0x1F5A9, 0x1F5B0), (0x1F5B3, 0x1F5BB), (0x1F5BD, 0x1F5C1),
    (0x1F5C5, 0x1F5D0), (0x1F5D4, 0x1F5DB), (0x1F5DF, 0x1F5E0), (0x1F5E2, 0x1F5E2),
    (0x1F5E4, 0x1F5E7), (0x1F5E9, 0x1F5EE), (0x1F5F0, 0x1F5F2), (0x1F5F4, 0x1F5F9),
];

const TRANSPORT_UNASSIGNED: &[(u32, u32)] =
    &[(0x1F6D5, 0x1F6DF), (0x1F6ED, 0x1F6EF), (0x1F6F9, 0x1F6FF)];

const TRANSPORT_NON_EMOJI: &[(u32, u32)] = &[
    (0x1F6C6, 0x1F6CA), (0x1F6D3, 0x1F6D4), (0x1F6E6, 0x1F6E8), (0x1F6EA, 0x1F6EA),
    (0x1F6F1, 0x1F6F2),
];

const SUPPLEMENTAL_UNASSIGNED: &[(u32, u32)] = &[
    (0x1F90C, 0x1F90F), (0x1F93F, 0x1F93F), (0x1F94D, 0x1F94F), (0x1F96C, 0x1F97F),
    (0x1F998, 0x1F9BF), (0x1F9C1, 0x1F9CF), (0x1F9E7, 0x1F9FF),
];

const SUPPLEMENTAL_NON_EMOJI: &[(u32, u32)] =
    &[(0x1F900, 0x1F90B), (0x1F93B, 0x1F93B), (0x1F946, 0x1F946)];

const EXTENDED_A_UNASSIGNED: &[(u32, u32)] = &[(0x1FA70, 0x1FAFF)];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_disjoint(name: &str, ranges: &[(u32, u32)]) {
        for &(start, end) in ranges {
            assert!(start <= end, "{name}: inverted range {start:#x}..={end:#x}");
        }
        for pair in ranges.windows(2) {
            assert!(
                pair[0].1 < pair[1].0,
                "{name}: ranges {:#x}..={:#x} and {:#x}..={:#x} overlap or are unsorted",
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1
            );
        }
    }

    #[test]
    fn every_table_is_sorted_and_disjoint() {
        assert_sorted_disjoint("additional", ADDITIONAL_CHARACTERS);
        assert_sorted_disjoint("keycap", KEYCAP_BASES);
        for block in &BLOCKS {
            assert_sorted_disjoint(block.name, block.unassigned);
            assert_sorted_disjoint(block.name, block.non_emoji);
        }
    }

    #[test]
    fn blocks_do_not_overlap() {
        let mut spans: Vec<(u32, u32)> = BLOCKS.iter().map(|b| (b.start, b.end)).collect();
        spans.sort_unstable();
        assert_sorted_disjoint("blocks", &spans);
    }

    #[test]
    fn exceptions_stay_inside_their_block() {
        for block in &BLOCKS {
            for &(start, end) in block.unassigned.iter().chain(block.non_emoji) {
                assert!(block.contains(start) && block.contains(end), "{}", block.name);
            }
        }
    }

    #[test]
    fn additional_characters_are_outside_blocks() {
        for &(start, end) in ADDITIONAL_CHARACTERS {
            for cp in start..=end {
                assert!(
                    !BLOCKS.iter().any(|b| b.contains(cp)),
                    "{cp:#x} is listed as additional but lies in a block"
                );
            }
        }
    }

    #[test]
    fn keycap_bases_are_additional_characters() {
        for &(start, end) in KEYCAP_BASES {
            for cp in start..=end {
                assert!(in_ranges(ADDITIONAL_CHARACTERS, cp));
            }
        }
    }

    #[test]
    fn in_ranges_boundaries() {
        let ranges = &[(10, 12), (20, 20)];
        assert!(!in_ranges(ranges, 9));
        assert!(in_ranges(ranges, 10));
        assert!(in_ranges(ranges, 12));
        assert!(!in_ranges(ranges, 13));
        assert!(in_ranges(ranges, 20));
        assert!(!in_ranges(ranges, 21));
        assert!(!in_ranges(&[], 0));
    }

    #[test]
    fn block_exceptions_apply() {
        let transport = &BLOCKS[4];
        assert!(transport.is_emoji(0x1F680)); // rocket
        assert!(!transport.is_emoji(0x1F6C6)); // non-emoji
        assert!(!transport.is_emoji(0x1F6D5)); // unassigned
        assert!(!transport.is_emoji(0x1F700)); // outside
    }

    fn block(name: &str) -> &'static EmojiBlock {
        BLOCKS
            .iter()
            .find(|b| b.name == name)
            .unwrap_or_else(|| panic!("no block named {name}"))
    }

    #[test]
    fn tables_match_emoji_5_0() {
        assert_eq!(EMOJI_DATA_VERSION, "5.0");

        let transport = block("Transport and Map Symbols");
        assert!(transport.is_emoji(0x1F6F7)); // sled, new in 5.0
        assert!(transport.is_emoji(0x1F6F8)); // flying saucer, new in 5.0
        assert!(!transport.is_emoji(0x1F6D3)); // stupa, assigned but not emoji
        assert!(!transport.is_emoji(0x1F6F9)); // skateboard, 11.0

        let supplemental = block("Supplemental Symbols and Pictographs");
        for cp in [0x1F91F, 0x1F92A, 0x1F931, 0x1F94C, 0x1F95F, 0x1F96B, 0x1F992, 0x1F9D0, 0x1F9E6] {
            assert!(supplemental.is_emoji(cp), "{cp:#x} is emoji in 5.0");
        }
        for cp in [0x1F900, 0x1F90B, 0x1F94D, 0x1F96C, 0x1F970, 0x1F998, 0x1F9C1, 0x1F9E7] {
            assert!(!supplemental.is_emoji(cp), "{cp:#x} is not emoji in 5.0");
        }

        let extended_a = block("Symbols and Pictographs Extended-A");
        for cp in extended_a.start..=extended_a.end {
            assert!(!extended_a.is_emoji(cp), "{cp:#x} postdates 5.0");
        }

        assert!(block("Emoticons").is_emoji(0x1F64F));
        assert!(block("Miscellaneous Symbols").is_emoji(0x26FD)); // fuel pump
        assert!(!block("Miscellaneous Symbols").is_emoji(0x265F)); // chess pawn, 11.0
        assert!(!block("Miscellaneous Symbols").is_emoji(0x267E)); // infinity, 11.0
    }
}
