#![forbid(unsafe_code)]

//! Emoji classification and segmentation.
//!
//! # Role in emojiswap
//! `emojiswap-core` is the Unicode layer. It answers "what role does this
//! scalar play in an emoji?" from static tables and groups a text into the
//! maximal emoji sequences that an image set can replace. Key formatting,
//! image lookup and the replacement plan live in the `emojiswap` crate.
//!
//! # Primary responsibilities
//! - **Classification**: [`classify::classify`] and the `is_*` predicates.
//! - **Tables**: versioned block ranges and exception sets in [`tables`].
//! - **Segmentation**: [`segment::segment`] produces [`Sequence`] values with
//!   byte ranges that address exactly the scalars they hold.

pub mod classify;
pub mod segment;
pub mod sequence;
pub mod tables;

pub use classify::{ScalarClass, classify, is_emoji};
pub use segment::{Segmenter, segment};
pub use sequence::Sequence;
pub use tables::EMOJI_DATA_VERSION;
