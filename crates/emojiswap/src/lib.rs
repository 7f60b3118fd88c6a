#![forbid(unsafe_code)]

//! Replace emoji sequences in text with images from a custom image set.
//!
//! # Role in emojiswap
//! `emojiswap` is the public facade. It builds lookup keys for the sequences
//! found by `emojiswap-core`, resolves them through an injected
//! [`ImageLookup`] and produces a [`Converted`] document that can be turned
//! back into the original text.
//!
//! # Primary responsibilities
//! - **Configuration**: [`Config`] and the [`ImageSet`] naming presets.
//! - **Keys**: [`key::KeyFormat`] and candidate keys per sequence.
//! - **Resolution**: [`resolve::Resolver`] with per-scalar fallback.
//! - **Plans**: [`plan::ReplacementPlan`] applied from the highest offset down.
//! - **Conversion**: [`Emojiswap::convert`], [`Emojiswap::revert`] and
//!   [`Emojiswap::reconvert`].
//!
//! # How it fits
//! ```text
//! text ─▶ segment ─▶ candidates ─▶ resolve (lookup) ─▶ plan ─▶ Converted
//!                                                              │
//! text ◀──────────────────────── revert (stored originals) ◀───┘
//! ```

pub mod config;
pub mod convert;
pub mod key;
pub mod lookup;
pub mod offsets;
pub mod plan;
pub mod resolve;

pub use config::{Config, ConfigError, ImageSet};
pub use convert::{AttachmentBounds, Converted, Emojiswap, Image, Span, TextAttributes};
pub use emojiswap_core::{EMOJI_DATA_VERSION, ScalarClass, Sequence, classify, is_emoji, segment};
pub use lookup::{ImageLookup, ImageMap, NoImages, lookup_fn};
pub use plan::{PlanEntry, ReplacementPlan};
pub use resolve::{ReplacementCandidate, Resolver};
