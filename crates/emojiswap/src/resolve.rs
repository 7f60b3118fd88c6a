#![forbid(unsafe_code)]

//! Key candidates and image resolution with per-scalar fallback.
//!
//! Resolution first asks for the primary key of the whole sequence. When the
//! image set has no such image, the sequence is walked from its end towards
//! its start. Joiners and emoji variation selectors accumulate into a tail;
//! each visible scalar is looked up alone and, together with the tail that
//! follows it, becomes either an image piece or a literal text piece. The
//! pieces cover the whole sequence, so nothing is ever dropped: in the worst
//! case the output for the span is the original text.

use std::ops::Range;

use emojiswap_core::classify::classify;
use emojiswap_core::sequence::Sequence;

use crate::key::{KeyFormat, candidate_keys};
use crate::lookup::ImageLookup;
use crate::plan::{PlanEntry, ResolvedImage};

/// A segmented emoji sequence ready for lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementCandidate {
    /// Byte range in the source text.
    pub range: Range<usize>,
    /// The source text in `range`.
    pub original: String,
    /// Lookup keys from most to least specific.
    pub keys: Vec<String>,
}

impl ReplacementCandidate {
    #[must_use]
    pub fn from_sequence(sequence: &Sequence, format: &KeyFormat<'_>, use_modifiers: bool) -> Self {
        Self {
            range: sequence.range(),
            original: sequence.text(),
            keys: candidate_keys(sequence.scalars(), format, use_modifiers),
        }
    }

    /// The key for the whole sequence.
    #[must_use]
    pub fn primary_key(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }
}

/// Resolves candidates against an image lookup.
#[derive(Debug)]
pub struct Resolver<'a, L: ?Sized> {
    format: KeyFormat<'a>,
    lookup: &'a L,
}

impl<'a, L> Resolver<'a, L>
where
    L: ImageLookup + ?Sized,
{
    #[must_use]
    pub fn new(format: KeyFormat<'a>, lookup: &'a L) -> Self {
        Self { format, lookup }
    }

    /// Resolve one candidate into plan entries ordered by range. The entries
    /// exactly tile `candidate.range`.
    pub fn resolve(&self, candidate: &ReplacementCandidate) -> Vec<PlanEntry<L::Handle>> {
        if let Some(key) = candidate.primary_key() {
            if let Some(handle) = self.lookup.lookup(key) {
                return vec![PlanEntry::image(
                    candidate.range.clone(),
                    candidate.original.clone(),
                    ResolvedImage {
                        key: key.to_string(),
                        handle,
                    },
                )];
            }
            tracing::debug!(key, "primary key missing, resolving scalars one by one");
        }
        self.fallback(candidate)
    }

    fn fallback(&self, candidate: &ReplacementCandidate) -> Vec<PlanEntry<L::Handle>> {
        let base = candidate.range.start;
        let mut pieces: Vec<PlanEntry<L::Handle>> = Vec::new();
        let mut tail_end = candidate.original.len();

        for (i, c) in candidate.original.char_indices().rev() {
            if classify(c).is_invisible() {
                continue;
            }
            let span = i..tail_end;
            let text = &candidate.original[span.clone()];
            let range = base + span.start..base + span.end;
            let key = self.format.single(c);
            match self.lookup.lookup(&key) {
                Some(handle) => {
                    pieces.push(PlanEntry::image(range, text.to_string(), ResolvedImage { key, handle }));
                }
                None => {
                    tracing::trace!(key = %key, "no image for scalar, keeping text");
                    push_text(&mut pieces, range, text);
                }
            }
            tail_end = i;
        }

        if tail_end > 0 {
            let text = &candidate.original[..tail_end];
            push_text(&mut pieces, base..base + tail_end, text);
        }

        pieces.reverse();
        pieces
    }
}

/// Push a text piece that precedes every piece pushed so far, merging it
/// with an adjacent text piece.
fn push_text<H>(pieces: &mut Vec<PlanEntry<H>>, range: Range<usize>, text: &str) {
    if let Some(next) = pieces.last_mut() {
        if next.image.is_none() && next.range.start == range.end {
            next.range.start = range.start;
            next.original.insert_str(0, text);
            return;
        }
    }
    pieces.push(PlanEntry::text(range, text.to_string()));
}
