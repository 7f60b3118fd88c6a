#![forbid(unsafe_code)]

//! Grouping of text into maximal emoji sequences.
//!
//! The segmenter walks extended grapheme clusters and runs a small state
//! machine over the scalars of each cluster:
//!
//! | State    | Scalar                              | Action                                   |
//! |----------|-------------------------------------|------------------------------------------|
//! | Empty    | emoji                               | append, run opens                        |
//! | Empty    | anything else                       | stop scanning the cluster                |
//! | Open     | ZWJ, U+FE0F, U+20E3                 | append, run stays open                   |
//! | Open     | U+FE0E                              | pop the preceding scalar, seal the run   |
//! | Open     | emoji                               | append                                   |
//! | Open     | anything else                       | seal the run, stop scanning the cluster  |
//!
//! Regional indicator pairs and base + skin tone modifier pairs are appended
//! atomically; a complete run is sealed before such a pair starts.
//!
//! At a cluster boundary the open run is sealed unless it ends with a zero
//! width joiner and the next cluster opens with an emoji, in which case the
//! run continues into it. Keycap bases never join across a boundary, in
//! either direction. The last run is always sealed at end of input.
//!
//! Sealing discards runs with a keycap base not enclosed by U+20E3, and
//! drops empty runs. Text outside every sealed run is plain text.
//!
//! # Example
//! ```
//! use emojiswap_core::segment::segment;
//!
//! let runs = segment("flag 🇺🇸, #1 and 1\u{FE0F}\u{20E3}");
//! let texts: Vec<String> = runs.iter().map(|run| run.text()).collect();
//! assert_eq!(texts, vec!["🇺🇸", "1\u{FE0F}\u{20E3}"]);
//! ```

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

use crate::classify::{
    ScalarClass, classify, is_emoji, is_keycap_base, is_modifier, is_regional_indicator,
};
use crate::sequence::Sequence;

/// Incremental segmenter fed one grapheme cluster at a time.
#[derive(Debug, Default)]
pub struct Segmenter {
    current: Sequence,
    results: Vec<Sequence>,
}

impl Segmenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the cluster `cluster` located at byte `offset` of the source.
    pub fn feed_cluster(&mut self, offset: usize, cluster: &str) {
        let scalars: SmallVec<[(usize, char); 8]> = cluster
            .char_indices()
            .map(|(i, c)| (offset + i, c))
            .collect();

        if !self.current.is_empty() {
            let continues = self.current.ends_with_joiner()
                && self.current.range().end == offset
                && !self.current.scalars().first().is_some_and(|&c| is_keycap_base(c))
                && scalars
                    .first()
                    .is_some_and(|&(_, c)| is_emoji(c) && !is_keycap_base(c));
            if !continues {
                self.finish();
            }
        }

        let mut i = 0;
        while i < scalars.len() {
            let (at, c) = scalars[i];
            let class = classify(c);

            if self.current.is_empty() {
                if !class.is_emoji() {
                    return;
                }
            } else {
                match class {
                    ScalarClass::VariationSelectorText => {
                        if let Some(popped) = self.current.pop() {
                            tracing::trace!(
                                at,
                                popped = %popped.escape_unicode(),
                                "text presentation requested"
                            );
                        }
                        self.finish();
                        return;
                    }
                    class if class.is_binding() => {
                        self.current.append(at, &[c]);
                        i += 1;
                        continue;
                    }
                    ScalarClass::NonEmoji => {
                        self.finish();
                        return;
                    }
                    _ => {}
                }
            }

            let next = scalars.get(i + 1).map(|&(_, n)| n);
            let paired = next.filter(|&n| match class {
                ScalarClass::RegionalIndicator => is_regional_indicator(n),
                ScalarClass::Modifier => false,
                _ => is_modifier(n),
            });

            match paired {
                Some(n) => {
                    if self.current.is_complete() {
                        self.finish();
                    }
                    self.current.append(at, &[c, n]);
                    i += 2;
                }
                None => {
                    self.current.append(at, &[c]);
                    i += 1;
                }
            }
        }
    }

    /// Seal the current run into the results.
    pub fn finish(&mut self) {
        let run = std::mem::take(&mut self.current);
        if run.is_empty() {
            return;
        }
        if !run.is_keycap_valid() {
            tracing::debug!(
                start = run.range().start,
                end = run.range().end,
                "discarding keycap sequence without enclosing keycap"
            );
            return;
        }
        tracing::trace!(
            start = run.range().start,
            end = run.range().end,
            scalars = run.len(),
            complete = run.is_complete(),
            "sealed emoji sequence"
        );
        self.results.push(run);
    }

    /// Seal the last run and return every sequence in source order.
    #[must_use]
    pub fn into_sequences(mut self) -> Vec<Sequence> {
        self.finish();
        self.results
    }
}

/// Segment `text` into emoji sequences with byte ranges into `text`.
#[must_use]
pub fn segment(text: &str) -> Vec<Sequence> {
    let mut segmenter = Segmenter::new();
    for (offset, cluster) in text.grapheme_indices(true) {
        segmenter.feed_cluster(offset, cluster);
    }
    segmenter.into_sequences()
}
