#![forbid(unsafe_code)]

//! Replacement plans.
//!
//! A plan is the ordered list of decisions for one input string: every entry
//! names a byte range of the input and either the image chosen for it or
//! `None` to keep the text. Entries are sorted by range and never overlap.
//! Applying a plan walks the entries from the highest offset to the lowest so
//! that a replacement never moves the offsets of entries still pending.

use std::ops::Range;

use crate::convert::{Image, Span};

/// The image chosen for a plan entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage<H> {
    pub key: String,
    pub handle: H,
}

/// One decision in a [`ReplacementPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry<H> {
    /// Byte range of the input covered by this entry.
    pub range: Range<usize>,
    /// The input text in `range`.
    pub original: String,
    /// The image replacing the range, or `None` to keep the text.
    pub image: Option<ResolvedImage<H>>,
}

impl<H> PlanEntry<H> {
    #[must_use]
    pub fn image(range: Range<usize>, original: String, image: ResolvedImage<H>) -> Self {
        Self {
            range,
            original,
            image: Some(image),
        }
    }

    #[must_use]
    pub fn text(range: Range<usize>, original: String) -> Self {
        Self {
            range,
            original,
            image: None,
        }
    }

    /// The key of the chosen image, if any.
    #[must_use]
    pub fn chosen_key(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.key.as_str())
    }

    #[inline]
    #[must_use]
    pub fn is_replacement(&self) -> bool {
        self.image.is_some()
    }
}

/// Ordered, non-overlapping plan entries for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPlan<H> {
    entries: Vec<PlanEntry<H>>,
}

impl<H> Default for ReplacementPlan<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> ReplacementPlan<H> {
    /// Build a plan from entries. Entries are sorted by range start.
    #[must_use]
    pub fn new(mut entries: Vec<PlanEntry<H>>) -> Self {
        entries.sort_by_key(|entry| entry.range.start);
        debug_assert!(
            entries
                .windows(2)
                .all(|pair| pair[0].range.end <= pair[1].range.start),
            "plan entries overlap"
        );
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[PlanEntry<H>] {
        &self.entries
    }

    /// Entries that replace text with an image.
    pub fn replacements(&self) -> impl Iterator<Item = &PlanEntry<H>> {
        self.entries.iter().filter(|entry| entry.is_replacement())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Apply the plan to the text it was built from.
    ///
    /// With `revertible` set, every image keeps the exact text it replaced.
    /// Adjacent text spans are merged; an empty input yields no spans.
    #[must_use]
    pub fn apply(self, text: &str, revertible: bool) -> Vec<Span<H>> {
        let mut reversed: Vec<Span<H>> = Vec::with_capacity(self.entries.len() * 2 + 1);
        let mut end = text.len();

        for entry in self.entries.into_iter().rev() {
            let Some(image) = entry.image else {
                continue;
            };
            if entry.range.end < end {
                reversed.push(Span::Text(text[entry.range.end..end].to_string()));
            }
            reversed.push(Span::Image(Image {
                key: image.key,
                handle: image.handle,
                original: revertible.then_some(entry.original),
            }));
            end = entry.range.start;
        }
        if end > 0 {
            reversed.push(Span::Text(text[..end].to_string()));
        }

        reversed.reverse();
        reversed
    }
}

impl<H> IntoIterator for ReplacementPlan<H> {
    type Item = PlanEntry<H>;
    type IntoIter = std::vec::IntoIter<PlanEntry<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(range: Range<usize>, text: &str, key: &str) -> PlanEntry<u32> {
        PlanEntry::image(
            range,
            text.to_string(),
            ResolvedImage {
                key: key.to_string(),
                handle: 1,
            },
        )
    }

    #[test]
    fn entries_are_sorted() {
        let plan = ReplacementPlan::new(vec![
            image(5..9, "😀", "1f600"),
            PlanEntry::text(0..4, "😁".to_string()),
        ]);
        let starts: Vec<usize> = plan.entries().iter().map(|e| e.range.start).collect();
        assert_eq!(starts, vec![0, 5]);
        assert_eq!(plan.replacements().count(), 1);
    }

    #[test]
    fn apply_interleaves_text_and_images() {
        let text = "a😀b😁";
        let plan = ReplacementPlan::new(vec![image(1..5, "😀", "1f600"), image(6..10, "😁", "1f601")]);
        let spans = plan.apply(text, true);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0], Span::Text("a".to_string()));
        assert!(matches!(&spans[1], Span::Image(img) if img.key == "1f600" && img.original.as_deref() == Some("😀")));
        assert_eq!(spans[2], Span::Text("b".to_string()));
        assert!(matches!(&spans[3], Span::Image(img) if img.key == "1f601"));
    }

    #[test]
    fn apply_without_revertible_drops_originals() {
        let plan = ReplacementPlan::new(vec![image(0..4, "😀", "1f600")]);
        let spans = plan.apply("😀", false);
        assert!(matches!(&spans[..], [Span::Image(img)] if img.original.is_none()));
    }

    #[test]
    fn text_entries_merge_into_surrounding_text() {
        let text = "x😀y";
        let plan = ReplacementPlan::new(vec![PlanEntry::<u32>::text(1..5, "😀".to_string())]);
        assert_eq!(plan.apply(text, true), vec![Span::Text(text.to_string())]);
    }

    #[test]
    fn empty_plan_on_empty_text() {
        let plan: ReplacementPlan<u32> = ReplacementPlan::default();
        assert!(plan.is_empty());
        assert!(plan.apply("", true).is_empty());
    }
}
