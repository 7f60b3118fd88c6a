#![forbid(unsafe_code)]

//! Conversion between plain text and image-bearing documents.
//!
//! [`Emojiswap::convert`] segments the input, resolves every sequence
//! against the injected [`ImageLookup`] and applies the resulting plan. The
//! output is a [`Converted`] document: a run of text and image spans plus the
//! uniform text attributes, which are attached only after every replacement
//! has been applied.
//!
//! [`Emojiswap::revert`] turns a document back into a string. A revertible
//! instance restores the text each image replaced; otherwise the document's
//! display text is returned unchanged, with U+FFFC standing in for each
//! image.
//!
//! ```
//! use std::collections::HashSet;
//! use emojiswap::{Config, Emojiswap, ImageSet, Span};
//!
//! let images: HashSet<String> = ["1f600".to_string()].into_iter().collect();
//! let swap = Emojiswap::with_config(
//!     Config::new().with_image_set(ImageSet::Noto).with_revertible(true),
//!     images,
//! );
//!
//! let doc = swap.convert("hi 😀");
//! assert!(matches!(&doc.spans()[1], Span::Image(image) if image.key == "1f600"));
//! assert_eq!(doc.display_text(), "hi \u{FFFC}");
//! assert_eq!(swap.revert(&doc), "hi 😀");
//! ```

use std::fmt;

use emojiswap_core::segment::segment;

use crate::config::{Config, DEFAULT_POINT_SIZE};
use crate::key::KeyFormat;
use crate::lookup::ImageLookup;
use crate::offsets;
use crate::plan::ReplacementPlan;
use crate::resolve::{ReplacementCandidate, Resolver};

/// The character a text storage exposes in place of an image.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// An image placed in a converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image<H> {
    /// The key the image was found under.
    pub key: String,
    /// The handle returned by the lookup.
    pub handle: H,
    /// The replaced text, kept when converting revertibly.
    pub original: Option<String>,
}

/// A run of a converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span<H> {
    Text(String),
    Image(Image<H>),
}

impl<H> Span<H> {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }

    #[must_use]
    pub fn as_image(&self) -> Option<&Image<H>> {
        match self {
            Self::Text(_) => None,
            Self::Image(image) => Some(image),
        }
    }
}

/// Attributes applied uniformly over a converted document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAttributes {
    pub point_size: f32,
    pub font: Option<String>,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            point_size: DEFAULT_POINT_SIZE,
            font: None,
        }
    }
}

impl TextAttributes {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            point_size: config.point_size(),
            font: config.font().map(str::to_string),
        }
    }
}

/// Square bounds for an inline image, in the text's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachmentBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl AttachmentBounds {
    /// Size an image to sit with text of `point_size` in a font with the given
    /// `ascender` and (negative) `descender`.
    ///
    /// The side is the mean of the point size and the line height, and the
    /// square is centred vertically within the line, starting from the
    /// descender. The result is widened to whole units.
    ///
    /// ```
    /// use emojiswap::AttachmentBounds;
    ///
    /// let bounds = AttachmentBounds::fit(16.0, 16.0, -4.0);
    /// assert_eq!(bounds, AttachmentBounds { x: 0.0, y: -3.0, width: 18.0, height: 18.0 });
    /// ```
    #[must_use]
    pub fn fit(point_size: f32, ascender: f32, descender: f32) -> Self {
        let line_height = ascender - descender;
        let side = (point_size + line_height) / 2.0;
        let margin = (line_height - side) / 2.0;
        Self::integral(0.0, descender + margin, side, side)
    }

    fn integral(x: f32, y: f32, width: f32, height: f32) -> Self {
        let (x0, y0) = (x.floor(), y.floor());
        let (x1, y1) = ((x + width).ceil(), (y + height).ceil());
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }
}

/// A converted document.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted<H> {
    spans: Vec<Span<H>>,
    attributes: TextAttributes,
}

impl<H> Converted<H> {
    /// A document holding `text` without images.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let spans = if text.is_empty() {
            Vec::new()
        } else {
            vec![Span::Text(text)]
        };
        Self {
            spans,
            attributes: TextAttributes::default(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: TextAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn spans(&self) -> &[Span<H>] {
        &self.spans
    }

    #[must_use]
    pub fn into_spans(self) -> Vec<Span<H>> {
        self.spans
    }

    #[must_use]
    pub fn attributes(&self) -> &TextAttributes {
        &self.attributes
    }

    pub fn images(&self) -> impl Iterator<Item = &Image<H>> {
        self.spans.iter().filter_map(Span::as_image)
    }

    /// True when the document holds no images.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.images().next().is_none()
    }

    /// The text as a text storage would hold it: U+FFFC for each image.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.render(|_| None)
    }

    /// The text with each image replaced by its stored original, or U+FFFC
    /// when none was kept.
    #[must_use]
    pub fn original_text(&self) -> String {
        self.render(|image| image.original.as_deref())
    }

    fn render<'a>(&'a self, image_text: impl Fn(&'a Image<H>) -> Option<&'a str>) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                Span::Text(text) => out.push_str(text),
                Span::Image(image) => match image_text(image) {
                    Some(text) => out.push_str(text),
                    None => out.push(OBJECT_REPLACEMENT),
                },
            }
        }
        out
    }
}

impl<H> From<&str> for Converted<H> {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl<H> From<String> for Converted<H> {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

impl<H> fmt::Display for Converted<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Emoji to image converter.
#[derive(Debug, Clone)]
pub struct Emojiswap<L> {
    config: Config,
    lookup: L,
}

impl<L: ImageLookup> Emojiswap<L> {
    /// A converter with the default configuration.
    #[must_use]
    pub fn new(lookup: L) -> Self {
        Self::with_config(Config::default(), lookup)
    }

    #[must_use]
    pub fn with_config(config: Config, lookup: L) -> Self {
        Self { config, lookup }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    #[must_use]
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Segment `text` and build the lookup keys for every sequence.
    #[must_use]
    pub fn candidates(&self, text: &str) -> Vec<ReplacementCandidate> {
        let format = KeyFormat::from_config(&self.config);
        let use_modifiers = self.config.use_modifiers();
        segment(text)
            .iter()
            .map(|sequence| ReplacementCandidate::from_sequence(sequence, &format, use_modifiers))
            .collect()
    }

    /// Resolve every candidate in `text` against the lookup.
    #[must_use]
    pub fn plan(&self, text: &str) -> ReplacementPlan<L::Handle> {
        let resolver = Resolver::new(KeyFormat::from_config(&self.config), &self.lookup);
        let entries = self
            .candidates(text)
            .iter()
            .flat_map(|candidate| resolver.resolve(candidate))
            .collect();
        ReplacementPlan::new(entries)
    }

    /// Replace every emoji sequence with an image where the lookup has one.
    #[must_use]
    pub fn convert(&self, text: &str) -> Converted<L::Handle> {
        let _span = tracing::debug_span!("convert", len = text.len()).entered();
        let plan = self.plan(text);
        let replaced = plan.replacements().count();
        let spans = plan.apply(text, self.config.revertible());
        tracing::debug!(replaced, spans = spans.len(), "converted");

        Converted {
            spans,
            attributes: TextAttributes::from_config(&self.config),
        }
    }

    /// Restore the text a document was converted from.
    ///
    /// Without revertibility this is a no-op returning the display text.
    /// Images that carry no original come back as U+FFFC.
    #[must_use]
    pub fn revert(&self, doc: &Converted<L::Handle>) -> String {
        let _span = tracing::debug_span!("revert", spans = doc.spans.len()).entered();
        if !self.config.revertible() {
            tracing::debug!("not revertible, returning display text");
            return doc.display_text();
        }
        let missing = doc.images().filter(|image| image.original.is_none()).count();
        if missing > 0 {
            tracing::debug!(missing, "images without original text");
        }
        doc.original_text()
    }

    /// Convert the text spans of an edited document again.
    ///
    /// Image spans are kept as they are; runs of adjacent text spans are
    /// joined and converted. `cursor_from_end` is a byte offset from the end
    /// of the old display text. The returned cursor is the matching absolute
    /// byte offset in the new display text, on a char boundary.
    #[must_use]
    pub fn reconvert(&self, doc: &Converted<L::Handle>, cursor_from_end: usize) -> (Converted<L::Handle>, usize)
    where
        L::Handle: Clone,
    {
        let mut spans: Vec<Span<L::Handle>> = Vec::with_capacity(doc.spans.len());
        let mut pending = String::new();

        for span in &doc.spans {
            match span {
                Span::Text(text) => pending.push_str(text),
                Span::Image(image) => {
                    self.flush_text(&mut pending, &mut spans);
                    spans.push(Span::Image(image.clone()));
                }
            }
        }
        self.flush_text(&mut pending, &mut spans);

        let converted = Converted {
            spans,
            attributes: TextAttributes::from_config(&self.config),
        };
        let cursor = offsets::cursor_from_end(&converted.display_text(), cursor_from_end);
        (converted, cursor)
    }

    fn flush_text(&self, pending: &mut String, spans: &mut Vec<Span<L::Handle>>) {
        if pending.is_empty() {
            return;
        }
        let text = std::mem::take(pending);
        let plan = self.plan(&text);
        spans.extend(plan.apply(&text, self.config.revertible()));
    }
}
