#![forbid(unsafe_code)]

//! Conversion options.
//!
//! # Environment
//!
//! [`Config::from_env`] reads the following variables. The image set is
//! applied first, so explicit width and separator values override its
//! preset.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `EMOJISWAP_IMAGE_SET` | `default`, `twemoji`, `emojione`, `noto` |
//! | `EMOJISWAP_CODEPOINT_WIDTH` | minimum hex digits per code point, clamped to 8 |
//! | `EMOJISWAP_SEPARATOR` | separator between code points |
//! | `EMOJISWAP_POINT_SIZE` | text point size |
//! | `EMOJISWAP_REVERTIBLE` | `1`/`true`/`yes`/`on` to keep originals |

use std::fmt;
use std::str::FromStr;

/// Largest supported minimum code point width.
pub const MAX_CODE_POINT_WIDTH: u8 = 8;

/// Default text point size.
pub const DEFAULT_POINT_SIZE: f32 = 17.0;

/// Errors from parsing configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The image set name is not recognized.
    UnknownImageSet(String),
    /// A variable held a value that does not parse.
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownImageSet(name) => write!(f, "unknown image set: {name}"),
            Self::InvalidValue { key, value } => write!(f, "invalid value '{value}' for {key}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Naming conventions of well-known emoji image sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ImageSet {
    /// Unpadded code points joined by `-`.
    #[default]
    Default,
    /// Twemoji: at least 2 digits, joined by `-`.
    Twemoji,
    /// Emoji One: at least 4 digits, joined by `-`.
    EmojiOne,
    /// Noto Emoji: at least 4 digits, joined by `_`.
    Noto,
}

impl ImageSet {
    /// All presets, in declaration order.
    pub const ALL: [Self; 4] = [Self::Default, Self::Twemoji, Self::EmojiOne, Self::Noto];

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Custom",
            Self::Twemoji => "Twemoji",
            Self::EmojiOne => "Emoji One",
            Self::Noto => "Noto Emoji",
        }
    }

    /// Minimum code point width used by the set.
    #[must_use]
    pub const fn code_point_width(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Twemoji => 2,
            Self::EmojiOne | Self::Noto => 4,
        }
    }

    /// Separator used by the set.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Noto => "_",
            _ => "-",
        }
    }
}

impl fmt::Display for ImageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ImageSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "default" | "custom" => Ok(Self::Default),
            "twemoji" => Ok(Self::Twemoji),
            "emojione" => Ok(Self::EmojiOne),
            "noto" | "notoemoji" => Ok(Self::Noto),
            _ => Err(ConfigError::UnknownImageSet(s.to_string())),
        }
    }
}

/// Options for converting text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    point_size: f32,
    font: Option<String>,
    minimum_code_point_width: u8,
    separator: String,
    image_set: ImageSet,
    use_modifiers: bool,
    revertible: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            point_size: DEFAULT_POINT_SIZE,
            font: None,
            minimum_code_point_width: 0,
            separator: "-".to_string(),
            image_set: ImageSet::Default,
            use_modifiers: true,
            revertible: false,
        }
    }
}

#[inline]
fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Config {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from `EMOJISWAP_*` process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Build a configuration using a custom environment lookup.
    pub fn from_env_with<F>(get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(name) = get_env("EMOJISWAP_IMAGE_SET") {
            config.set_image_set(name.parse()?);
        }
        if let Some(value) = get_env("EMOJISWAP_CODEPOINT_WIDTH") {
            let width = value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "EMOJISWAP_CODEPOINT_WIDTH".to_string(),
                    value: value.clone(),
                })?;
            config.set_minimum_code_point_width(width.min(u32::from(u8::MAX)) as u8);
        }
        if let Some(separator) = get_env("EMOJISWAP_SEPARATOR") {
            config.set_separator(separator);
        }
        if let Some(value) = get_env("EMOJISWAP_POINT_SIZE") {
            let size = value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|size| size.is_finite() && *size > 0.0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "EMOJISWAP_POINT_SIZE".to_string(),
                    value: value.clone(),
                })?;
            config.set_point_size(size);
        }
        if let Some(value) = get_env("EMOJISWAP_REVERTIBLE") {
            config.set_revertible(env_flag(&value));
        }
        tracing::debug!(
            image_set = %config.image_set,
            width = config.minimum_code_point_width,
            separator = %config.separator,
            revertible = config.revertible,
            "configuration loaded from environment"
        );
        Ok(config)
    }

    // --- builder ---

    /// Set the point size.
    #[must_use]
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.set_point_size(size);
        self
    }

    /// Set the font family; `None` selects the host system font.
    #[must_use]
    pub fn with_font(mut self, font: Option<String>) -> Self {
        self.font = font;
        self
    }

    /// Set the minimum code point width (clamped to 8).
    #[must_use]
    pub fn with_minimum_code_point_width(mut self, width: u8) -> Self {
        self.set_minimum_code_point_width(width);
        self
    }

    /// Set the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.set_separator(separator);
        self
    }

    /// Select an image set, overwriting width and separator.
    #[must_use]
    pub fn with_image_set(mut self, set: ImageSet) -> Self {
        self.set_image_set(set);
        self
    }

    /// Keep skin tone modifiers in primary keys.
    #[must_use]
    #[deprecated(note = "modifiers are always kept by image sets; this flag will be removed")]
    pub fn with_use_modifiers(mut self, use_modifiers: bool) -> Self {
        self.use_modifiers = use_modifiers;
        self
    }

    /// Store originals so converted text can be reverted.
    #[must_use]
    pub fn with_revertible(mut self, revertible: bool) -> Self {
        self.revertible = revertible;
        self
    }

    // --- in-place setters ---

    pub fn set_point_size(&mut self, size: f32) {
        self.point_size = size;
    }

    pub fn set_font(&mut self, font: Option<String>) {
        self.font = font;
    }

    pub fn set_minimum_code_point_width(&mut self, width: u8) {
        self.minimum_code_point_width = width.min(MAX_CODE_POINT_WIDTH);
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    /// Select an image set. Width and separator are replaced by the preset
    /// even if they were customized before.
    pub fn set_image_set(&mut self, set: ImageSet) {
        self.set_minimum_code_point_width(set.code_point_width());
        self.set_separator(set.separator());
        self.image_set = set;
    }

    #[deprecated(note = "modifiers are always kept by image sets; this flag will be removed")]
    pub fn set_use_modifiers(&mut self, use_modifiers: bool) {
        self.use_modifiers = use_modifiers;
    }

    pub fn set_revertible(&mut self, revertible: bool) {
        self.revertible = revertible;
    }

    // --- accessors ---

    #[must_use]
    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    #[must_use]
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    #[must_use]
    pub fn minimum_code_point_width(&self) -> u8 {
        self.minimum_code_point_width
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The last image set selected. Width or separator may have been
    /// customized since.
    #[must_use]
    pub fn image_set(&self) -> ImageSet {
        self.image_set
    }

    #[must_use]
    pub fn use_modifiers(&self) -> bool {
        self.use_modifiers
    }

    #[must_use]
    pub fn revertible(&self) -> bool {
        self.revertible
    }
}
