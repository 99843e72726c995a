//! Configuration types for analysis and reporting.
//!
//! These are plain structs with builder methods, usable from library code
//! without any CLI framework:
//!
//! - [`AnalysisConfig`] - content markers, sticker handling, tokenizer knobs
//! - [`ReportConfig`] - how much of a ranked result the writers emit
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_fix_encoding(false)
//!     .with_placeholder_sticker("1234567890")
//!     .with_stop_word("lol");
//!
//! assert!(config.is_placeholder_sticker("369239263222822"));
//! assert!(config.is_placeholder_sticker("1234567890"));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::Category;

/// Placeholder sent by Messenger when someone taps the default "like" button.
pub const DEFAULT_PLACEHOLDER_STICKER: &str = "369239263222822";

/// Configuration for the analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Repair Meta's Latin-1 mojibake in names, content and reactions (default: true)
    pub fix_encoding: bool,

    /// Content substring that marks a shared photo (default: "sent a photo.")
    pub photo_marker: String,

    /// Content substring that marks a shared attachment (default: "sent an attachment.")
    pub attachment_marker: String,

    /// Separator preceding the sticker id in an asset URI (default: "_n_")
    pub sticker_delimiter: String,

    /// Sticker ids that are UI placeholders and never counted
    pub placeholder_stickers: Vec<String>,

    /// Tokens shorter than this many characters are discarded (default: 2)
    pub min_token_len: usize,

    /// Stop words added on top of the built-in English list
    pub extra_stop_words: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            fix_encoding: true,
            photo_marker: "sent a photo.".to_string(),
            attachment_marker: "sent an attachment.".to_string(),
            sticker_delimiter: "_n_".to_string(),
            placeholder_stickers: vec![DEFAULT_PLACEHOLDER_STICKER.to_string()],
            min_token_len: 2,
            extra_stop_words: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables mojibake repair.
    #[must_use]
    pub fn with_fix_encoding(mut self, enabled: bool) -> Self {
        self.fix_encoding = enabled;
        self
    }

    /// Sets the photo-share marker.
    #[must_use]
    pub fn with_photo_marker(mut self, marker: impl Into<String>) -> Self {
        self.photo_marker = marker.into();
        self
    }

    /// Sets the attachment-share marker.
    #[must_use]
    pub fn with_attachment_marker(mut self, marker: impl Into<String>) -> Self {
        self.attachment_marker = marker.into();
        self
    }

    /// Sets the sticker id delimiter.
    #[must_use]
    pub fn with_sticker_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.sticker_delimiter = delimiter.into();
        self
    }

    /// Adds a placeholder sticker id.
    #[must_use]
    pub fn with_placeholder_sticker(mut self, id: impl Into<String>) -> Self {
        self.placeholder_stickers.push(id.into());
        self
    }

    /// Sets the minimum token length in characters.
    #[must_use]
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Adds an extra stop word. Stored lowercased, as tokens are.
    #[must_use]
    pub fn with_stop_word(mut self, word: impl Into<String>) -> Self {
        self.extra_stop_words.push(word.into().to_lowercase());
        self
    }

    /// Returns `true` if `id` is a placeholder sticker.
    pub fn is_placeholder_sticker(&self, id: &str) -> bool {
        self.placeholder_stickers.iter().any(|p| p == id)
    }
}

/// Configuration for writing a ranked result.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ReportConfig;
/// use chatstat::core::Category;
///
/// let config = ReportConfig::new()
///     .with_top(5)
///     .with_categories(vec![Category::Words, Category::Stickers]);
/// assert_eq!(config.top, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum entries per table; `None` emits everything
    pub top: Option<usize>,

    /// Categories to include, in output order
    pub categories: Vec<Category>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top: None,
            categories: Category::all().to_vec(),
        }
    }
}

impl ReportConfig {
    /// Creates a configuration that emits every category in full.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits each table to its first `n` entries.
    #[must_use]
    pub fn with_top(mut self, n: usize) -> Self {
        self.top = Some(n);
        self
    }

    /// Restricts output to the given categories.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Applies the `top` limit to a slice.
    pub fn limit<'a, T>(&self, entries: &'a [T]) -> &'a [T] {
        match self.top {
            Some(n) if n < entries.len() => &entries[..n],
            _ => entries,
        }
    }
}
