//! Content classification.
//!
//! Export tools write a placeholder sentence ("Alice sent a photo.") as the
//! content of non-text shares. A message is therefore tested against an
//! ordered list of [`ContentRule`]s, and only a message no rule claims is
//! tokenized as text.

use crate::config::AnalysisConfig;
use crate::message::Message;

/// What a message's content turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClass<'m> {
    /// Photo share placeholder
    Photo,
    /// Attachment share placeholder
    Attachment,
    /// A sticker send
    Sticker(StickerClass<'m>),
    /// Anything else; holds the content to tokenize
    Text(&'m str),
}

/// Result of reading a sticker URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickerClass<'m> {
    /// A real sticker with this id
    Counted(&'m str),
    /// The UI default sticker, not a deliberate send
    Placeholder(&'m str),
    /// No id could be extracted from this URI
    Malformed(&'m str),
}

/// One step of the classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRule {
    /// Content contains the photo marker
    PhotoShare,
    /// Content contains the attachment marker
    AttachmentShare,
    /// A sticker reference is present
    StickerShare,
}

/// Rules in priority order. The first match wins; no match means text.
pub const CLASSIFICATION_ORDER: [ContentRule; 3] = [
    ContentRule::PhotoShare,
    ContentRule::AttachmentShare,
    ContentRule::StickerShare,
];

impl ContentRule {
    /// Returns the class this rule assigns, or `None` if it does not apply.
    pub fn apply<'m>(self, msg: &'m Message, config: &AnalysisConfig) -> Option<ContentClass<'m>> {
        match self {
            ContentRule::PhotoShare => contains_marker(msg.content(), &config.photo_marker)
                .then_some(ContentClass::Photo),
            ContentRule::AttachmentShare => {
                contains_marker(msg.content(), &config.attachment_marker)
                    .then_some(ContentClass::Attachment)
            }
            ContentRule::StickerShare => msg
                .sticker
                .as_ref()
                .map(|sticker| ContentClass::Sticker(classify_sticker(&sticker.uri, config))),
        }
    }
}

fn contains_marker(content: &str, marker: &str) -> bool {
    !marker.is_empty() && content.contains(marker)
}

/// Classifies `msg` against [`CLASSIFICATION_ORDER`].
///
/// # Example
///
/// ```rust
/// use chatstat::Message;
/// use chatstat::config::AnalysisConfig;
/// use chatstat::core::classify::{ContentClass, StickerClass, classify};
///
/// let config = AnalysisConfig::default();
///
/// let photo = Message::new("Bob", "Bob sent a photo.");
/// assert_eq!(classify(&photo, &config), ContentClass::Photo);
///
/// let sticker = Message::sticker("Bob", "stickers/123456_n_987654321.png");
/// assert_eq!(
///     classify(&sticker, &config),
///     ContentClass::Sticker(StickerClass::Counted("987654321"))
/// );
/// ```
pub fn classify<'m>(msg: &'m Message, config: &AnalysisConfig) -> ContentClass<'m> {
    CLASSIFICATION_ORDER
        .iter()
        .find_map(|rule| rule.apply(msg, config))
        .unwrap_or_else(|| ContentClass::Text(msg.content()))
}

/// Reads the sticker id out of `uri` and checks it against the placeholders.
pub fn classify_sticker<'m>(uri: &'m str, config: &AnalysisConfig) -> StickerClass<'m> {
    match extract_sticker_id(uri, &config.sticker_delimiter) {
        Some(id) if config.is_placeholder_sticker(id) => StickerClass::Placeholder(id),
        Some(id) => StickerClass::Counted(id),
        None => StickerClass::Malformed(uri),
    }
}

/// Extracts the sticker id from an asset URI.
///
/// The id is the segment after the first `delimiter` and before the next
/// `.` (or the next delimiter, whichever comes first). Returns `None` when
/// the delimiter is absent or the id would be empty.
///
/// ```rust
/// use chatstat::core::classify::extract_sticker_id;
///
/// assert_eq!(extract_sticker_id("s/123456_n_987654321.png", "_n_"), Some("987654321"));
/// assert_eq!(extract_sticker_id("s/123456.png", "_n_"), None);
/// ```
pub fn extract_sticker_id<'u>(uri: &'u str, delimiter: &str) -> Option<&'u str> {
    if delimiter.is_empty() {
        return None;
    }
    let segment = uri.split(delimiter).nth(1)?;
    let id = segment.split('.').next().unwrap_or(segment);
    (!id.is_empty()).then_some(id)
}
