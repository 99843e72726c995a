//! Typed model of a single exported chat message.
//!
//! Field names follow the export's JSON keys, so these types deserialize
//! straight from the file. Optional parts of a message are `Option`s and the
//! analysis pass matches on their presence.
//!
//! # Example
//!
//! ```
//! use chatstat::Message;
//!
//! let msg = Message::new("Alice", "Hello!")
//!     .with_timestamp_ms(1705315800000)
//!     .with_reaction("❤", "Bob");
//!
//! assert_eq!(msg.content(), "Hello!");
//! assert_eq!(msg.reactions().len(), 1);
//! assert!(msg.timestamp().is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parsing::{parse_ms_timestamp, repair_in_place};

/// A declared chat member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Full display name. This is the participant's identity.
    pub name: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Sticker reference attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    /// Asset URI, e.g. `messages/stickers_used/39178562_1505197616293642_5411344281094848512_n_369239263222822.png`
    pub uri: String,
}

/// A reaction applied to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Emoji or string payload
    pub reaction: String,

    /// Participant who applied the reaction, not necessarily the sender
    pub actor: String,
}

/// One message from the export.
///
/// # Serialization
///
/// - `content`, `sticker` and `reactions` may be missing or `null`
/// - `type` is kept verbatim in [`kind`](Message::kind); unknown values are
///   not rejected
/// - unrecognised keys (`photos`, `share`, `is_unsent`, ...) are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the author.
    pub sender_name: String,

    /// Milliseconds since the Unix epoch. Informational only.
    pub timestamp_ms: i64,

    /// Text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Sticker reference, if this message is a sticker send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,

    /// Reactions in the order the export lists them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<Reaction>>,

    /// Export type discriminator (`Generic`, `Share`, `Call`, ...).
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl Message {
    /// Creates a plain text message with a zero timestamp.
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender_name: sender.into(),
            timestamp_ms: 0,
            content: Some(content.into()),
            sticker: None,
            reactions: None,
            kind: "Generic".to_string(),
        }
    }

    /// Creates a sticker message with no text content.
    pub fn sticker(sender: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            sender_name: sender.into(),
            timestamp_ms: 0,
            content: None,
            sticker: Some(Sticker { uri: uri.into() }),
            reactions: None,
            kind: "Generic".to_string(),
        }
    }

    #[must_use]
    pub fn with_timestamp_ms(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    #[must_use]
    pub fn with_sticker(mut self, uri: impl Into<String>) -> Self {
        self.sticker = Some(Sticker { uri: uri.into() });
        self
    }

    /// Appends a reaction.
    #[must_use]
    pub fn with_reaction(mut self, reaction: impl Into<String>, actor: impl Into<String>) -> Self {
        self.reactions.get_or_insert_with(Vec::new).push(Reaction {
            reaction: reaction.into(),
            actor: actor.into(),
        });
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Returns the text content, or `""` when absent.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Returns the reactions, or an empty slice when absent.
    pub fn reactions(&self) -> &[Reaction] {
        self.reactions.as_deref().unwrap_or_default()
    }

    /// Returns the send time, if the timestamp is in range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_ms_timestamp(self.timestamp_ms)
    }

    /// Repairs mojibake in every human-readable field.
    pub(crate) fn repair_encoding(&mut self) {
        repair_in_place(&mut self.sender_name);
        if let Some(content) = self.content.as_mut() {
            repair_in_place(content);
        }
        if let Some(reactions) = self.reactions.as_mut() {
            for r in reactions {
                repair_in_place(&mut r.reaction);
                repair_in_place(&mut r.actor);
            }
        }
    }
}
