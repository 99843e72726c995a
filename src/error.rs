//! Unified error types for chatstat.
//!
//! Two families of errors exist:
//!
//! - [`ChatstatError`] is returned from fallible operations. Loading errors
//!   ([`SourceUnavailable`](ChatstatError::SourceUnavailable),
//!   [`SchemaInvalid`](ChatstatError::SchemaInvalid)) abort a run before any
//!   analysis happens.
//! - [`EventError`] describes a single message-level anomaly. These are
//!   never returned from the analysis pass: the offending event is dropped,
//!   logged, and counted in [`SkipStats`](crate::core::SkipStats).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::Corpus;
///
/// fn load() -> Result<Corpus> {
///     Corpus::from_json_str(r#"{"participants": [], "messages": []}"#)
/// }
/// # assert!(load().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// The export could not be read from disk.
    #[error("Cannot read export {}: {source}", path.display())]
    SourceUnavailable {
        /// Path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The export was read but does not match the expected JSON shape.
    #[error("Invalid export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    SchemaInvalid {
        /// The file path, if the export came from a file
        path: Option<PathBuf>,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A query named a participant that is not in the result.
    #[error("Unknown participant '{name}'")]
    UnknownSubject {
        /// The requested name
        name: String,
    },

    /// An output format or file extension was not recognised.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An I/O error occurred while writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ChatstatError {
    /// Creates a read failure for `path`.
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Creates a decode failure.
    pub fn schema_invalid(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatstatError::SchemaInvalid { path, source }
    }

    /// Creates an unknown subject error.
    pub fn unknown_subject(name: impl Into<String>) -> Self {
        ChatstatError::UnknownSubject { name: name.into() }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if the export could not be read.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, ChatstatError::SourceUnavailable { .. })
    }

    /// Returns `true` if the export could not be decoded.
    pub fn is_schema_invalid(&self) -> bool {
        matches!(self, ChatstatError::SchemaInvalid { .. })
    }

    /// Returns `true` for errors raised while loading the export.
    pub fn is_load_error(&self) -> bool {
        self.is_source_unavailable() || self.is_schema_invalid()
    }
}

/// Which side of an event referenced a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    /// The author of a message
    Sender,
    /// The participant who applied a reaction
    Reactor,
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActorRole::Sender => write!(f, "sender"),
            ActorRole::Reactor => write!(f, "reaction actor"),
        }
    }
}

/// A recoverable, single-event anomaly found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// A message or reaction names someone outside the participant roster.
    #[error("{role} '{name}' is not a declared participant")]
    UnknownActor {
        /// The undeclared name
        name: String,
        /// Where the name appeared
        role: ActorRole,
    },

    /// A sticker URI without the expected id delimiter.
    #[error("cannot extract sticker id from '{uri}'")]
    MalformedStickerUri {
        /// The offending URI
        uri: String,
    },
}
