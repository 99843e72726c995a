//! The parsed export: participant roster plus messages.

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatError, Result};
use crate::message::{Message, Participant};
use crate::parsing::repair_in_place;

/// A whole chat export.
///
/// Loading performs no validation beyond the JSON shape: unknown message
/// types, undeclared senders and odd sticker URIs all reach the analysis
/// pass, which deals with them event by event.
///
/// # Example
///
/// ```rust
/// use chatstat::Corpus;
///
/// let corpus = Corpus::from_json_str(r#"{
///     "participants": [{"name": "Alice"}, {"name": "Bob"}],
///     "messages": [
///         {"sender_name": "Alice", "timestamp_ms": 1705315800000, "content": "Hi Bob", "type": "Generic"}
///     ]
/// }"#)?;
///
/// assert_eq!(corpus.participants.len(), 2);
/// assert_eq!(corpus.messages[0].content(), "Hi Bob");
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub participants: Vec<Participant>,
    pub messages: Vec<Message>,
}

impl Corpus {
    pub fn new(participants: Vec<Participant>, messages: Vec<Message>) -> Self {
        Self {
            participants,
            messages,
        }
    }

    /// Reads and decodes an export file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).map_err(|e| ChatstatError::source_unavailable(path, e))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read export");

        serde_json::from_slice(&bytes)
            .map_err(|e| ChatstatError::schema_invalid(e, Some(path.to_path_buf())))
    }

    /// Decodes an export held in memory.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ChatstatError::schema_invalid(e, None))
    }

    /// Decodes an export from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| ChatstatError::schema_invalid(e, None))
    }

    /// Decodes an export from any reader, e.g. stdin.
    ///
    /// A failure of the reader itself surfaces as an I/O error rather than
    /// a schema error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(BufReader::new(reader)).map_err(|e| {
            if e.is_io() {
                ChatstatError::Io(io::Error::from(e))
            } else {
                ChatstatError::schema_invalid(e, None)
            }
        })
    }

    /// Repairs Meta mojibake across names, content and reactions.
    ///
    /// Applied uniformly, so a sender still matches its roster entry.
    pub fn repair_encoding(&mut self) {
        for p in &mut self.participants {
            repair_in_place(&mut p.name);
        }
        for m in &mut self.messages {
            m.repair_encoding();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXPORT: &str = r#"{
        "participants": [{"name": "Alice"}, {"name": "Bob"}],
        "messages": [
            {"sender_name": "Bob", "timestamp_ms": 1705315860000, "content": "Second", "type": "Generic"},
            {"sender_name": "Alice", "timestamp_ms": 1705315800000, "content": "First", "type": "Generic"}
        ],
        "title": "Alice and Bob",
        "is_still_participant": true
    }"#;

    #[test]
    fn test_from_json_str() {
        let corpus = Corpus::from_json_str(EXPORT).expect("parse failed");
        assert_eq!(corpus.participants[0], Participant::new("Alice"));
        assert_eq!(corpus.participants[1], Participant::new("Bob"));
        assert_eq!(corpus.messages.len(), 2);
        // Input order is preserved
        assert_eq!(corpus.messages[0].sender_name, "Bob");
    }

    #[test]
    fn test_from_reader() {
        let corpus = Corpus::from_reader(EXPORT.as_bytes()).expect("parse failed");
        assert_eq!(corpus, Corpus::from_json_str(EXPORT).unwrap());

        let err = Corpus::from_reader(&b"{\"participants\": 3}"[..]).unwrap_err();
        assert!(err.is_schema_invalid());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(EXPORT.as_bytes()).expect("write");
        let corpus = Corpus::from_path(file.path()).expect("parse failed");
        assert_eq!(corpus.messages.len(), 2);
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let err = Corpus::from_path("/definitely/not/here/message.json").unwrap_err();
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_bad_json_file_is_schema_invalid() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(b"{\"participants\": 5}").expect("write");
        let err = Corpus::from_path(file.path()).unwrap_err();
        assert!(err.is_schema_invalid());
        assert!(err.to_string().contains("file:"));
    }

    #[test]
    fn test_missing_messages_is_schema_invalid() {
        let err = Corpus::from_json_str(r#"{"participants": []}"#).unwrap_err();
        assert!(err.is_schema_invalid());
    }

    #[test]
    fn test_from_slice() {
        let corpus = Corpus::from_slice(EXPORT.as_bytes()).expect("parse failed");
        assert_eq!(corpus.participants.len(), 2);
        assert!(Corpus::from_slice(b"not json").is_err());
    }

    #[test]
    fn test_repair_encoding_keeps_identity() {
        let mangled: String = "Zoë".bytes().map(char::from).collect();
        let mut corpus = Corpus::new(
            vec![Participant::new(mangled.clone())],
            vec![Message::new(mangled, "hi")],
        );
        corpus.repair_encoding();
        assert_eq!(corpus.participants[0].name, "Zoë");
        assert_eq!(corpus.messages[0].sender_name, "Zoë");
    }
}
