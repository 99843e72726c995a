//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::config::ReportConfig;
use crate::core::ranker::RankedAnalysis;
use crate::error::Result;

/// Writes the ranked result to a JSON file.
///
/// # Format
/// ```json
/// {
///   "global": {"message_count": 2, "words": [{"key": "hello", "count": 2}], ...},
///   "participants": {"Alice": {...}, "Bob": {...}},
///   "skipped": {"unknown_actors": 0, "malformed_stickers": 0}
/// }
/// ```
pub fn write_json(ranked: &RankedAnalysis, output_path: &str, config: &ReportConfig) -> Result<()> {
    let json = to_json(ranked, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the ranked result to a pretty-printed JSON string.
pub fn to_json(ranked: &RankedAnalysis, config: &ReportConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&ranked.limited(config))?)
}
