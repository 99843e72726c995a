//! Plain-text report writer.

use std::fs::File;
use std::io::Write;

use crate::config::ReportConfig;
use crate::core::query::Subject;
use crate::core::ranker::{RankedAnalysis, RankedCounters};
use crate::error::Result;

/// Writes the text report to a file.
pub fn write_text(ranked: &RankedAnalysis, output_path: &str, config: &ReportConfig) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(to_text(ranked, config).as_bytes())?;
    Ok(())
}

/// Renders a human-readable report.
///
/// # Format
/// ```text
/// Period:   2024-01-15 .. 2024-02-01
/// Messages: 3
///
/// [everyone] 3 messages
///   words:
///      1. hello (2)
///      2. world (1)
///   mentions: none
/// ```
pub fn to_text(ranked: &RankedAnalysis, config: &ReportConfig) -> String {
    let mut out = String::new();

    if let (Some(first), Some(last)) = (ranked.first_timestamp, ranked.last_timestamp) {
        out.push_str(&format!(
            "Period:   {} .. {}\n",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        ));
    }
    out.push_str(&format!("Messages: {}\n", ranked.global.message_count));
    if ranked.skipped.total() > 0 {
        out.push_str(&format!(
            "Skipped:  {} unknown participant(s), {} malformed sticker(s)\n",
            ranked.skipped.unknown_actors, ranked.skipped.malformed_stickers
        ));
    }

    for subject in ranked.subjects() {
        let Ok(counters) = ranked.counters(&subject) else {
            continue;
        };
        out.push('\n');
        push_subject(&mut out, &subject, counters, config);
    }

    out
}

fn push_subject(out: &mut String, subject: &Subject, counters: &RankedCounters, config: &ReportConfig) {
    out.push_str(&format!(
        "[{}] {} message{}\n",
        subject,
        counters.message_count,
        if counters.message_count == 1 { "" } else { "s" }
    ));

    for &category in &config.categories {
        let entries = config.limit(counters.table(category));
        if entries.is_empty() {
            out.push_str(&format!("  {}: none\n", category));
            continue;
        }
        out.push_str(&format!("  {}:\n", category));
        for (i, entry) in entries.iter().enumerate() {
            out.push_str(&format!("    {:>2}. {} ({})\n", i + 1, entry.key, entry.count));
        }
    }
}
