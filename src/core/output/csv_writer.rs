//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::config::ReportConfig;
use crate::core::ranker::RankedAnalysis;
use crate::error::{ChatstatError, Result};

/// Writes the ranked result as semicolon-delimited CSV.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Subject`, `Category`, `Rank`, `Key`, `Count`
/// - Subjects in `everyone`-first name order, ranks 1-based
pub fn write_csv(ranked: &RankedAnalysis, output_path: &str, config: &ReportConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(ranked, config, file)
}

/// Converts the ranked result to a CSV string.
pub fn to_csv(ranked: &RankedAnalysis, config: &ReportConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(ranked, config, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ChatstatError::invalid_format("CSV", e.to_string()))
}

fn write_records<W: Write>(ranked: &RankedAnalysis, config: &ReportConfig, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    writer.write_record(["Subject", "Category", "Rank", "Key", "Count"])?;

    for subject in ranked.subjects() {
        let counters = ranked.counters(&subject)?;
        for &category in &config.categories {
            for (i, entry) in config.limit(counters.table(category)).iter().enumerate() {
                let rank = (i + 1).to_string();
                let count = entry.count.to_string();
                writer.write_record([
                    subject.name(),
                    category.as_str(),
                    rank.as_str(),
                    entry.key.as_str(),
                    count.as_str(),
                ])?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
