//! Output format types for the chatstat library.
//!
//! These types don't depend on CLI frameworks and can be used from library
//! code directly.
//!
//! # Example
//!
//! ```rust
//! use chatstat::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("stats.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::core::ranker::RankedAnalysis;
use crate::error::ChatstatError;

/// Output format for a ranked result.
///
/// - [`Text`](OutputFormat::Text) - readable report (default)
/// - [`Json`](OutputFormat::Json) - the full ranked structure
/// - [`Csv`](OutputFormat::Csv) - one row per ranked entry, for spreadsheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,

    /// Semicolon-delimited CSV
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, ChatstatError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatstatError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: txt, json, csv",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a ranked result to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    ranked: &RankedAnalysis,
    path: &str,
    format: OutputFormat,
    config: &ReportConfig,
) -> Result<(), ChatstatError> {
    match format {
        OutputFormat::Text => crate::core::output::write_text(ranked, path, config),
        OutputFormat::Json => crate::core::output::write_json(ranked, path, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(ranked, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts a ranked result to a string in the specified format.
pub fn to_format_string(
    ranked: &RankedAnalysis,
    format: OutputFormat,
    config: &ReportConfig,
) -> Result<String, ChatstatError> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::to_text(ranked, config)),
        OutputFormat::Json => crate::core::output::to_json(ranked, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(ranked, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

fn missing_feature(format: OutputFormat) -> ChatstatError {
    ChatstatError::invalid_format(
        "output",
        format!("Output format {} requires the 'csv-output' feature to be enabled", format),
    )
}
