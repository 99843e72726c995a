//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - Output format options
//! - [`CategoryArg`] - Statistic categories selectable on the command line

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, ReportConfig};
use crate::core::models::Category;

/// Word, mention, reaction and sticker statistics for a Messenger export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat message_1.json
    chatstat message_1.json -n 5 --category words --category stickers
    chatstat message_1.json --subject \"Alice Smith\"
    chatstat message_1.json -o stats.json
    chatstat message_1.json -o stats.csv -n 20")]
pub struct Args {
    /// Path to the exported message JSON ("-" reads stdin)
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (inferred from the output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Entries shown per table
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,

    /// Show every entry instead of the top N
    #[arg(long, conflicts_with = "top")]
    pub all: bool,

    /// Only report on this participant ("everyone" for the global tables)
    #[arg(long, value_name = "NAME")]
    pub subject: Option<String>,

    /// Only report these categories (repeatable)
    #[arg(long = "category", value_enum, value_name = "CATEGORY")]
    pub categories: Vec<CategoryArg>,

    /// Keep names and text exactly as exported (skip mojibake repair)
    #[arg(long)]
    pub no_fix_encoding: bool,

    /// Extra sticker id to treat as a placeholder (repeatable)
    #[arg(long, value_name = "ID")]
    pub placeholder_sticker: Vec<String>,

    /// Extra word to ignore (repeatable)
    #[arg(long, value_name = "WORD")]
    pub stop_word: Vec<String>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Builds the analysis configuration from the flags.
    pub fn analysis_config(&self) -> AnalysisConfig {
        let mut config = AnalysisConfig::new().with_fix_encoding(!self.no_fix_encoding);
        for id in &self.placeholder_sticker {
            config = config.with_placeholder_sticker(id.clone());
        }
        for word in &self.stop_word {
            config = config.with_stop_word(word.clone());
        }
        config
    }

    /// Builds the report configuration from the flags.
    pub fn report_config(&self) -> ReportConfig {
        let mut config = ReportConfig::new();
        if !self.all {
            config = config.with_top(self.top);
        }
        if !self.categories.is_empty() {
            let mut categories: Vec<Category> = Vec::with_capacity(self.categories.len());
            for &arg in &self.categories {
                let category = Category::from(arg);
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
            config = config.with_categories(categories);
        }
        config
    }

    /// Default log filter for the verbosity flags.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Readable report (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Full ranked result as JSON
    Json,

    /// One row per ranked entry, semicolon-delimited
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

/// Statistic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CategoryArg {
    #[value(alias = "word")]
    Words,
    #[value(alias = "mention")]
    Mentions,
    #[value(alias = "reaction")]
    Reactions,
    #[value(alias = "sticker")]
    Stickers,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Category {
        match arg {
            CategoryArg::Words => Category::Words,
            CategoryArg::Mentions => Category::Mentions,
            CategoryArg::Reactions => Category::Reactions,
            CategoryArg::Stickers => Category::Stickers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatstat").chain(args.iter().copied()))
            .expect("valid args")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["message_1.json"]);
        assert_eq!(args.input, "message_1.json");
        assert_eq!(args.top, 10);
        assert!(args.output.is_none());
        assert!(args.format.is_none());
        assert_eq!(args.log_filter(), "warn");

        let report = args.report_config();
        assert_eq!(report.top, Some(10));
        assert_eq!(report.categories, Category::all());
        assert!(args.analysis_config().fix_encoding);
    }

    #[test]
    fn test_all_disables_limit() {
        let args = parse(&["in.json", "--all"]);
        assert_eq!(args.report_config().top, None);
    }

    #[test]
    fn test_categories() {
        let args = parse(&["in.json", "--category", "stickers", "--category", "word"]);
        assert_eq!(
            args.report_config().categories,
            vec![Category::Stickers, Category::Words]
        );
    }

    #[test]
    fn test_analysis_flags() {
        let args = parse(&[
            "in.json",
            "--no-fix-encoding",
            "--placeholder-sticker",
            "111",
            "--stop-word",
            "LOL",
        ]);
        let config = args.analysis_config();
        assert!(!config.fix_encoding);
        assert!(config.is_placeholder_sticker("111"));
        assert!(config.extra_stop_words.contains(&"lol".to_string()));
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&["in.json", "-v"]).log_filter(), "debug");
        assert_eq!(parse(&["in.json", "-vv"]).log_filter(), "trace");
        assert_eq!(parse(&["in.json", "-q"]).log_filter(), "error");
    }

    #[test]
    fn test_format_values() {
        assert_eq!(parse(&["in.json", "-f", "txt"]).format, Some(OutputFormat::Text));
        assert_eq!(parse(&["in.json", "-f", "csv"]).format, Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_missing_input_is_error() {
        assert!(Args::try_parse_from(["chatstat"]).is_err());
    }
}
