//! # Chatstat
//!
//! A Rust library for mining a Facebook Messenger chat export for word,
//! mention, reaction and sticker frequencies, both for the whole
//! conversation and for each participant.
//!
//! ## Overview
//!
//! Messenger's "Download your information" tool writes each conversation as
//! `message_N.json` with a roster of participants and a list of messages.
//! Chatstat loads that file, repairs Meta's Latin-1 mojibake, folds every
//! message into per-participant counters in a single pass and ranks each
//! table deterministically (count descending, then key ascending).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let ranked = analyze_path("message_1.json", &AnalysisConfig::default())?;
//!
//!     for name in ranked.names() {
//!         let subject = Subject::from_name(name);
//!         if let Some(top) = ranked.top_entry(&subject, Category::Words)? {
//!             println!("{name}: {} ({})", top.key, top.count);
//!         }
//!     }
//!
//!     write_json(&ranked, "stats.json", &ReportConfig::new().with_top(10))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Incremental Use
//!
//! The [`Aggregator`](core::Aggregator) can be fed one message at a time, and
//! partial results over disjoint message slices combine with
//! [`Analysis::merge`](core::Analysis::merge):
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::{Aggregator, Category, rank};
//! use chatstat::{Message, Participant};
//!
//! let roster = [Participant::new("A"), Participant::new("B")];
//! let mut first = Aggregator::new(AnalysisConfig::default());
//! first.register(&roster);
//! first.process(&Message::new("A", "tea time"));
//!
//! let mut second = Aggregator::new(AnalysisConfig::default());
//! second.register(&roster);
//! second.process(&Message::new("B", "tea please"));
//!
//! let mut analysis = first.finish();
//! analysis.merge(&second.finish());
//! let ranked = rank(&analysis);
//! assert_eq!(ranked.global.top_entry(Category::Words).unwrap().key, "tea");
//! ```
//!
//! ## Module Structure
//!
//! - [`corpus`] - Loading the export ([`Corpus`])
//! - [`message`] - Export records ([`Message`], [`Participant`])
//! - [`parsing`] - Mojibake repair and timestamp helpers
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig), [`ReportConfig`](config::ReportConfig)
//! - [`core`] - Classification, tokenization, aggregation, ranking and queries
//!   - [`core::output`] - Text, JSON and CSV writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - Unified error types ([`ChatstatError`], [`Result`])
//! - [`cli`] - CLI argument types (`cli` feature)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod format;
pub mod message;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use corpus::Corpus;
pub use error::{ChatstatError, Result};
pub use message::{Message, Participant, Reaction, Sticker};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    // Export records
    pub use crate::{Corpus, Message, Participant};

    // Error types
    pub use crate::error::{ChatstatError, Result};

    // Configuration
    pub use crate::config::{AnalysisConfig, ReportConfig};

    // Analysis
    pub use crate::core::{
        Aggregator, Analysis, Category, ProcessingStats, analyze_corpus, analyze_path,
        analyze_str, rank,
    };

    // Ranked results and queries
    pub use crate::core::{Entry, RankedAnalysis, RankedCounters, Subject, chart_title};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    pub use crate::core::output::{to_json, to_text, write_json, write_text};

    pub use crate::format::OutputFormat;
}
