//! The message analysis engine.
//!
//! This module contains:
//! - [`models`] - Counter sets, frequency tables and categories
//! - [`classify`] - Ordered content classification rules
//! - [`tokenizer`] - Lowercasing, splitting and stop-word filtering
//! - [`aggregator`] - The single-pass counter fold
//! - [`ranker`] - Deterministic ranking of frequency tables
//! - [`query`] - Lookups for presentation layers
//! - [`processor`] - The load → analyse → rank pipeline
//! - [`output`] - Writers for ranked results
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::{Category, Subject, analyze_str};
//!
//! let ranked = analyze_str(r#"{
//!     "participants": [{"name": "A"}, {"name": "B"}],
//!     "messages": [
//!         {"sender_name": "A", "timestamp_ms": 0, "content": "Hello world hello",
//!          "reactions": [{"reaction": "❤", "actor": "B"}]},
//!         {"sender_name": "B", "timestamp_ms": 1, "content": "sent a photo."}
//!     ]
//! }"#, &AnalysisConfig::default())?;
//!
//! let top = ranked.top_entry(&Subject::Everyone, Category::Words)?.unwrap();
//! assert_eq!((top.key.as_str(), top.count), ("hello", 2));
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

pub mod aggregator;
pub mod classify;
pub mod models;
pub mod output;
pub mod processor;
pub mod query;
pub mod ranker;
pub mod tokenizer;

pub use aggregator::{Aggregator, Analysis, SkipStats};
pub use classify::{ContentClass, ContentRule, StickerClass, classify};
pub use models::{Category, CounterSet, FrequencyTable};
pub use processor::{
    ProcessingStats, analyze_corpus, analyze_corpus_with_stats, analyze_path, analyze_str,
};
pub use query::{EVERYONE, Subject, chart_title, sticker_asset_url};
pub use ranker::{Entry, RankedAnalysis, RankedCounters, rank, rank_table};
pub use tokenizer::Tokenizer;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
pub use output::{to_json, to_text, write_json, write_text};
