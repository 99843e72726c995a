//! End-to-end pipeline: load → repair → aggregate → rank.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::AnalysisConfig;
use crate::core::aggregator::Aggregator;
use crate::core::ranker::{RankedAnalysis, rank};
use crate::corpus::Corpus;
use crate::error::Result;

/// Statistics about a pipeline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessingStats {
    pub message_count: u64,
    pub participant_count: usize,
    pub skipped_events: u64,
    pub elapsed: Duration,
}

impl ProcessingStats {
    /// Messages analysed per second; zero for an instantaneous run.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.message_count as f64 / secs
    }
}

/// Analyses an in-memory corpus.
///
/// Applies the mojibake repair first when `config.fix_encoding` is set.
pub fn analyze_corpus(corpus: Corpus, config: &AnalysisConfig) -> RankedAnalysis {
    analyze_corpus_with_stats(corpus, config).0
}

/// Like [`analyze_corpus`], also returning run statistics.
pub fn analyze_corpus_with_stats(
    mut corpus: Corpus,
    config: &AnalysisConfig,
) -> (RankedAnalysis, ProcessingStats) {
    let start = Instant::now();
    if config.fix_encoding {
        corpus.repair_encoding();
    }

    let analysis = Aggregator::new(config.clone()).analyze(&corpus);
    let ranked = rank(&analysis);

    let stats = ProcessingStats {
        message_count: ranked.global.message_count,
        participant_count: ranked.participants.len(),
        skipped_events: ranked.skipped.total(),
        elapsed: start.elapsed(),
    };
    (ranked, stats)
}

/// Loads and analyses an export file.
///
/// # Example
///
/// ```rust,no_run
/// use chatstat::config::AnalysisConfig;
/// use chatstat::core::{Category, Subject, analyze_path};
///
/// let ranked = analyze_path("message_1.json", &AnalysisConfig::default())?;
/// if let Some(top) = ranked.top_entry(&Subject::Everyone, Category::Words)? {
///     println!("most used word: {} ({})", top.key, top.count);
/// }
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn analyze_path(path: impl AsRef<Path>, config: &AnalysisConfig) -> Result<RankedAnalysis> {
    let corpus = Corpus::from_path(path)?;
    Ok(analyze_corpus(corpus, config))
}

/// Decodes and analyses an export held in memory.
pub fn analyze_str(content: &str, config: &AnalysisConfig) -> Result<RankedAnalysis> {
    let corpus = Corpus::from_json_str(content)?;
    Ok(analyze_corpus(corpus, config))
}
