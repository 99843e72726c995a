//! Turns counters into ordered, read-only frequency lists.
//!
//! Ordering is count descending, then key ascending (byte order), so equal
//! counts always rank the same way regardless of hash-map iteration order
//! or the order messages were processed in.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::core::aggregator::{Analysis, SkipStats};
use crate::core::models::{Category, CounterSet, FrequencyTable};

/// One ranked `(key, count)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub count: u64,
}

impl Entry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// Rank order: higher count first, ties by ascending key.
pub fn rank_order(a: &Entry, b: &Entry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key))
}

/// Ranks a single frequency table.
///
/// # Example
///
/// ```rust
/// use chatstat::core::{Entry, FrequencyTable, rank_table};
///
/// let table: FrequencyTable = [("b".to_string(), 2), ("a".to_string(), 2), ("c".to_string(), 5)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(
///     rank_table(&table),
///     vec![Entry::new("c", 5), Entry::new("a", 2), Entry::new("b", 2)]
/// );
/// ```
pub fn rank_table(table: &FrequencyTable) -> Vec<Entry> {
    let mut entries: Vec<Entry> = table
        .iter()
        .map(|(key, &count)| Entry::new(key.clone(), count))
        .collect();
    entries.sort_unstable_by(rank_order);
    entries
}

/// Ranked counters for one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCounters {
    pub message_count: u64,
    pub words: Vec<Entry>,
    pub mentions: Vec<Entry>,
    pub reactions: Vec<Entry>,
    pub stickers: Vec<Entry>,
}

impl RankedCounters {
    /// Ranks every table of `counters`.
    pub fn from_counters(counters: &CounterSet) -> Self {
        Self {
            message_count: counters.message_count,
            words: rank_table(&counters.words),
            mentions: rank_table(&counters.mentions),
            reactions: rank_table(&counters.reactions),
            stickers: rank_table(&counters.stickers),
        }
    }

    /// Returns the ranked list for `category`.
    pub fn table(&self, category: Category) -> &[Entry] {
        match category {
            Category::Words => &self.words,
            Category::Mentions => &self.mentions,
            Category::Reactions => &self.reactions,
            Category::Stickers => &self.stickers,
        }
    }

    /// Returns the rank-0 entry for `category`.
    pub fn top_entry(&self, category: Category) -> Option<&Entry> {
        self.table(category).first()
    }

    /// Returns at most `n` leading entries for `category`.
    pub fn top(&self, category: Category, n: usize) -> &[Entry] {
        let table = self.table(category);
        &table[..n.min(table.len())]
    }

    fn limited(&self, config: &ReportConfig) -> Self {
        let pick = |category: Category| {
            if config.categories.contains(&category) {
                config.limit(self.table(category)).to_vec()
            } else {
                Vec::new()
            }
        };
        Self {
            message_count: self.message_count,
            words: pick(Category::Words),
            mentions: pick(Category::Mentions),
            reactions: pick(Category::Reactions),
            stickers: pick(Category::Stickers),
        }
    }
}

/// Final, read-only result of an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedAnalysis {
    /// Tables across all participants
    pub global: RankedCounters,
    /// Tables per participant, ordered by name
    pub participants: BTreeMap<String, RankedCounters>,
    /// Events dropped during the pass
    pub skipped: SkipStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<DateTime<Utc>>,
}

impl RankedAnalysis {
    /// Returns a copy limited to the categories and `top` of `config`.
    ///
    /// Unselected categories become empty lists.
    #[must_use]
    pub fn limited(&self, config: &ReportConfig) -> Self {
        Self {
            global: self.global.limited(config),
            participants: self
                .participants
                .iter()
                .map(|(name, counters)| (name.clone(), counters.limited(config)))
                .collect(),
            skipped: self.skipped,
            first_timestamp: self.first_timestamp,
            last_timestamp: self.last_timestamp,
        }
    }
}

/// Ranks every table of `analysis`.
pub fn rank(analysis: &Analysis) -> RankedAnalysis {
    RankedAnalysis {
        global: RankedCounters::from_counters(&analysis.global),
        participants: analysis
            .participants
            .iter()
            .map(|(name, counters)| (name.clone(), RankedCounters::from_counters(counters)))
            .collect(),
        skipped: analysis.skipped,
        first_timestamp: analysis.first_timestamp,
        last_timestamp: analysis.last_timestamp,
    }
}

impl From<&Analysis> for RankedAnalysis {
    fn from(analysis: &Analysis) -> Self {
        rank(analysis)
    }
}
