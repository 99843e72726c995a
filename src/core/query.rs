//! Read-only lookups over a [`RankedAnalysis`] for presentation layers.
//!
//! A subject is either a participant or the synthetic `everyone`, which
//! selects the global tables.

use crate::core::models::Category;
use crate::core::ranker::{Entry, RankedAnalysis, RankedCounters};
use crate::error::{ChatstatError, Result};

/// Name of the pseudo-participant that stands for the global tables.
pub const EVERYONE: &str = "everyone";

/// Base URL of Messenger's sticker asset endpoint.
pub const STICKER_ASSET_URL: &str = "https://messenger.com/stickers/asset/?sticker_id=";

/// Whose tables to read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subject {
    /// The global tables
    Everyone,
    /// One participant's tables
    Participant(String),
}

impl Subject {
    /// Maps `"everyone"` to [`Subject::Everyone`], anything else to a participant.
    ///
    /// A participant literally named "everyone" is shadowed by the global tables.
    pub fn from_name(name: &str) -> Self {
        if name == EVERYONE {
            Subject::Everyone
        } else {
            Subject::Participant(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Subject::Everyone => EVERYONE,
            Subject::Participant(name) => name,
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl RankedAnalysis {
    /// Returns `"everyone"` followed by participant names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        std::iter::once(EVERYONE)
            .chain(self.participants.keys().map(String::as_str))
            .collect()
    }

    /// Returns every subject, in [`names`](Self::names) order.
    pub fn subjects(&self) -> Vec<Subject> {
        self.names().into_iter().map(Subject::from_name).collect()
    }

    /// Returns the ranked counters for `subject`.
    pub fn counters(&self, subject: &Subject) -> Result<&RankedCounters> {
        match subject {
            Subject::Everyone => Ok(&self.global),
            Subject::Participant(name) => self
                .participants
                .get(name)
                .ok_or_else(|| ChatstatError::unknown_subject(name.clone())),
        }
    }

    /// Returns the full ranked list for `subject` and `category`.
    pub fn table(&self, subject: &Subject, category: Category) -> Result<&[Entry]> {
        Ok(self.counters(subject)?.table(category))
    }

    /// Returns at most `n` leading entries.
    pub fn top(&self, subject: &Subject, category: Category, n: usize) -> Result<&[Entry]> {
        Ok(self.counters(subject)?.top(category, n))
    }

    /// Returns the rank-0 entry, `Ok(None)` when the table is empty.
    pub fn top_entry(&self, subject: &Subject, category: Category) -> Result<Option<&Entry>> {
        Ok(self.counters(subject)?.top_entry(category))
    }

    /// Returns the asset URL of the subject's most used sticker.
    pub fn top_sticker_url(&self, subject: &Subject) -> Result<Option<String>> {
        Ok(self
            .top_entry(subject, Category::Stickers)?
            .map(|entry| sticker_asset_url(&entry.key)))
    }
}

/// Chart caption, e.g. `Top 10 words for everyone`.
pub fn chart_title(subject: &Subject, category: Category, n: usize) -> String {
    format!("Top {} {} for {}", n, category, subject)
}

/// Messenger asset URL for a sticker id.
pub fn sticker_asset_url(sticker_id: &str) -> String {
    format!("{STICKER_ASSET_URL}{sticker_id}")
}
