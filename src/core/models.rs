//! Counter types shared by the aggregator and ranker.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Key → occurrence count for one statistic.
pub type FrequencyTable = HashMap<String, u64>;

/// The four statistics tracked for every subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Lowercased content tokens surviving the stop-word filter
    Words,
    /// Word tokens starting with `@`
    Mentions,
    /// Reaction glyphs, attributed to the reacting participant
    Reactions,
    /// Sticker ids extracted from asset URIs
    Stickers,
}

impl Category {
    /// Returns all categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Words,
            Category::Mentions,
            Category::Reactions,
            Category::Stickers,
        ]
    }

    /// Returns all accepted names.
    pub fn all_names() -> &'static [&'static str] {
        &["words", "mentions", "reactions", "stickers"]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Words => "words",
            Category::Mentions => "mentions",
            Category::Reactions => "reactions",
            Category::Stickers => "stickers",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "words" | "word" => Ok(Category::Words),
            "mentions" | "mention" => Ok(Category::Mentions),
            "reactions" | "reaction" => Ok(Category::Reactions),
            "stickers" | "sticker" => Ok(Category::Stickers),
            _ => Err(format!(
                "Unknown category: '{}'. Expected one of: {}",
                s,
                Category::all_names().join(", ")
            )),
        }
    }
}

/// Running counters for one subject (a participant, or everyone).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSet {
    pub words: FrequencyTable,
    pub mentions: FrequencyTable,
    pub reactions: FrequencyTable,
    pub stickers: FrequencyTable,
    pub message_count: u64,
}

impl CounterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `category`.
    pub fn table(&self, category: Category) -> &FrequencyTable {
        match category {
            Category::Words => &self.words,
            Category::Mentions => &self.mentions,
            Category::Reactions => &self.reactions,
            Category::Stickers => &self.stickers,
        }
    }

    fn table_mut(&mut self, category: Category) -> &mut FrequencyTable {
        match category {
            Category::Words => &mut self.words,
            Category::Mentions => &mut self.mentions,
            Category::Reactions => &mut self.reactions,
            Category::Stickers => &mut self.stickers,
        }
    }

    /// Adds one occurrence of `key` to `category`.
    pub fn increment(&mut self, category: Category, key: &str) {
        self.add(category, key, 1);
    }

    fn add(&mut self, category: Category, key: &str, n: u64) {
        let table = self.table_mut(category);
        // Only allocate the key on first sight
        if let Some(count) = table.get_mut(key) {
            *count += n;
        } else {
            table.insert(key.to_owned(), n);
        }
    }

    /// Returns the count for `key`, zero when unseen.
    pub fn count(&self, category: Category, key: &str) -> u64 {
        self.table(category).get(key).copied().unwrap_or(0)
    }

    /// Adds every counter of `other` into `self`.
    pub fn merge(&mut self, other: &CounterSet) {
        for &category in Category::all() {
            for (key, &n) in other.table(category) {
                self.add(category, key, n);
            }
        }
        self.message_count += other.message_count;
    }

    /// Returns `true` if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.message_count == 0
            && Category::all()
                .iter()
                .all(|&category| self.table(category).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for (category, name) in Category::all().iter().zip(Category::all_names()) {
            assert_eq!(category.as_str(), *name);
            assert_eq!(name.parse::<Category>().unwrap(), *category);
        }
        assert_eq!("Sticker".parse::<Category>().unwrap(), Category::Stickers);
        assert!("emoji".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&Category::Mentions).unwrap();
        assert_eq!(json, "\"mentions\"");
    }

    #[test]
    fn test_increment_and_count() {
        let mut set = CounterSet::new();
        assert!(set.is_empty());
        set.increment(Category::Words, "hello");
        set.increment(Category::Words, "hello");
        set.increment(Category::Stickers, "42");
        assert_eq!(set.count(Category::Words, "hello"), 2);
        assert_eq!(set.count(Category::Stickers, "42"), 1);
        assert_eq!(set.count(Category::Mentions, "hello"), 0);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut a = CounterSet::new();
        a.increment(Category::Words, "hello");
        a.message_count = 1;

        let mut b = CounterSet::new();
        b.increment(Category::Words, "hello");
        b.increment(Category::Reactions, "❤");
        b.message_count = 2;

        a.merge(&b);
        assert_eq!(a.count(Category::Words, "hello"), 2);
        assert_eq!(a.count(Category::Reactions, "❤"), 1);
        assert_eq!(a.message_count, 3);
    }
}
