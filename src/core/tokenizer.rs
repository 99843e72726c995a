//! Plain-text tokenization and stop-word filtering.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::AnalysisConfig;

/// Every maximal run of characters that are not letters, combining marks,
/// digits, `@` or `'`.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}@']+").expect("separator pattern is valid"));

/// Common English function words (contractions included) and URL noise.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further",
    "had", "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll",
    "he's", "her", "here", "here's", "hers", "herself", "him", "himself", "his", "how", "how's",
    "i", "i'd", "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its",
    "itself", "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not",
    "of", "off", "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves",
    "out", "over", "own", "same", "shan't", "she", "she'd", "she'll", "she's", "should",
    "shouldn't", "so", "some", "such", "than", "that", "that's", "the", "their", "theirs",
    "them", "themselves", "then", "there", "there's", "these", "they", "they'd", "they'll",
    "they're", "they've", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what",
    "what's", "when", "when's", "where", "where's", "which", "while", "who", "who's", "whom",
    "why", "why's", "with", "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're",
    "you've", "your", "yours", "yourself", "yourselves", "http", "https", "www", "com", "im",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Returns `true` if `word` is in the built-in stop-word list.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Returns `true` if `token` is a mention (`@` followed by at least one char).
pub fn is_mention(token: &str) -> bool {
    token.len() > 1 && token.starts_with('@')
}

/// Splits message content into countable word tokens.
///
/// # Example
///
/// ```rust
/// use chatstat::core::tokenizer::Tokenizer;
///
/// let tokenizer = Tokenizer::default();
/// assert_eq!(
///     tokenizer.tokenize("Hey @Bob, it's a GREAT day!"),
///     vec!["hey", "@bob", "great", "day"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_len: usize,
    extra_stop_words: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl Tokenizer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            min_len: config.min_token_len,
            extra_stop_words: config.extra_stop_words.iter().cloned().collect(),
        }
    }

    /// Returns `true` if `token` is filtered out as a stop word.
    pub fn is_stop_word(&self, token: &str) -> bool {
        is_stop_word(token) || self.extra_stop_words.contains(token)
    }

    /// Lowercases `content`, splits it and drops short tokens and stop words.
    ///
    /// Token length is measured in chars. Token order follows the content.
    pub fn tokenize(&self, content: &str) -> Vec<String> {
        let lowered = content.to_lowercase();
        SEPARATORS
            .split(&lowered)
            .filter(|token| !token.is_empty() && token.chars().count() >= self.min_len)
            .filter(|token| !self.is_stop_word(token))
            .map(str::to_owned)
            .collect()
    }
}
