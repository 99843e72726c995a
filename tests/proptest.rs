//! Property-based tests for chatstat.
//!
//! These tests generate random conversations to check the counting and
//! ranking invariants.

use proptest::prelude::*;

use chatstat::core::{Tokenizer, rank};
use chatstat::prelude::*;

const ROSTER: [&str; 3] = ["Alice", "Bob", "Иван"];

/// Generate a random Message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = Message> {
    (
        // Includes a sender missing from the roster
        prop::sample::select(vec!["Alice", "Bob", "Иван", "Stranger"]),
        prop::sample::select(vec![
            "Hello".to_string(),
            "hello there @bob".to_string(),
            "How are you?".to_string(),
            "Привет мир".to_string(),
            String::new(),
            "   ".to_string(),
            "Alice sent a photo.".to_string(),
            "Bob sent an attachment.".to_string(),
            "🎉🔥 emoji party".to_string(),
            "don't stop @alice @bob".to_string(),
        ]),
        prop::option::of(prop::sample::select(vec![
            "stickers_used/1_n_111.png",
            "stickers_used/2_n_222.png",
            "stickers_used/3_n_369239263222822.png",
            "stickers_used/broken.png",
        ])),
        prop::collection::vec(
            (
                prop::sample::select(vec!["❤", "😆", "👍"]),
                prop::sample::select(vec!["Alice", "Bob", "Иван", "Stranger"]),
            ),
            0..4,
        ),
        0i64..2_000_000_000_000,
    )
        .prop_map(|(sender, content, sticker, reactions, ts)| {
            let mut msg = Message::new(sender, content).with_timestamp_ms(ts);
            if let Some(uri) = sticker {
                msg = msg.with_sticker(uri);
            }
            for (glyph, actor) in reactions {
                msg = msg.with_reaction(glyph, actor);
            }
            msg
        })
}

/// Generate a vector of random messages
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<Message>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

fn corpus(messages: Vec<Message>) -> Corpus {
    Corpus::new(ROSTER.iter().map(|n| Participant::new(*n)).collect(), messages)
}

fn analyze(messages: Vec<Message>) -> RankedAnalysis {
    analyze_corpus(corpus(messages), &AnalysisConfig::default())
}

fn sum(entries: &[Entry]) -> u64 {
    entries.iter().map(|e| e.count).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // COUNTING INVARIANTS
    // ============================================

    /// Every global count is the sum of the per-participant counts
    #[test]
    fn global_is_sum_of_participants(messages in arb_messages(30)) {
        let ranked = analyze(messages);
        for &category in Category::all() {
            let per_participant: u64 = ranked
                .participants
                .values()
                .map(|c| sum(c.table(category)))
                .sum();
            prop_assert_eq!(sum(ranked.global.table(category)), per_participant);
        }
    }

    /// Reaction totals equal the reactions left by known participants
    #[test]
    fn reaction_total_matches_input(messages in arb_messages(30)) {
        let expected = messages
            .iter()
            .flat_map(|m| m.reactions())
            .filter(|r| ROSTER.contains(&r.actor.as_str()))
            .count() as u64;
        let ranked = analyze(messages);
        prop_assert_eq!(sum(&ranked.global.reactions), expected);
    }

    /// Message counts: global sees everything, participants see their own
    #[test]
    fn message_counts(messages in arb_messages(30)) {
        let total = messages.len() as u64;
        let known = messages
            .iter()
            .filter(|m| ROSTER.contains(&m.sender_name.as_str()))
            .count() as u64;
        let ranked = analyze(messages);
        prop_assert_eq!(ranked.global.message_count, total);
        let per_participant: u64 = ranked.participants.values().map(|c| c.message_count).sum();
        prop_assert_eq!(per_participant, known);
    }

    /// Every mention is also counted as a word
    #[test]
    fn mentions_subset_of_words(messages in arb_messages(30)) {
        let ranked = analyze(messages);
        for mention in &ranked.global.mentions {
            let word = ranked.global.words.iter().find(|e| e.key == mention.key);
            prop_assert!(word.is_some_and(|w| w.count >= mention.count));
        }
    }

    // ============================================
    // ORDERING INVARIANTS
    // ============================================

    /// Ranked tables are sorted by count desc, then key asc, without duplicates
    #[test]
    fn tables_are_ranked(messages in arb_messages(30)) {
        let ranked = analyze(messages);
        for &category in Category::all() {
            for pair in ranked.global.table(category).windows(2) {
                prop_assert!(
                    pair[0].count > pair[1].count
                        || (pair[0].count == pair[1].count && pair[0].key < pair[1].key)
                );
            }
        }
    }

    /// The result does not depend on message order
    #[test]
    fn order_independent(
        (messages, shuffled) in arb_messages(20)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(analyze(messages), analyze(shuffled));
    }

    /// Splitting the input and merging the partial results is a no-op
    #[test]
    fn merge_matches_single_pass(messages in arb_messages(20), split in 0usize..20) {
        let split = split.min(messages.len());
        let whole = Aggregator::new(AnalysisConfig::default()).analyze(&corpus(messages.clone()));

        let (left, right) = messages.split_at(split);
        let left = Aggregator::new(AnalysisConfig::default()).analyze(&corpus(left.to_vec()));
        let right = Aggregator::new(AnalysisConfig::default()).analyze(&corpus(right.to_vec()));

        let mut forward = left.clone();
        forward.merge(&right);
        let mut backward = right;
        backward.merge(&left);

        prop_assert_eq!(rank(&forward), rank(&whole));
        prop_assert_eq!(rank(&backward), rank(&whole));
    }

    // ============================================
    // TOKENIZER PROPERTIES
    // ============================================

    /// Tokenizing a joined token list yields the same tokens
    #[test]
    fn tokenize_idempotent(text in "\\PC{0,60}") {
        let tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize(&text);
        prop_assert_eq!(tokenizer.tokenize(&tokens.join(" ")), tokens);
    }

    /// Tokens are lowercase, non-empty and never contain separators
    #[test]
    fn tokens_are_clean(text in "\\PC{0,60}") {
        for token in Tokenizer::default().tokenize(&text) {
            prop_assert!(token.chars().count() >= 2);
            prop_assert!(!token.chars().any(char::is_whitespace));
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }
}
