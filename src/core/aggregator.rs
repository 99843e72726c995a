//! Folds messages into global and per-participant counters.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::core::classify::{ContentClass, StickerClass, classify};
use crate::core::models::{Category, CounterSet};
use crate::core::tokenizer::{Tokenizer, is_mention};
use crate::corpus::Corpus;
use crate::error::{ActorRole, EventError};
use crate::message::{Message, Participant};

/// Tally of events dropped during the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipStats {
    /// Reactions or messages attributed to someone outside the roster
    pub unknown_actors: u64,
    /// Sticker URIs without an extractable id
    pub malformed_stickers: u64,
}

impl SkipStats {
    /// Logs `event` and counts it.
    pub fn record(&mut self, event: &EventError) {
        tracing::warn!(%event, "skipping event");
        match event {
            EventError::UnknownActor { .. } => self.unknown_actors += 1,
            EventError::MalformedStickerUri { .. } => self.malformed_stickers += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.unknown_actors + self.malformed_stickers
    }

    pub fn merge(&mut self, other: &SkipStats) {
        self.unknown_actors += other.unknown_actors;
        self.malformed_stickers += other.malformed_stickers;
    }
}

/// Mutable result of an analysis pass.
///
/// Invariants, for every key:
/// - `global.words` / `mentions` / `stickers` equal the sum over
///   participants (attributed to the sender)
/// - `global.reactions` equals the sum over participants (attributed to the
///   reacting participant)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Counters across every participant
    pub global: CounterSet,
    /// Counters per participant, keyed by full display name
    pub participants: HashMap<String, CounterSet>,
    /// Events dropped during the pass
    pub skipped: SkipStats,
    /// Earliest message time seen
    pub first_timestamp: Option<DateTime<Utc>>,
    /// Latest message time seen
    pub last_timestamp: Option<DateTime<Utc>>,
}

impl Analysis {
    /// Returns the counters for `name`, if registered.
    pub fn participant(&self, name: &str) -> Option<&CounterSet> {
        self.participants.get(name)
    }

    /// Combines two partial analyses.
    ///
    /// Every counter is a sum, so merging analyses of disjoint message
    /// slices in any order gives the analysis of the whole.
    pub fn merge(&mut self, other: &Analysis) {
        self.global.merge(&other.global);
        for (name, counters) in &other.participants {
            self.participants
                .entry(name.clone())
                .or_default()
                .merge(counters);
        }
        self.skipped.merge(&other.skipped);
        self.first_timestamp = min_opt(self.first_timestamp, other.first_timestamp);
        self.last_timestamp = self.last_timestamp.max(other.last_timestamp);
    }

    fn observe_timestamp(&mut self, ts: DateTime<Utc>) {
        self.first_timestamp = min_opt(self.first_timestamp, Some(ts));
        self.last_timestamp = self.last_timestamp.max(Some(ts));
    }
}

// `Option::min` treats `None` as smallest, which is wrong here.
fn min_opt(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Single-pass message aggregator.
///
/// Participants are registered up front with zeroed counters, so every
/// declared participant appears in the result even without activity.
///
/// # Example
///
/// ```rust
/// use chatstat::{Corpus, Message, Participant};
/// use chatstat::config::AnalysisConfig;
/// use chatstat::core::{Aggregator, Category};
///
/// let corpus = Corpus::new(
///     vec![Participant::new("Alice"), Participant::new("Bob")],
///     vec![Message::new("Alice", "Hello world hello").with_reaction("❤", "Bob")],
/// );
///
/// let analysis = Aggregator::new(AnalysisConfig::default()).analyze(&corpus);
/// assert_eq!(analysis.global.count(Category::Words, "hello"), 2);
/// assert_eq!(analysis.participant("Bob").unwrap().count(Category::Reactions, "❤"), 1);
/// assert_eq!(analysis.participant("Bob").unwrap().message_count, 0);
/// ```
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: AnalysisConfig,
    tokenizer: Tokenizer,
    analysis: Analysis,
}

impl Aggregator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(&config),
            config,
            analysis: Analysis::default(),
        }
    }

    /// Adds zeroed counters for each participant not yet known.
    pub fn register<'a>(&mut self, participants: impl IntoIterator<Item = &'a Participant>) {
        for p in participants {
            self.analysis
                .participants
                .entry(p.name.clone())
                .or_default();
        }
    }

    /// Folds one message into the running counters.
    pub fn process(&mut self, msg: &Message) {
        if let Some(ts) = msg.timestamp() {
            self.analysis.observe_timestamp(ts);
        }

        let Self {
            config,
            tokenizer,
            analysis,
        } = self;
        let Analysis {
            global,
            participants,
            skipped,
            ..
        } = analysis;

        for reaction in msg.reactions() {
            match participants.get_mut(&reaction.actor) {
                Some(actor) => {
                    global.increment(Category::Reactions, &reaction.reaction);
                    actor.increment(Category::Reactions, &reaction.reaction);
                }
                None => skipped.record(&EventError::UnknownActor {
                    name: reaction.actor.clone(),
                    role: ActorRole::Reactor,
                }),
            }
        }

        global.message_count += 1;
        let Some(sender) = participants.get_mut(&msg.sender_name) else {
            skipped.record(&EventError::UnknownActor {
                name: msg.sender_name.clone(),
                role: ActorRole::Sender,
            });
            return;
        };
        sender.message_count += 1;

        match classify(msg, config) {
            ContentClass::Photo | ContentClass::Attachment => {}
            ContentClass::Sticker(StickerClass::Placeholder(_)) => {}
            ContentClass::Sticker(StickerClass::Malformed(uri)) => {
                skipped.record(&EventError::MalformedStickerUri {
                    uri: uri.to_owned(),
                });
            }
            ContentClass::Sticker(StickerClass::Counted(id)) => {
                global.increment(Category::Stickers, id);
                sender.increment(Category::Stickers, id);
            }
            ContentClass::Text(content) => {
                for token in tokenizer.tokenize(content) {
                    if is_mention(&token) {
                        global.increment(Category::Mentions, &token);
                        sender.increment(Category::Mentions, &token);
                    }
                    global.increment(Category::Words, &token);
                    sender.increment(Category::Words, &token);
                }
            }
        }
    }

    /// Returns a view of the counters so far.
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Ends the pass and returns the counters.
    pub fn finish(self) -> Analysis {
        self.analysis
    }

    /// Registers the roster and processes every message in input order.
    pub fn analyze(mut self, corpus: &Corpus) -> Analysis {
        self.register(&corpus.participants);
        for msg in &corpus.messages {
            self.process(msg);
        }
        tracing::debug!(
            messages = self.analysis.global.message_count,
            participants = self.analysis.participants.len(),
            skipped = self.analysis.skipped.total(),
            "analysis pass complete"
        );
        self.finish()
    }
}
