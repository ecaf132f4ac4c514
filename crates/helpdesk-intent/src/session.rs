//! Conversation session: one reply per line of user input.
//!
//! A [`Session`] wires the classifier, the confidence gate and the responder
//! together:
//!
//! 1. An exit word (whole line, case-insensitive) ends the conversation with
//!    a reply drawn from the farewell intent.  The classifier is not invoked.
//! 2. Otherwise the line is classified, gated, and answered either from the
//!    matched intent or with the fallback reply.
//!
//! Every input produces exactly one reply.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::classifier::IntentClassifier;
use crate::config::{DeskConfig, SessionConfig};
use crate::error::Result;
use crate::gate::ConfidenceGate;
use crate::responder::Responder;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The reply to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// A normal reply; the conversation continues.
    Reply(String),
    /// A goodbye; the conversation is over.
    Farewell(String),
}

impl Turn {
    pub fn text(&self) -> &str {
        match self {
            Self::Reply(text) | Self::Farewell(text) => text,
        }
    }

    pub fn is_farewell(&self) -> bool {
        matches!(self, Self::Farewell(_))
    }
}

/// Counters kept for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines handled, farewells included.
    pub turns: usize,
    /// Lines that went through the classifier.
    pub classified: usize,
    /// Classified lines answered with the fallback reply.
    pub fallbacks: usize,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A single conversation over a shared classifier.
#[derive(Debug)]
pub struct Session<R> {
    classifier: Arc<IntentClassifier>,
    gate: ConfidenceGate,
    responder: Responder<R>,
    exit_words: Vec<String>,
    farewell_tag: String,
    fallback_reply: String,
    stats: SessionStats,
}

impl<R: rand::Rng> Session<R> {
    /// Create a session with default session settings.
    pub fn new(
        classifier: Arc<IntentClassifier>,
        responder: Responder<R>,
        gate: ConfidenceGate,
    ) -> Self {
        let defaults = SessionConfig::default();
        Self {
            classifier,
            gate,
            responder,
            exit_words: Vec::new(),
            farewell_tag: String::new(),
            fallback_reply: String::new(),
            stats: SessionStats::default(),
        }
        .with_settings(&defaults)
    }

    /// Assemble a session from a validated configuration.
    pub fn from_config(
        classifier: Arc<IntentClassifier>,
        catalog: Arc<Catalog>,
        config: &DeskConfig,
        rng: R,
    ) -> Result<Self> {
        config.validate()?;

        if !catalog.contains(&config.session.farewell_tag) {
            warn!(
                tag = %config.session.farewell_tag,
                "farewell intent missing from catalog"
            );
        }

        let responder = Responder::new(catalog, rng)
            .with_missing_response(config.session.missing_response.clone());
        Ok(Self::new(classifier, responder, config.gate()?).with_settings(&config.session))
    }

    /// Apply exit words, farewell tag and fallback reply from `settings`.
    pub fn with_settings(mut self, settings: &SessionConfig) -> Self {
        self.exit_words = settings
            .exit_words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .collect();
        self.farewell_tag = settings.farewell_tag.clone();
        self.fallback_reply = settings.fallback_reply.clone();
        self
    }

    /// Whether `input` is one of the exit words.
    pub fn is_exit_word(&self, input: &str) -> bool {
        let lowered = input.trim().to_lowercase();
        self.exit_words.iter().any(|w| *w == lowered)
    }

    /// Answer one line of input.
    pub fn respond(&mut self, input: &str) -> Turn {
        self.stats.turns += 1;

        if self.is_exit_word(input) {
            debug!("exit word received");
            return Turn::Farewell(self.farewell());
        }

        self.stats.classified += 1;
        let result = self.classifier.classify(input);

        let reply = match self.gate.accept(&result) {
            Some(tag) => self.responder.respond(tag),
            None => {
                self.stats.fallbacks += 1;
                debug!(score = result.score, "below threshold, using fallback reply");
                self.fallback_reply.clone()
            }
        };
        Turn::Reply(reply)
    }

    /// A reply drawn from the farewell intent.
    pub fn farewell(&mut self) -> String {
        self.responder.respond(&self.farewell_tag)
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Log the session counters.
    pub fn log_summary(&self) {
        info!(
            turns = self.stats.turns,
            classified = self.stats.classified,
            fallbacks = self.stats.fallbacks,
            "session ended"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
