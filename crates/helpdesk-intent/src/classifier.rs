//! Intent classifier: scores a query against every indexed pattern.
//!
//! The classifier is a pure scoring function: it reports the best tag and
//! its Jaccard score and leaves the accept/reject decision to the
//! [`ConfidenceGate`](crate::gate::ConfidenceGate).
//!
//! # Tie-break
//!
//! Only a strictly greater score replaces the current best, so among
//! entries tied at the maximum the one that comes first in index order wins.
//! Reordering the catalog can therefore change the answer for tied queries.

use std::collections::HashMap;

use helpdesk_nlp::{Normalizer, TokenSet, jaccard};
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::index::CatalogIndex;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Outcome of classifying one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Best-scoring intent, absent when nothing overlapped at all.
    pub tag: Option<String>,

    /// Jaccard score of the best entry, in `[0, 1]`.
    pub score: f64,

    /// The catalog pattern that produced the score.
    pub pattern: Option<String>,
}

impl MatchResult {
    /// The "no match" result: no tag and a score of exactly zero.
    pub fn none() -> Self {
        Self {
            tag: None,
            score: 0.0,
            pattern: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.tag.is_none()
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Lexical intent classifier over a prebuilt [`CatalogIndex`].
///
/// Immutable after construction; share it behind an `Arc` if several
/// sessions need it.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    normalizer: Normalizer,
    index: CatalogIndex,
}

impl IntentClassifier {
    /// Create a classifier from a normalizer and the index it built.
    ///
    /// The index must have been built with the same normalizer, otherwise
    /// query and pattern tokens are not comparable.
    pub fn new(normalizer: Normalizer, index: CatalogIndex) -> Self {
        Self { normalizer, index }
    }

    /// Build the index for `catalog` and wrap it in a classifier.
    pub fn from_catalog(catalog: &Catalog, normalizer: Normalizer) -> Self {
        let index = CatalogIndex::build(catalog, &normalizer);
        Self::new(normalizer, index)
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Classify a raw query.
    pub fn classify(&self, query: &str) -> MatchResult {
        let tokens = self.normalizer.normalize(query);
        let result = self.classify_tokens(&tokens);
        debug!(
            query,
            tokens = %tokens,
            tag = result.tag.as_deref().unwrap_or("-"),
            score = result.score,
            "classified query"
        );
        result
    }

    /// Classify an already-normalized query.
    ///
    /// Scans every entry; returns [`MatchResult::none`] when the index is
    /// empty or every score is zero.
    pub fn classify_tokens(&self, tokens: &TokenSet) -> MatchResult {
        let mut best = MatchResult::none();

        for entry in self.index.iter() {
            let score = jaccard(tokens, &entry.tokens);
            if score > best.score {
                best = MatchResult {
                    tag: Some(entry.tag.clone()),
                    score,
                    pattern: Some(entry.pattern.clone()),
                };
            }
        }

        best
    }

    /// Best result per intent, highest score first.
    ///
    /// Intents that did not overlap at all are omitted.  Equal scores keep
    /// index order, so the head of the list always agrees with
    /// [`IntentClassifier::classify`].
    pub fn rank(&self, query: &str, limit: usize) -> Vec<MatchResult> {
        let tokens = self.normalizer.normalize(query);

        // (position of the best entry, result) per tag.
        let mut best_by_tag: HashMap<&str, (usize, MatchResult)> = HashMap::new();

        for (position, entry) in self.index.iter().enumerate() {
            let score = jaccard(&tokens, &entry.tokens);
            if score <= 0.0 {
                continue;
            }
            let improves = best_by_tag
                .get(entry.tag.as_str())
                .is_none_or(|(_, current)| score > current.score);
            if improves {
                best_by_tag.insert(
                    entry.tag.as_str(),
                    (
                        position,
                        MatchResult {
                            tag: Some(entry.tag.clone()),
                            score,
                            pattern: Some(entry.pattern.clone()),
                        },
                    ),
                );
            }
        }

        let mut ranked: Vec<(usize, MatchResult)> = best_by_tag.into_values().collect();
        ranked.sort_by(|(pos_a, a), (pos_b, b)| {
            b.score.total_cmp(&a.score).then(pos_a.cmp(pos_b))
        });
        ranked.into_iter().take(limit).map(|(_, r)| r).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
