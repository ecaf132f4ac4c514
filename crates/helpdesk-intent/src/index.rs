//! Catalog index: precomputed token sets for every example pattern.
//!
//! Built once from a [`Catalog`] and never mutated.  Entry order follows the
//! catalog (intent order, then pattern order), which is what makes the
//! classifier's first-wins tie-break deterministic.

use helpdesk_nlp::{Normalizer, TokenSet};
use tracing::{info, warn};

use crate::catalog::Catalog;

/// One normalized example pattern and the intent that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedPattern {
    /// Normalized tokens of the pattern.
    pub tokens: TokenSet,
    /// Tag of the owning intent.
    pub tag: String,
    /// The pattern as written in the catalog.
    pub pattern: String,
}

/// Ordered sequence of [`IndexedPattern`] entries across all intents.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<IndexedPattern>,
}

impl CatalogIndex {
    /// Normalize every pattern of every intent, in catalog order.
    pub fn build(catalog: &Catalog, normalizer: &Normalizer) -> Self {
        let mut entries = Vec::with_capacity(catalog.pattern_count());

        for intent in catalog.intents() {
            for pattern in &intent.patterns {
                let tokens = normalizer.normalize(pattern);
                if tokens.is_empty() {
                    warn!(
                        tag = %intent.tag,
                        pattern = %pattern,
                        "pattern normalizes to nothing and can never match"
                    );
                }
                entries.push(IndexedPattern {
                    tokens,
                    tag: intent.tag.clone(),
                    pattern: pattern.clone(),
                });
            }
        }

        info!(entries = entries.len(), "catalog index built");
        Self { entries }
    }

    /// Build an index from already-normalized entries.
    pub fn from_entries(entries: Vec<IndexedPattern>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexedPattern] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedPattern> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose pattern normalized to an empty token set.
    pub fn dead_patterns(&self) -> impl Iterator<Item = &IndexedPattern> {
        self.entries.iter().filter(|e| e.tokens.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Intent;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Intent::new("greeting", ["hello", "hi there"], ["Hi!"]),
            Intent::new("fees", ["What are the fees?", "the"], ["Fees are listed online."]),
        ])
        .unwrap()
    }

    #[test]
    fn one_entry_per_pattern_in_catalog_order() {
        let index = CatalogIndex::build(&catalog(), &Normalizer::english());
        let tags: Vec<&str> = index.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["greeting", "greeting", "fees", "fees"]);

        let patterns: Vec<&str> = index.iter().map(|e| e.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["hello", "hi there", "What are the fees?", "the"]);
    }

    #[test]
    fn entries_hold_normalized_tokens() {
        let index = CatalogIndex::build(&catalog(), &Normalizer::english());
        let fees = &index.entries()[2];
        let expected: TokenSet = ["fee"].into_iter().collect();
        assert_eq!(fees.tokens, expected);
    }

    #[test]
    fn stopword_patterns_are_kept_but_reported() {
        let index = CatalogIndex::build(&catalog(), &Normalizer::english());
        assert_eq!(index.len(), 4);
        let dead: Vec<&str> = index.dead_patterns().map(|e| e.pattern.as_str()).collect();
        assert_eq!(dead, vec!["the"]);
    }

    #[test]
    fn empty_catalog_gives_empty_index() {
        let index = CatalogIndex::build(&Catalog::new(vec![]).unwrap(), &Normalizer::english());
        assert!(index.is_empty());
    }
}
