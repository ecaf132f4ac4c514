//! Integration tests for the helpdesk-nlp crate.
//!
//! These tests run the normalizer and the similarity scorer together, the
//! way the classifier uses them.

use std::sync::Arc;

use helpdesk_nlp::{EnglishLexicon, Lexicon, Normalizer, TokenSet, jaccard};

// ═══════════════════════════════════════════════════════════════════════
//  Normalizer + scorer
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn query_matches_pattern_exactly_after_normalization() {
    let n = Normalizer::english();
    let pattern = n.normalize("hello");
    let query = n.normalize("Hello!!");
    assert_eq!(jaccard(&query, &pattern), 1.0);
}

#[test]
fn inflected_query_overlaps_base_pattern() {
    let n = Normalizer::english();
    let pattern = n.normalize("college fee structure");
    let query = n.normalize("What are the fees of colleges?");
    let score = jaccard(&query, &pattern);
    assert!((score - 2.0 / 3.0).abs() < 1e-9, "score was {score}");
}

#[test]
fn stopword_only_query_scores_zero_against_everything() {
    let n = Normalizer::english();
    let query = n.normalize("the a!!");
    for pattern in ["hello", "the", "hostel fees", ""] {
        assert_eq!(jaccard(&query, &n.normalize(pattern)), 0.0);
    }
}

#[test]
fn normalizer_can_be_shared_across_threads() {
    let n = Normalizer::english();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let n = n.clone();
            std::thread::spawn(move || n.normalize("Where is the library located?"))
        })
        .collect();

    let expected = n.normalize("Where is the library located?");
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Pluggable lexicon
// ═══════════════════════════════════════════════════════════════════════

/// Wraps the English lexicon but collapses every token starting with `x`
/// into the lemma "x".
struct XLexicon(EnglishLexicon);

impl Lexicon for XLexicon {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.0.tokenize(text)
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.0.is_stopword(token)
    }

    fn lemmatize(&self, token: &str) -> String {
        if token.starts_with('x') {
            "x".to_string()
        } else {
            self.0.lemmatize(token)
        }
    }
}

#[test]
fn custom_lexicon_changes_lemmas() {
    let n = Normalizer::new(Arc::new(XLexicon(EnglishLexicon)));
    let tokens = n.normalize("xylophone xray hostels");
    let expected: TokenSet = ["x", "hostel"].into_iter().collect();
    assert_eq!(tokens, expected);
}
