//! Text normalizer: raw text to a canonical [`TokenSet`].
//!
//! Patterns and queries must go through the exact same pipeline for their
//! token sets to be comparable:
//!
//! 1. Case-fold the whole string.
//! 2. Delete ASCII punctuation (no space is inserted: `don't` → `dont`).
//! 3. Split into words via the [`Lexicon`].
//! 4. Drop stop words.
//! 5. Lemmatize.
//! 6. Collapse into a set.
//!
//! A lemma that is itself a stop word is dropped too, which keeps the
//! pipeline idempotent on its own output.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::lexicon::{EnglishLexicon, Lexicon};
use crate::token_set::TokenSet;

/// Converts free text into token sets using a shared [`Lexicon`].
///
/// Cheap to clone; clones share the same lexicon.
#[derive(Clone)]
pub struct Normalizer {
    lexicon: Arc<dyn Lexicon>,
}

impl Normalizer {
    /// Create a normalizer backed by the given lexicon.
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Create a normalizer backed by the bundled [`EnglishLexicon`].
    pub fn english() -> Self {
        Self::new(Arc::new(EnglishLexicon::new()))
    }

    /// Normalize `text` into a token set.
    ///
    /// Input that reduces to nothing (empty, only punctuation, only stop
    /// words) yields an empty set.
    pub fn normalize(&self, text: &str) -> TokenSet {
        let folded = strip_punctuation(&text.to_lowercase());

        let tokens: TokenSet = self
            .lexicon
            .tokenize(&folded)
            .into_iter()
            .filter(|token| !self.lexicon.is_stopword(token))
            .map(|token| self.lexicon.lemmatize(token))
            .filter(|lemma| !lemma.is_empty() && !self.lexicon.is_stopword(lemma))
            .collect();

        trace!(input = text, tokens = %tokens, "normalized");
        tokens
    }

    /// Normalize `text` and render the result as space-separated tokens.
    pub fn normalize_as_text(&self, text: &str) -> String {
        self.normalize(text).to_text()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}

/// Remove every ASCII punctuation character.
fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits on whitespace, treats "stop" as the only stop word and never
    /// changes a token.
    struct StubLexicon;

    impl Lexicon for StubLexicon {
        fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
            text.split_whitespace().collect()
        }

        fn is_stopword(&self, token: &str) -> bool {
            token == "stop"
        }

        fn lemmatize(&self, token: &str) -> String {
            token.to_string()
        }
    }

    fn set(tokens: &[&str]) -> TokenSet {
        tokens.iter().copied().collect()
    }

    #[test]
    fn punctuation_is_deleted_not_spaced() {
        assert_eq!(strip_punctuation("don't e-mail!!"), "dont email");
        assert_eq!(strip_punctuation("a.b,c;d"), "abcd");
    }

    #[test]
    fn hello_with_punctuation() {
        let n = Normalizer::english();
        assert_eq!(n.normalize("Hello!!"), set(&["hello"]));
    }

    #[test]
    fn case_insensitive() {
        let n = Normalizer::english();
        assert_eq!(n.normalize("Hello"), n.normalize("hello"));
        assert_eq!(n.normalize("ADMISSION Process"), n.normalize("admission process"));
    }

    #[test]
    fn stopwords_and_punctuation_only_is_empty() {
        let n = Normalizer::english();
        assert!(n.normalize("the a!!").is_empty());
        assert!(n.normalize("").is_empty());
        assert!(n.normalize("?!...").is_empty());
    }

    #[test]
    fn lemmatizes_and_deduplicates() {
        let n = Normalizer::english();
        let tokens = n.normalize("What are the fees? Fee details for colleges, please");
        assert_eq!(tokens, set(&["fee", "detail", "college", "please"]));
    }

    #[test]
    fn ing_nouns_are_not_cut_to_other_words() {
        let n = Normalizer::english();
        assert_eq!(n.normalize("Good evening"), set(&["good", "evening"]));
        assert_eq!(n.normalize("Good morning!"), set(&["good", "morning"]));
        assert_eq!(n.normalize("is there anything"), set(&["anything"]));
        assert!(!n.normalize("evening").contains("even"));
    }

    #[test]
    fn lemma_that_is_a_stopword_is_dropped() {
        let n = Normalizer::english();
        // "wills" lemmatizes to the stop word "will".
        assert_eq!(n.normalize("wills library"), set(&["library"]));
    }

    #[test]
    fn idempotent_on_normalized_text() {
        let n = Normalizer::english();
        let inputs = [
            "Hello there!",
            "What are the college timings?",
            "Tell me about the hostel facilities and mess fees",
            "I'm running late for my classes, where's the library?",
            "Placements: which companies visited last year?",
            "the a!!",
        ];
        for input in inputs {
            let once = n.normalize(input);
            let twice = n.normalize(&n.normalize_as_text(input));
            assert_eq!(once, twice, "normalization of {input:?} is not idempotent");
        }
    }

    #[test]
    fn custom_lexicon_is_used() {
        let n = Normalizer::new(Arc::new(StubLexicon));
        assert_eq!(n.normalize("Go STOP now, go!"), set(&["go", "now"]));
    }

    #[test]
    fn normalize_as_text_is_sorted() {
        let n = Normalizer::english();
        assert_eq!(n.normalize_as_text("library timings"), "library time");
    }
}
