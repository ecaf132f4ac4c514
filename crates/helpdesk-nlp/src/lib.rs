//! HelpDesk text pipeline.
//!
//! This crate turns free text into comparable token sets and scores them:
//!
//! - **[`lexicon`]** -- The pluggable linguistic resource (tokenizer,
//!   stop-word list, lemmatizer) behind the [`Lexicon`] trait, with the
//!   bundled [`EnglishLexicon`].
//! - **[`normalizer`]** -- Case folding, punctuation stripping, stop-word
//!   removal and lemmatization via [`Normalizer`].
//! - **[`token_set`]** -- The duplicate-free [`TokenSet`] produced by the
//!   normalizer.
//! - **[`similarity`]** -- Jaccard overlap between two token sets.
//!
//! Everything here is pure and in-memory.  All public types are
//! `Send + Sync` so a single normalizer can be shared across threads.

pub mod lexicon;
pub mod normalizer;
pub mod similarity;
pub mod token_set;

pub use lexicon::{EnglishLexicon, Lexicon};
pub use normalizer::Normalizer;
pub use similarity::jaccard;
pub use token_set::TokenSet;
