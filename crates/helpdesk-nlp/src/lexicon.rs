//! Linguistic resources used by the normalizer.
//!
//! The [`Lexicon`] trait isolates the three language-dependent capabilities
//! (tokenization, stop-word lookup, lemmatization) so the rest of the
//! pipeline stays language-agnostic and tests can plug in a stub.
//!
//! [`EnglishLexicon`] is the bundled implementation:
//!
//! | Capability | Technique |
//! |------------|-----------|
//! | Tokenize | Unicode word boundaries (UAX #29) via [`unicode_segmentation`] |
//! | Stop words | Standard English list, contractions stored without apostrophes |
//! | Lemmatize | Irregular-form table, then plural and `-ing`/`-ed` suffix rules |

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use unicode_segmentation::UnicodeSegmentation;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// A pluggable source of language-specific text knowledge.
///
/// Implementations must be deterministic: the same input always yields the
/// same output for the lifetime of the process.
pub trait Lexicon: Send + Sync {
    /// Split already case-folded, punctuation-free text into word tokens.
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Whether `token` is a high-frequency function word to discard.
    fn is_stopword(&self, token: &str) -> bool;

    /// Reduce `token` to its dictionary base form.
    ///
    /// Must be idempotent: `lemmatize(lemmatize(w)) == lemmatize(w)`.
    fn lemmatize(&self, token: &str) -> String;
}

// ---------------------------------------------------------------------------
// English resources
// ---------------------------------------------------------------------------

/// English stop words.  Punctuation is stripped before lookup, so
/// contractions appear in their apostrophe-free spelling.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "youre", "youve",
    "youll", "youd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "shes", "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
    "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "thatll", "these",
    "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "dont", "should", "shouldve", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "arent", "couldn", "couldnt", "didn",
    "didnt", "doesn", "doesnt", "hadn", "hadnt", "hasn", "hasnt", "haven", "havent", "isn",
    "isnt", "ma", "mightn", "mightnt", "mustn", "mustnt", "needn", "neednt", "shan", "shant",
    "shouldn", "shouldnt", "wasn", "wasnt", "weren", "werent", "won", "wont", "wouldn",
    "wouldnt",
];

/// Irregular forms the suffix rules would get wrong.  Every target is a
/// fixed point of the lemmatizer.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    // Nouns
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("indices", "index"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("crises", "crisis"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("statuses", "status"),
    ("campuses", "campus"),
    // Verbs
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("came", "come"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("got", "get"),
    ("gotten", "get"),
    ("made", "make"),
    ("paid", "pay"),
    ("said", "say"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("taught", "teach"),
    ("thought", "think"),
    ("knew", "know"),
    ("known", "know"),
    ("wrote", "write"),
    ("written", "write"),
    ("seen", "see"),
    ("began", "begin"),
    ("begun", "begin"),
    ("told", "tell"),
    ("found", "find"),
    ("held", "hold"),
    ("kept", "keep"),
    ("sent", "send"),
    ("spent", "spend"),
    ("built", "build"),
    ("used", "use"),
    ("using", "use"),
    ("died", "die"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    // Words that only look inflected
    ("news", "news"),
    ("series", "series"),
    ("species", "species"),
    ("always", "always"),
    ("perhaps", "perhaps"),
    // Nouns and adjectives that only look like -ing / -ed verb forms
    ("morning", "morning"),
    ("evening", "evening"),
    ("nothing", "nothing"),
    ("something", "something"),
    ("anything", "anything"),
    ("everything", "everything"),
    ("wedding", "wedding"),
    ("ceiling", "ceiling"),
    ("sibling", "sibling"),
    ("lightning", "lightning"),
    ("offspring", "offspring"),
    ("ongoing", "ongoing"),
    ("hundred", "hundred"),
    ("kindred", "kindred"),
    ("sacred", "sacred"),
    ("naked", "naked"),
    ("wicked", "wicked"),
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

static IRREGULARS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_FORMS.iter().copied().collect());

// ---------------------------------------------------------------------------
// EnglishLexicon
// ---------------------------------------------------------------------------

/// The bundled English lexicon.
///
/// Zero-sized: the stop-word and irregular-form tables are process-wide
/// statics built on first use and read-only afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLexicon;

impl EnglishLexicon {
    pub fn new() -> Self {
        Self
    }
}

impl Lexicon for EnglishLexicon {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }

    fn is_stopword(&self, token: &str) -> bool {
        STOPWORDS.contains(token)
    }

    fn lemmatize(&self, token: &str) -> String {
        // Every rule either shortens the word or lands on an irregular-form
        // target, which is a fixed point, so this terminates.
        let mut current = token.to_string();
        loop {
            let next = lemmatize_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

// ---------------------------------------------------------------------------
// Suffix rules
// ---------------------------------------------------------------------------

/// Apply a single lemmatization step.
fn lemmatize_once(word: &str) -> String {
    if let Some(base) = IRREGULARS.get(word) {
        return (*base).to_string();
    }

    // Rules only understand plain ASCII words of some length.
    if word.len() <= 3 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }

    if let Some(base) = strip_plural(word) {
        return base;
    }
    if let Some(base) = strip_verb_suffix(word) {
        return base;
    }

    word.to_string()
}

/// Noun plural rules: `-ies`, `-sses`, sibilant `-es`, then plain `-s`.
fn strip_plural(word: &str) -> Option<String> {
    if word.len() > 4 && word.ends_with("ies") {
        return Some(format!("{}y", &word[..word.len() - 3]));
    }

    for suffix in ["sses", "ches", "shes", "xes", "zzes"] {
        if word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }

    if word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return Some(word[..word.len() - 1].to_string());
    }

    None
}

/// Verb rules for `-ied`, `-ing` and `-ed`, with stem repair.
fn strip_verb_suffix(word: &str) -> Option<String> {
    if word.ends_with("ied") {
        // "tied" -> "tie", but "applied" -> "apply".
        if word.len() == 4 {
            return Some(word[..3].to_string());
        }
        return Some(format!("{}y", &word[..word.len() - 3]));
    }

    // "need", "speed", "agreed" keep their double e.
    if word.ends_with("eed") {
        return None;
    }

    let stem = word
        .strip_suffix("ing")
        .or_else(|| word.strip_suffix("ed"))?;

    if stem.len() < 2 || !has_vowel(stem) {
        return None;
    }

    Some(repair_stem(stem))
}

/// Restore the base form of a stem left behind by `-ing` / `-ed` removal.
fn repair_stem(stem: &str) -> String {
    if ["at", "bl", "iz"].iter().any(|s| stem.ends_with(s)) {
        return format!("{stem}e");
    }

    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 2 && bytes[n - 1] == bytes[n - 2] && is_consonant(bytes, n - 1) {
        if !matches!(bytes[n - 1], b'l' | b's' | b'z') {
            return stem[..n - 1].to_string();
        }
        return stem.to_string();
    }

    if measure(bytes) == 1 && ends_cvc(bytes) {
        return format!("{stem}e");
    }

    stem.to_string()
}

fn is_consonant(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

fn has_vowel(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    (0..bytes.len()).any(|i| !is_consonant(bytes, i))
}

/// Number of vowel-consonant sequences in `[C](VC)^m[V]`.
fn measure(word: &[u8]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..word.len() {
        let vowel = !is_consonant(word, i);
        if prev_vowel && !vowel {
            m += 1;
        }
        prev_vowel = vowel;
    }
    m
}

/// Consonant-vowel-consonant ending whose last letter is not w, x or y.
fn ends_cvc(word: &[u8]) -> bool {
    let n = word.len();
    n >= 3
        && is_consonant(word, n - 3)
        && !is_consonant(word, n - 2)
        && is_consonant(word, n - 1)
        && !matches!(word[n - 1], b'w' | b'x' | b'y')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
