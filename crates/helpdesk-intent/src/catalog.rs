//! Intent catalog: the read-only set of intents loaded at startup.
//!
//! A catalog document lists intents, each with a unique tag, example
//! phrasings and candidate replies:
//!
//! ```json
//! {"intents": [
//!   {"tag": "greeting", "patterns": ["hello", "hi there"], "responses": ["Hi!"]}
//! ]}
//! ```
//!
//! The same shape is accepted as TOML (`[[intents]]` tables) when the file
//! ends in `.toml`.  Loading validates the whole document; a catalog is
//! either fully valid or not constructed at all.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CatalogError, Result};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A named category of user request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Unique identifier of the intent.
    pub tag: String,

    /// Example phrasings, in the order they were written.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Candidate replies; one is drawn at random per answer.
    #[serde(default)]
    pub responses: Vec<String>,
}

impl Intent {
    /// Convenience constructor, mostly for tests and embedded catalogs.
    pub fn new<P, R>(tag: impl Into<String>, patterns: P, responses: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            tag: tag.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

/// On-disk document shape.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    intents: Vec<Intent>,
}

/// Supported catalog encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// The validated, immutable set of intents keyed by tag.
#[derive(Debug, Clone)]
pub struct Catalog {
    intents: Vec<Intent>,
    by_tag: HashMap<String, usize>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Catalog {
    /// Build a catalog from intents, rejecting empty and duplicate tags.
    pub fn new(intents: Vec<Intent>) -> Result<Self> {
        let mut by_tag = HashMap::with_capacity(intents.len());

        for (index, intent) in intents.iter().enumerate() {
            if intent.tag.trim().is_empty() {
                return Err(CatalogError::EmptyTag { index });
            }
            if by_tag.insert(intent.tag.clone(), index).is_some() {
                return Err(CatalogError::DuplicateTag {
                    tag: intent.tag.clone(),
                });
            }
            if intent.responses.is_empty() {
                warn!(tag = %intent.tag, "intent has no responses");
            }
            if intent.patterns.is_empty() {
                warn!(tag = %intent.tag, "intent has no patterns and can never match");
            }
        }

        Ok(Self { intents, by_tag })
    }

    /// Load and validate a catalog file.  The format follows the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = CatalogFormat::from_path(path).ok_or_else(|| {
            CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&content, format)?;
        info!(
            path = %path.display(),
            intents = catalog.len(),
            patterns = catalog.pattern_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog document held in memory.
    pub fn parse(content: &str, format: CatalogFormat) -> Result<Self> {
        let document: CatalogDocument = match format {
            CatalogFormat::Json => serde_json::from_str(content)?,
            CatalogFormat::Toml => toml::from_str(content)?,
        };
        Self::new(document.intents)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse(content, CatalogFormat::Json)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, CatalogFormat::Toml)
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl Catalog {
    /// Look up an intent by tag.
    pub fn get(&self, tag: &str) -> Option<&Intent> {
        self.by_tag.get(tag).map(|&i| &self.intents[i])
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.by_tag.contains_key(tag)
    }

    /// All intents in document order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Total number of example patterns across all intents.
    pub fn pattern_count(&self) -> usize {
        self.intents.iter().map(|i| i.patterns.len()).sum()
    }

    /// Total number of responses across all intents.
    pub fn response_count(&self) -> usize {
        self.intents.iter().map(|i| i.responses.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
