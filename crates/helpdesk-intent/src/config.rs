//! Help desk configuration.
//!
//! Read from `config/default.toml`.  Every field has a default, so a
//! missing file or a missing section simply means "use the defaults"; a file
//! that exists but does not parse is an error.
//!
//! ```toml
//! [catalog]
//! path = "data/intents.json"
//!
//! [classifier]
//! threshold = 0.25
//!
//! [session]
//! exit_words = ["bye", "exit", "quit"]
//! farewell_tag = "goodbye"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::gate::{ConfidenceGate, DEFAULT_THRESHOLD};
use crate::responder::DEFAULT_MISSING_RESPONSE;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Reply used when no intent clears the confidence threshold.
pub const DEFAULT_FALLBACK_REPLY: &str =
    "Sorry, I couldn't understand that. Please ask something related to Acharya Narendra Dev College.";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub catalog: CatalogConfig,
    pub classifier: ClassifierConfig,
    pub session: SessionConfig,
}

/// `[catalog]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the intent catalog (`.json` or `.toml`).
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/intents.json"),
        }
    }
}

/// `[classifier]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum Jaccard score for accepting a match.
    pub threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// `[session]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Inputs (case-insensitive, whole line) that end the conversation.
    pub exit_words: Vec<String>,
    /// Intent whose responses are used to say goodbye.
    pub farewell_tag: String,
    /// Reply when nothing clears the threshold.
    pub fallback_reply: String,
    /// Reply when an accepted tag has no usable responses.
    pub missing_response: String,
    /// Title printed when an interactive chat starts.
    pub banner: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exit_words: vec!["bye".into(), "exit".into(), "quit".into()],
            farewell_tag: "goodbye".into(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.into(),
            missing_response: DEFAULT_MISSING_RESPONSE.into(),
            banner: "ANDC HelpDesk Chatbot".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl DeskConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the configuration at `path`, falling back to
    /// defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the configuration at `path` without validating it, so callers
    /// can apply overrides first and call [`DeskConfig::validate`] once.
    pub fn read(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        ConfidenceGate::new(self.classifier.threshold)?;

        if self.session.farewell_tag.trim().is_empty() {
            return Err(CatalogError::Config {
                reason: "session.farewell_tag must not be empty".into(),
            });
        }
        if self.session.exit_words.iter().any(|w| w.trim().is_empty()) {
            return Err(CatalogError::Config {
                reason: "session.exit_words must not contain empty entries".into(),
            });
        }

        Ok(())
    }

    /// The confidence gate described by `[classifier]`.
    pub fn gate(&self) -> Result<ConfidenceGate> {
        ConfidenceGate::new(self.classifier.threshold)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = DeskConfig::default();
        assert_eq!(cfg.catalog.path, PathBuf::from("data/intents.json"));
        assert_eq!(cfg.classifier.threshold, 0.25);
        assert_eq!(cfg.session.exit_words, vec!["bye", "exit", "quit"]);
        assert_eq!(cfg.session.farewell_tag, "goodbye");
        assert!(cfg.session.fallback_reply.starts_with("Sorry, I couldn't understand that."));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_document_is_all_defaults() {
        assert_eq!(DeskConfig::from_toml_str("").unwrap(), DeskConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = DeskConfig::from_toml_str(
            r#"
            [classifier]
            threshold = 0.4

            [session]
            farewell_tag = "farewell"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.classifier.threshold, 0.4);
        assert_eq!(cfg.session.farewell_tag, "farewell");
        assert_eq!(cfg.session.exit_words, vec!["bye", "exit", "quit"]);
        assert_eq!(cfg.catalog, CatalogConfig::default());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let result = DeskConfig::from_toml_str("[classifier]\nthreshold = 2.0\n");
        assert!(matches!(result, Err(CatalogError::InvalidThreshold { .. })));
    }

    #[test]
    fn empty_farewell_tag_is_rejected() {
        let result = DeskConfig::from_toml_str("[session]\nfarewell_tag = \"\"\n");
        assert!(matches!(result, Err(CatalogError::Config { .. })));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = DeskConfig::from_toml_str("[classifier\nthreshold = ");
        assert!(matches!(result, Err(CatalogError::Toml(_))));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = DeskConfig::load(Path::new("/nonexistent/helpdesk.toml")).unwrap();
        assert_eq!(cfg, DeskConfig::default());
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        std::fs::write(&path, "[catalog]\npath = \"faq.toml\"\n").unwrap();

        let cfg = DeskConfig::load(&path).unwrap();
        assert_eq!(cfg.catalog.path, PathBuf::from("faq.toml"));
    }

    #[test]
    fn read_defers_validation_to_the_caller() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.toml");
        std::fs::write(&path, "[classifier]\nthreshold = 2.0\n").unwrap();

        assert!(matches!(
            DeskConfig::load(&path),
            Err(CatalogError::InvalidThreshold { .. })
        ));

        let mut cfg = DeskConfig::read(&path).unwrap();
        assert_eq!(cfg.classifier.threshold, 2.0);
        cfg.classifier.threshold = 0.3;
        assert!(cfg.validate().is_ok());
    }
}
