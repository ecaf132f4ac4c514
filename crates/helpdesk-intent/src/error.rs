//! Intent engine error types.
//!
//! Everything that can go wrong while bringing the help desk up surfaces
//! through [`CatalogError`].  Once the catalog is loaded nothing in this crate
//! fails: unmatched queries and unknown tags are answered with fallback
//! replies instead.

use std::path::PathBuf;

/// Unified error type for catalog loading and configuration.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    // -- Source errors -------------------------------------------------------
    /// The catalog or configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported catalog format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// JSON deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization failed.
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    // -- Validation errors ---------------------------------------------------
    /// An intent has an empty or whitespace-only tag.
    #[error("intent #{index} has an empty tag")]
    EmptyTag { index: usize },

    /// Two intents share the same tag.
    #[error("duplicate intent tag: {tag}")]
    DuplicateTag { tag: String },

    // -- Configuration errors ------------------------------------------------
    /// The confidence threshold is not a finite number in `[0, 1]`.
    #[error("invalid confidence threshold {value}: must be within [0, 1]")]
    InvalidThreshold { value: f64 },

    /// A configuration value is missing or inconsistent.
    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

/// Convenience alias used throughout the intent crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
