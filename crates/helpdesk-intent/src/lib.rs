//! Intent catalog and classification engine for HelpDesk.
//!
//! This crate provides:
//!
//! - **Catalog**: Loading and validating the intent catalog (JSON or TOML)
//!   via [`catalog::Catalog`].
//! - **Index**: Precomputed token sets for every example pattern via
//!   [`index::CatalogIndex`], built once at startup.
//! - **Classification**: Jaccard scoring of a query against every indexed
//!   pattern via [`classifier::IntentClassifier`].
//! - **Reply policy**: The confidence gate ([`gate::ConfidenceGate`]),
//!   random response selection ([`responder::Responder`]) and the
//!   line-by-line [`session::Session`].
//! - **Configuration**: `config/default.toml` via [`config::DeskConfig`].

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod gate;
pub mod index;
pub mod responder;
pub mod session;

pub use catalog::{Catalog, CatalogFormat, Intent};
pub use classifier::{IntentClassifier, MatchResult};
pub use config::{DeskConfig, SessionConfig};
pub use error::{CatalogError, Result};
pub use gate::ConfidenceGate;
pub use index::{CatalogIndex, IndexedPattern};
pub use responder::Responder;
pub use session::{Session, SessionStats, Turn};
