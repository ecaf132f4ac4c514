//! Shared helper functions used across CLI subcommands.
//!
//! Includes tracing initialization and assembling the help desk (config,
//! catalog, classifier) from the global command-line options.

use std::sync::Arc;

use anyhow::{Context, Result};
use helpdesk_intent::{Catalog, DeskConfig, IntentClassifier};
use helpdesk_nlp::Normalizer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::GlobalArgs;

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

/// Initialize the tracing subscriber with the given default log level.
///
/// Logs go to stderr so they never interleave with replies on stdout.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

/// Everything built once at startup and shared read-only afterwards.
pub struct Desk {
    pub config: DeskConfig,
    pub catalog: Arc<Catalog>,
    pub classifier: Arc<IntentClassifier>,
}

/// Load the config file and apply command-line overrides.
pub fn load_config(args: &GlobalArgs) -> Result<DeskConfig> {
    let mut config = DeskConfig::read(&args.config)
        .with_context(|| format!("failed to load config {}", args.config.display()))?;

    if let Some(ref path) = args.catalog {
        config.catalog.path = path.clone();
    }
    if let Some(threshold) = args.threshold {
        config.classifier.threshold = threshold;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Load the catalog and build the classifier.  Any failure is fatal.
pub fn load_desk(args: &GlobalArgs) -> Result<Desk> {
    let config = load_config(args)?;

    let catalog = Catalog::load(&config.catalog.path).with_context(|| {
        format!("failed to load catalog {}", config.catalog.path.display())
    })?;
    let classifier = IntentClassifier::from_catalog(&catalog, Normalizer::english());

    info!(
        intents = catalog.len(),
        patterns = classifier.index().len(),
        threshold = config.classifier.threshold,
        "help desk ready"
    );

    Ok(Desk {
        config,
        catalog: Arc::new(catalog),
        classifier: Arc::new(classifier),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn args(config: &Path) -> GlobalArgs {
        GlobalArgs {
            config: config.to_path_buf(),
            catalog: None,
            threshold: None,
        }
    }

    #[test]
    fn overrides_win_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("default.toml");
        std::fs::write(&config_path, "[classifier]\nthreshold = 0.5\n").unwrap();

        let mut args = args(&config_path);
        assert_eq!(load_config(&args).unwrap().classifier.threshold, 0.5);

        args.threshold = Some(0.1);
        args.catalog = Some(PathBuf::from("other.json"));
        let config = load_config(&args).unwrap();
        assert_eq!(config.classifier.threshold, 0.1);
        assert_eq!(config.catalog.path, PathBuf::from("other.json"));
    }

    #[test]
    fn override_replaces_invalid_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("default.toml");
        std::fs::write(&config_path, "[classifier]\nthreshold = 2.0\n").unwrap();

        let mut args = args(&config_path);
        assert!(load_config(&args).is_err());

        args.threshold = Some(0.3);
        assert_eq!(load_config(&args).unwrap().classifier.threshold, 0.3);
    }

    #[test]
    fn invalid_threshold_override_is_rejected() {
        let mut args = args(Path::new("/nonexistent/default.toml"));
        args.threshold = Some(3.0);
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn missing_catalog_is_fatal() {
        let mut args = args(Path::new("/nonexistent/default.toml"));
        args.catalog = Some(PathBuf::from("/nonexistent/intents.json"));
        let err = load_desk(&args).err().expect("load should fail");
        assert!(err.to_string().contains("failed to load catalog"));
    }

    #[test]
    fn desk_from_catalog_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("intents.json");
        std::fs::write(
            &catalog_path,
            r#"{"intents": [{"tag": "greeting", "patterns": ["hello"], "responses": ["Hi!"]}]}"#,
        )
        .unwrap();

        let mut args = args(&dir.path().join("missing.toml"));
        args.catalog = Some(catalog_path);
        let desk = load_desk(&args).unwrap();
        assert_eq!(desk.catalog.len(), 1);
        assert_eq!(
            desk.classifier.classify("Hello!").tag.as_deref(),
            Some("greeting")
        );
    }
}
