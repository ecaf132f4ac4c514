//! CLI argument definitions for HelpDesk.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// HelpDesk -- an FAQ chatbot driven by an intent catalog.
#[derive(Parser)]
#[command(
    name = "helpdesk",
    version,
    about = "HelpDesk -- FAQ chatbot over a fixed intent catalog",
    long_about = "Answers free-text questions by matching them against the example \
                  phrasings of a small intent catalog and replying with one of the \
                  matched intent's responses."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Configuration file.
    #[arg(long, global = true, default_value = helpdesk_intent::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Intent catalog to use instead of the one named in the config.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Confidence threshold to use instead of the configured one.
    #[arg(long, global = true)]
    pub threshold: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Classify a single query and show how it scored.
    Classify {
        /// The query text.
        text: String,

        /// Also list the best N intents.
        #[arg(long, short)]
        top: Option<usize>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Load and validate the catalog, then print statistics.
    Check,
}
