//! CLI entry point for HelpDesk.
//!
//! This binary provides the `helpdesk` command with subcommands for
//! chatting, classifying a single query, and checking the catalog.

use anyhow::Result;
use clap::Parser;

mod cli;
mod helpers;
mod inspect;
mod repl;

use cli::{Cli, Commands};

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present so RUST_LOG can be set per checkout.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => repl::cmd_chat(&cli.global).await,
        Commands::Classify { text, top, json } => {
            inspect::cmd_classify(&cli.global, &text, top, json)
        }
        Commands::Check => inspect::cmd_check(&cli.global),
    }
}
