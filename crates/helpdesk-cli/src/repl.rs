//! Subcommand: `helpdesk chat` (interactive REPL).
//!
//! Reads one question per line and prints one reply per line until the user
//! types an exit word, closes stdin, or presses Ctrl+C.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use helpdesk_intent::Session;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::cli::GlobalArgs;
use crate::helpers::{init_tracing, load_desk};

/// How a chat loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEnd {
    /// The user typed an exit word.
    Farewell,
    /// Input was closed.
    Eof,
    /// The shutdown signal (Ctrl+C) fired.
    Interrupted,
}

/// Run the interactive chat.
pub async fn cmd_chat(args: &GlobalArgs) -> Result<()> {
    // 1. Initialize tracing (quiet by default so logs don't interrupt the chat).
    init_tracing("warn");

    // 2. Load config, catalog and classifier.
    let desk = load_desk(args)?;

    // 3. Build the session.
    let mut session = Session::from_config(
        desk.classifier.clone(),
        desk.catalog.clone(),
        &desk.config,
        rand::thread_rng(),
    )
    .context("failed to start session")?;

    // 4. Read stdin on its own thread so Ctrl+C can interrupt a pending read.
    let mut lines = spawn_stdin_reader();
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    // 5. Chat loop.
    let mut stdout = io::stdout();
    print_banner(
        &mut stdout,
        &desk.config.session.banner,
        &desk.config.session.exit_words,
    )?;
    let end = run_chat(&mut session, &mut lines, shutdown, &mut stdout).await?;

    info!(?end, "chat finished");
    session.log_summary();
    Ok(())
}

/// Print the greeting banner.
pub fn print_banner<W: Write>(out: &mut W, banner: &str, exit_words: &[String]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "  {banner}")?;
    if !exit_words.is_empty() {
        writeln!(out, "  Type {} to end the chat.", describe_words(exit_words))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Forward stdin lines over a channel.  The channel closes at EOF.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to read input");
                    break;
                }
            }
        }
    });
    rx
}

/// Drive `session` with lines from `lines`, writing prompts and replies to
/// `out`, until an exit word, the end of input, or `shutdown` completes.
/// Blank lines are skipped.  An interrupted chat still gets a farewell.
pub async fn run_chat<G, S, W>(
    session: &mut Session<G>,
    lines: &mut mpsc::UnboundedReceiver<String>,
    shutdown: S,
    out: &mut W,
) -> Result<ChatEnd>
where
    G: rand::Rng,
    S: Future<Output = ()>,
    W: Write,
{
    tokio::pin!(shutdown);

    loop {
        write!(out, "You: ")?;
        out.flush().ok();

        let next = tokio::select! {
            line = lines.recv() => line,
            () = &mut shutdown => {
                writeln!(out)?;
                writeln!(out, "Bot: {}", session.farewell())?;
                info!("interrupted, exiting");
                return Ok(ChatEnd::Interrupted);
            }
        };

        let Some(line) = next else {
            writeln!(out)?;
            info!("EOF received, exiting");
            return Ok(ChatEnd::Eof);
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let turn = session.respond(trimmed);
        writeln!(out, "Bot: {}", turn.text())?;

        if turn.is_farewell() {
            return Ok(ChatEnd::Farewell);
        }
    }
}

/// `'bye', 'exit' or 'quit'`
fn describe_words(words: &[String]) -> String {
    let quoted: Vec<String> = words.iter().map(|w| format!("'{w}'")).collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}
