//! Subcommands: `helpdesk classify` and `helpdesk check`.
//!
//! Both are one-shot: they load the desk, print a report to stdout and exit.

use std::io::{self, Write};

use anyhow::{Context, Result};
use helpdesk_intent::MatchResult;
use serde_json::json;

use crate::cli::GlobalArgs;
use crate::helpers::{Desk, init_tracing, load_desk};

// ---------------------------------------------------------------------------
// Subcommand: classify
// ---------------------------------------------------------------------------

pub fn cmd_classify(args: &GlobalArgs, text: &str, top: Option<usize>, json: bool) -> Result<()> {
    init_tracing("warn");

    let desk = load_desk(args)?;
    let mut stdout = io::stdout().lock();
    if json {
        write_classify_json(&desk, text, top, &mut stdout)
    } else {
        write_classify_report(&desk, text, top, &mut stdout)
    }
}

/// Human-readable classification report.
pub fn write_classify_report<W: Write>(
    desk: &Desk,
    text: &str,
    top: Option<usize>,
    out: &mut W,
) -> Result<()> {
    let gate = desk.config.gate()?;
    let tokens = desk.classifier.normalizer().normalize(text);
    let result = desk.classifier.classify(text);

    writeln!(out)?;
    writeln!(out, "  Query:     {text}")?;
    writeln!(out, "  Tokens:    {tokens}")?;
    writeln!(out, "  Intent:    {}", result.tag.as_deref().unwrap_or("(none)"))?;
    writeln!(out, "  Score:     {:.3}", result.score)?;
    if let Some(ref pattern) = result.pattern {
        writeln!(out, "  Pattern:   {pattern}")?;
    }
    let decision = match gate.accept(&result) {
        Some(_) => "accepted",
        None => "rejected (fallback reply)",
    };
    writeln!(out, "  Decision:  {decision} at threshold {:.2}", gate.threshold())?;

    if let Some(limit) = top {
        writeln!(out)?;
        writeln!(out, "  Top {limit}:")?;
        let ranked = desk.classifier.rank(text, limit);
        if ranked.is_empty() {
            writeln!(out, "    (no overlapping intents)")?;
        }
        for (i, r) in ranked.iter().enumerate() {
            writeln!(
                out,
                "    {}. {:<16} {:.3}  {}",
                i + 1,
                r.tag.as_deref().unwrap_or("-"),
                r.score,
                r.pattern.as_deref().unwrap_or("")
            )?;
        }
    }

    writeln!(out)?;
    Ok(())
}

/// Machine-readable classification report.
pub fn write_classify_json<W: Write>(
    desk: &Desk,
    text: &str,
    top: Option<usize>,
    out: &mut W,
) -> Result<()> {
    let gate = desk.config.gate()?;
    let tokens = desk.classifier.normalizer().normalize(text);
    let result = desk.classifier.classify(text);
    let accepted = gate.accept(&result).is_some();
    let ranked: Option<Vec<MatchResult>> = top.map(|limit| desk.classifier.rank(text, limit));

    let report = json!({
        "query": text,
        "tokens": tokens,
        "result": result,
        "threshold": gate.threshold(),
        "accepted": accepted,
        "top": ranked,
    });

    let formatted =
        serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    writeln!(out, "{formatted}")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommand: check
// ---------------------------------------------------------------------------

pub fn cmd_check(args: &GlobalArgs) -> Result<()> {
    init_tracing("info");

    let desk = load_desk(args)?;
    write_check_report(&desk, &mut io::stdout().lock())
}

/// Catalog statistics and warnings.
pub fn write_check_report<W: Write>(desk: &Desk, out: &mut W) -> Result<()> {
    let catalog = &desk.catalog;
    let index = desk.classifier.index();
    let farewell_tag = &desk.config.session.farewell_tag;

    writeln!(out)?;
    writeln!(out, "  Catalog Check")?;
    writeln!(out, "  =============")?;
    writeln!(out)?;
    writeln!(out, "  Catalog:          {}", desk.config.catalog.path.display())?;
    writeln!(out, "  Intents:          {}", catalog.len())?;
    writeln!(out, "  Patterns:         {}", catalog.pattern_count())?;
    writeln!(out, "  Responses:        {}", catalog.response_count())?;
    writeln!(out, "  Threshold:        {:.2}", desk.config.classifier.threshold)?;

    if catalog.contains(farewell_tag) {
        writeln!(out, "  Farewell intent:  OK ({farewell_tag})")?;
    } else {
        writeln!(out, "  Farewell intent:  MISSING ({farewell_tag})")?;
    }

    let silent: Vec<&str> = catalog
        .intents()
        .iter()
        .filter(|i| i.responses.is_empty())
        .map(|i| i.tag.as_str())
        .collect();
    if !silent.is_empty() {
        writeln!(out)?;
        writeln!(out, "  Intents without responses:")?;
        for tag in &silent {
            writeln!(out, "    - {tag}")?;
        }
    }

    let dead: Vec<_> = index.dead_patterns().collect();
    if !dead.is_empty() {
        writeln!(out)?;
        writeln!(out, "  Patterns that can never match:")?;
        for entry in &dead {
            writeln!(out, "    - [{}] {:?}", entry.tag, entry.pattern)?;
        }
    }

    writeln!(out)?;
    Ok(())
}
