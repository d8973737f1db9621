//! Command-line front end for `polish_numeral_core`.
//!
//! # Responsibility
//! - Parse a decimal argument into an integer before calling `convert`.
//! - Print the phrase as plain text or JSON.
//! - Optionally start file logging for the conversion events.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use once_cell::sync::Lazy;
use polish_numeral_core::{convert, core_version, default_log_level, init_logging, LoggingConfig};
use regex::Regex;

// Digits, optionally grouped with `_` or spaces ("2 147 483 647").
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(?:[ _]\d+)*$").expect("valid number regex"));

#[derive(Parser)]
#[command(name = "liczebnik")]
#[command(version)]
#[command(about = "Spell out an integer in Polish", long_about = None)]
struct Cli {
    /// Integer in [0, 2147483647]
    #[arg(allow_hyphen_values = true)]
    number: String,

    /// Print `{"number": .., "words": ..}` instead of the bare phrase
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        let config = LoggingConfig::parse(&level, log_dir)?;
        init_logging(&config)?;
        info!("event=cli_start module=cli status=ok version={}", core_version());
    }

    let value = parse_integer(&cli.number)?;
    let numeral = convert(value).with_context(|| format!("cannot convert `{}`", cli.number))?;

    if cli.json {
        println!("{}", serde_json::to_string(&numeral)?);
    } else {
        println!("{numeral}");
    }
    Ok(())
}

/// Turns user text into an integer; range checks stay in the core crate.
fn parse_integer(input: &str) -> Result<i128> {
    let trimmed = input.trim();
    if !NUMBER_RE.is_match(trimmed) {
        bail!("`{input}` is not an integer");
    }
    let digits: String = trimmed.chars().filter(|c| *c != '_' && *c != ' ').collect();
    digits
        .parse::<i128>()
        .with_context(|| format!("`{input}` does not fit in a 128-bit integer"))
}
