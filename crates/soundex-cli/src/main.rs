#![deny(unsafe_code)]

//! xperm — find words in a word list that sound like the given words.

mod render;

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use soundex_config::{AppConfig, OutputFormat};
use soundex_core::{WordIndex, build_info, encode_all, run_queries};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// xperm — look up phonetically matching words by Soundex code.
#[derive(Parser)]
#[command(
    name = "xperm",
    version,
    long_version = build_info::LONG_VERSION,
    about,
    long_about = None
)]
struct Cli {
    /// Words to look up (or to encode with --encode).
    words: Vec<String>,

    /// Word list to index [default: ./words.txt, or wordlist.path from config].
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Print each word's Soundex code instead of searching the word list.
    #[arg(short, long)]
    encode: bool,

    /// Output format [default: text, or output.format from config].
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Print word list statistics before the matches.
    #[arg(long)]
    stats: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "xperm.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Usage needs no config, so a broken config file cannot hide it.
    if cli.words.is_empty() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let config = load_config(&cli.config)?;

    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so stdout carries only results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    debug!(
        version = build_info::LONG_VERSION,
        built = build_info::BUILD_TIMESTAMP,
        "xperm starting"
    );

    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);
    let mut out = std::io::stdout().lock();

    if cli.encode {
        render::encode_reports(&mut out, &encode_all(&cli.words), format)?;
    } else {
        let wordlist = cli
            .wordlist
            .clone()
            .unwrap_or_else(|| config.wordlist.path.clone());
        cmd_match(
            &mut out,
            &mut std::io::stderr(),
            &wordlist,
            &cli.words,
            format,
            cli.stats,
            &config,
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Search the word list for each query word. Results go to `out`; notices
/// that must reach the user regardless of log level go to `notices`.
fn cmd_match(
    out: &mut impl Write,
    notices: &mut impl Write,
    wordlist: &Path,
    words: &[String],
    format: OutputFormat,
    stats: bool,
    config: &AppConfig,
) -> Result<()> {
    info!(path = %wordlist.display(), "Using word list");
    let (index, unreadable) = WordIndex::load_or_empty(wordlist);
    if let Some(e) = unreadable {
        render::unreadable(notices, &e)?;
    }

    if stats {
        match format {
            OutputFormat::Text => render::stats(out, wordlist, &index.stats())?,
            // Keep stdout a single JSON document.
            OutputFormat::Json => render::stats(notices, wordlist, &index.stats())?,
        }
    }

    let outcomes = run_queries(&index, words);
    render::match_reports(out, &outcomes, format, config.output.show_count)?;
    Ok(())
}

fn load_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        AppConfig::load(path)
            .with_context(|| format!("invalid configuration in '{}'", path.display()))
    } else {
        Ok(AppConfig::default())
    }
}
