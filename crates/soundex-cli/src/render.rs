//! Rendering of reports to an output stream.

use std::io::{self, Write};
use std::path::Path;

use soundex_config::OutputFormat;
use soundex_core::{EncodeOutcome, IndexError, IndexStats, Outcome, QueryOutcome};

/// Write direct-encode results, e.g. `Robert --> R163`.
pub fn encode_reports(
    out: &mut impl Write,
    outcomes: &[EncodeOutcome],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return json(out, outcomes);
    }
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(report) => writeln!(out, "{} --> {}", report.word, report.code)?,
            Outcome::Invalid { word, error } => invalid(out, word, error)?,
        }
    }
    Ok(())
}

/// Write match results: the query and its code, then one indented line per match.
pub fn match_reports(
    out: &mut impl Write,
    outcomes: &[QueryOutcome],
    format: OutputFormat,
    show_count: bool,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        return json(out, outcomes);
    }
    for outcome in outcomes {
        let report = match outcome {
            Outcome::Ok(report) => report,
            Outcome::Invalid { word, error } => {
                invalid(out, word, error)?;
                continue;
            }
        };

        writeln!(out, "{} --> {}", report.query, report.code)?;
        if report.matches.is_empty() {
            writeln!(out, "  no matches")?;
        }
        for word in &report.matches {
            writeln!(out, "  {word}")?;
        }
        if show_count {
            let noun = if report.count() == 1 { "match" } else { "matches" };
            writeln!(out, "  {} {noun}", report.count())?;
        }
    }
    Ok(())
}

pub fn stats(out: &mut impl Write, wordlist: &Path, stats: &IndexStats) -> io::Result<()> {
    writeln!(
        out,
        "{}: {} words, {} distinct codes, {} skipped",
        wordlist.display(),
        stats.entries,
        stats.distinct_codes,
        stats.skipped
    )
}

/// Tell the user the word list could not be read; the run goes on with an
/// empty index.
pub fn unreadable(out: &mut impl Write, error: &IndexError) -> io::Result<()> {
    writeln!(out, "xperm: {error}; every query will report no matches")
}

fn invalid(out: &mut impl Write, word: &str, error: &str) -> io::Result<()> {
    writeln!(out, "Could not encode {word:?}: {error}")
}

fn json<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
