// wordkit-wordcount: Word frequencies of a text read from stdin.
//
// Each line is lowercased, common contractions are expanded and possessive
// 's is dropped before the line is split into runs of the letters a-z.
//
// Usage:
//   wordkit-wordcount [--top N] [--word W]... [--hapax] [--json]

use std::io::{self, BufRead, Write};

use clap::Parser;
use serde::Serialize;
use tracing::info;
use wordkit_cli::{CliError, Verbosity};
use wordkit_puzzles::corpus::{WordCount, WordFrequency};

/// Count word frequencies in a text corpus.
#[derive(Debug, Parser)]
#[command(name = "wordkit-wordcount", version)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Number of most frequent words to print
    #[arg(long, default_value_t = 300)]
    top: usize,

    /// Print the count of this word (repeatable)
    #[arg(long = "word")]
    words: Vec<String>,

    /// Also print the words that occur exactly once
    #[arg(long)]
    hapax: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    distinct: usize,
    total: usize,
    counts: Vec<WordCount>,
    top: Vec<WordCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hapax: Option<Vec<&'a str>>,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut freq = WordFrequency::new();
    for line in io::stdin().lock().lines() {
        freq.add_line(&line?);
    }
    info!(distinct = freq.len(), total = freq.total(), "counted corpus");

    let report = Report {
        distinct: freq.len(),
        total: freq.total(),
        counts: cli
            .words
            .iter()
            .map(|w| WordCount {
                word: w.clone(),
                count: freq.count(w),
            })
            .collect(),
        top: freq.top(cli.top),
        hapax: cli.hapax.then(|| freq.hapax()),
    };

    if cli.json {
        return wordkit_cli::print_json(&report);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    writeln!(
        out,
        "{} words, {} distinct.",
        report.total, report.distinct
    )?;
    for wc in &report.counts {
        writeln!(out, "The word {:?} occurs {} times.", wc.word, wc.count)?;
    }
    let top: Vec<&str> = report.top.iter().map(|wc| wc.word.as_str()).collect();
    writeln!(out, "\nThe {} most frequent words are:", top.len())?;
    writeln!(out, "{}", top.join(", "))?;
    if let Some(once) = &report.hapax {
        writeln!(out, "\n{} words occur exactly once:", once.len())?;
        writeln!(out, "{}", once.join(", "))?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    wordkit_cli::init_logging(cli.verbosity);
    wordkit_cli::exit_on_error(run(cli));
}
