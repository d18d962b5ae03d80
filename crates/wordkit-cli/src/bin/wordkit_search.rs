// wordkit-search: List words of a sorted word list by prefix or suffix.
//
// Prefix queries are two binary searches over the list. Suffix queries go
// through a reversed, re-sorted copy of the list built once per run.
//
// Usage:
//   wordkit-search [-w WORDS] [-p PREFIX]... [-s SUFFIX]... [--json]

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;
use wordkit_cli::{CliError, Verbosity, WordSource};
use wordkit_puzzles::search::{SuffixIndex, with_prefix};

/// List words that start or end with the given strings.
#[derive(Debug, Parser)]
#[command(name = "wordkit-search", version)]
struct Cli {
    #[command(flatten)]
    source: WordSource,

    #[command(flatten)]
    verbosity: Verbosity,

    /// Prefix to search for (repeatable)
    #[arg(short, long = "prefix")]
    prefixes: Vec<String>,

    /// Suffix to search for (repeatable)
    #[arg(short, long = "suffix")]
    suffixes: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Match {
    kind: &'static str,
    query: String,
    words: Vec<String>,
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.prefixes.is_empty() && cli.suffixes.is_empty() {
        return Err(CliError::Usage(
            "give at least one --prefix or --suffix".to_string(),
        ));
    }

    let words = cli.source.load()?;
    let mut matches = Vec::new();

    for prefix in &cli.prefixes {
        matches.push(Match {
            kind: "prefix",
            query: prefix.clone(),
            words: with_prefix(&words, prefix).to_vec(),
        });
    }

    if !cli.suffixes.is_empty() {
        let index = SuffixIndex::new(&words);
        for suffix in &cli.suffixes {
            matches.push(Match {
                kind: "suffix",
                query: suffix.clone(),
                words: index.with_suffix(suffix),
            });
        }
    }

    if cli.json {
        return wordkit_cli::print_json(&matches);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for m in &matches {
        let verb = if m.kind == "prefix" { "start" } else { "end" };
        writeln!(
            out,
            "Words that {verb} with {:?} ({}): {}",
            m.query,
            m.words.len(),
            m.words.join(", ")
        )?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    wordkit_cli::init_logging(cli.verbosity);
    wordkit_cli::exit_on_error(run(cli));
}
