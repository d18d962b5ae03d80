// wordkit-anagrams: Group the words of a word list into anagram classes.
//
// Words are grouped by prime code: each letter a..z stands for one of the
// first 26 primes and a word's code is the product over its letters.
//
// Usage:
//   wordkit-anagrams [-w WORDS] [--len N] [--min M] [--skip-invalid] [--json]

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;
use tracing::warn;
use wordkit_cli::{CliError, Verbosity, WordSource};
use wordkit_core::character::is_ascii_lower_letter;
use wordkit_puzzles::anagram::{all_anagrams, prime_code};

/// List anagram groups of a word list.
#[derive(Debug, Parser)]
#[command(name = "wordkit-anagrams", version)]
struct Cli {
    #[command(flatten)]
    source: WordSource,

    #[command(flatten)]
    verbosity: Verbosity,

    /// Only consider words of this many characters
    #[arg(long)]
    len: Option<usize>,

    /// Minimum number of words in a printed group
    #[arg(long, default_value_t = 2)]
    min: usize,

    /// Skip words with characters outside a-z instead of failing
    #[arg(long)]
    skip_invalid: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Group<'a> {
    code: String,
    words: &'a [String],
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut words = cli.source.load()?;
    if let Some(len) = cli.len {
        words = words.with_len(len);
    }

    let candidates: Vec<&str> = if cli.skip_invalid {
        let valid: Vec<&str> = words
            .iter()
            .filter(|w| w.chars().all(is_ascii_lower_letter))
            .collect();
        if valid.len() < words.len() {
            warn!(skipped = words.len() - valid.len(), "skipped words outside a-z");
        }
        valid
    } else {
        words.iter().collect()
    };

    let groups = all_anagrams(candidates)?;
    let selected = groups.with_min_size(cli.min);

    if cli.json {
        let mut rows = Vec::with_capacity(selected.len());
        for &words in &selected {
            rows.push(Group {
                code: prime_code(&words[0])?.to_string(),
                words,
            });
        }
        return wordkit_cli::print_json(&rows);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    writeln!(
        out,
        "{} anagram groups with {} or more members:",
        selected.len(),
        cli.min
    )?;
    for group in selected {
        writeln!(out, "{}", group.join(", "))?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    wordkit_cli::init_logging(cli.verbosity);
    wordkit_cli::exit_on_error(run(cli));
}
