// wordkit-histogram: Letter frequencies of a word list, most frequent first.
//
// Usage:
//   wordkit-histogram [-w WORDS] [--len N] [--json]

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;
use wordkit_cli::{CliError, Verbosity, WordSource};
use wordkit_puzzles::histogram::Histogram;

/// Count letters over all words of a word list.
#[derive(Debug, Parser)]
#[command(name = "wordkit-histogram", version)]
struct Cli {
    #[command(flatten)]
    source: WordSource,

    #[command(flatten)]
    verbosity: Verbosity,

    /// Only count words of this many characters
    #[arg(long)]
    len: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Row {
    letter: char,
    count: usize,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut words = cli.source.load()?;
    if let Some(len) = cli.len {
        words = words.with_len(len);
    }
    let hist = Histogram::from_words(words.iter());
    let rows: Vec<Row> = hist
        .by_frequency()
        .into_iter()
        .map(|(letter, count)| Row { letter, count })
        .collect();

    if cli.json {
        return wordkit_cli::print_json(&rows);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    writeln!(out, "{} letters over {} words:", hist.total(), words.len())?;
    for row in &rows {
        writeln!(out, "{} {:>9}", row.letter, row.count)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    wordkit_cli::init_logging(cli.verbosity);
    wordkit_cli::exit_on_error(run(cli));
}
