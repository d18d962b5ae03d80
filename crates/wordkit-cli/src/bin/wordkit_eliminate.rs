// wordkit-eliminate: Words that remain words when one letter is removed,
// all the way down to a single letter.
//
// Without arguments prints the number of words per length. With words as
// arguments prints one reduction path per word.
//
// Usage:
//   wordkit-eliminate [-w WORDS] [WORD]... [--json]

use std::io::{self, Write};

use clap::Parser;
use wordkit_cli::{CliError, Verbosity, WordSource};
use wordkit_puzzles::elimination::EliminationTable;

/// Build the letter-elimination table of a word list.
#[derive(Debug, Parser)]
#[command(name = "wordkit-eliminate", version)]
struct Cli {
    #[command(flatten)]
    source: WordSource,

    #[command(flatten)]
    verbosity: Verbosity,

    /// Words to reduce letter by letter
    words: Vec<String>,

    /// Dump the whole table as JSON
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let words = cli.source.load()?;
    let table = EliminationTable::build(words.as_slice());

    if cli.json {
        return wordkit_cli::print_json(&table);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if cli.words.is_empty() {
        for len in 1..=table.max_len() {
            let count = table.level(len).map_or(0, |level| level.len());
            writeln!(out, "length {len:2}: {count} words")?;
        }
        return Ok(());
    }

    for word in &cli.words {
        match table.reduction_path(word) {
            Some(path) => writeln!(out, "{}", path.join(" -> "))?,
            None => writeln!(out, "{word}: cannot be reduced to a single letter")?,
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    wordkit_cli::init_logging(cli.verbosity);
    wordkit_cli::exit_on_error(run(cli));
}
