// wordkit-rotate: Rotate the consonants of each stdin line.
//
// Vowels, digits and punctuation stay in place and every position keeps its
// capitalization: with offset 1, "Donald Erwin Knuth" becomes
// "Noladr Ewnik Ntuhd".
//
// Usage:
//   wordkit-rotate [-o OFFSET] [--spread N]

use std::io::{self, BufRead, Write};

use clap::Parser;
use wordkit_cli::{CliError, Verbosity};
use wordkit_puzzles::rotate::rotate_consonants;

/// Rotate consonants cyclically, keeping vowels and case in place.
#[derive(Debug, Parser)]
#[command(name = "wordkit-rotate", version)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Rotation offset; negative values rotate the other way
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    offset: isize,

    /// Print every offset from -N to N instead of a single one
    #[arg(long, value_name = "N")]
    spread: Option<isize>,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in io::stdin().lock().lines() {
        let line = line?;
        match cli.spread {
            Some(n) => {
                writeln!(out, "{line}")?;
                for off in -n.abs()..=n.abs() {
                    writeln!(out, "{off:3}: {}", rotate_consonants(&line, off))?;
                }
            }
            None => writeln!(out, "{}", rotate_consonants(&line, cli.offset))?,
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    wordkit_cli::init_logging(cli.verbosity);
    wordkit_cli::exit_on_error(run(cli));
}
