// wordkit-window: Longest substring of stdin with at most k distinct
// characters.
//
// Lines are joined with single spaces before searching, so a substring may
// span line breaks.
//
// Usage:
//   wordkit-window [-k K] [--up-to]

use std::io::{self, Write};

use clap::Parser;
use wordkit_cli::{CliError, Verbosity};
use wordkit_puzzles::window::longest_substring_with_k_distinct;

/// Find the longest substring using at most k different characters.
#[derive(Debug, Parser)]
#[command(name = "wordkit-window", version)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Maximum number of distinct characters
    #[arg(short, default_value_t = 2)]
    k: usize,

    /// Print the answer for every k from 1 up to K
    #[arg(long)]
    up_to: bool,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = wordkit_cli::read_stdin()?;
    let text = input.lines().collect::<Vec<_>>().join(" ");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let ks = if cli.up_to { 1..=cli.k } else { cli.k..=cli.k };
    for k in ks {
        let found = longest_substring_with_k_distinct(&text, k);
        writeln!(out, "k = {k:2}: {found}")?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    wordkit_cli::init_logging(cli.verbosity);
    wordkit_cli::exit_on_error(run(cli));
}
