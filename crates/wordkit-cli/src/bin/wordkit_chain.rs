// wordkit-chain: Build a word chain where every word starts with the
// previous word minus its first k characters.
//
// Usage:
//   wordkit-chain [-w WORDS] FIRST [-k OVERLAP] [-n LENGTH] [--word-len N] [--longest]

use std::io::{self, Write};

use clap::Parser;
use tracing::info;
use wordkit_cli::{CliError, Verbosity, WordSource};
use wordkit_puzzles::chain::{ChainOptions, longest_word_chain, word_chain};

/// Build a word chain by backtracking search.
#[derive(Debug, Parser)]
#[command(name = "wordkit-chain", version)]
struct Cli {
    #[command(flatten)]
    source: WordSource,

    #[command(flatten)]
    verbosity: Verbosity,

    /// First word of the chain
    first: String,

    /// Characters dropped from each word to get the next prefix
    #[arg(short = 'k', long, default_value_t = ChainOptions::default().overlap)]
    overlap: usize,

    /// Number of words in the chain
    #[arg(short = 'n', long, default_value_t = ChainOptions::default().target_len)]
    length: usize,

    /// Only use words of this many characters
    #[arg(long)]
    word_len: Option<usize>,

    /// Grow the chain as long as possible, up to --length words
    #[arg(long)]
    longest: bool,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut words = cli.source.load()?;
    if let Some(len) = cli.word_len {
        words = words.with_len(len);
    }
    info!(words = words.len(), first = %cli.first, "searching for chain");

    let chain = if cli.longest {
        Some(longest_word_chain(&words, &cli.first, cli.overlap, cli.length))
    } else {
        let options = ChainOptions {
            overlap: cli.overlap,
            target_len: cli.length,
        };
        word_chain(&words, &[cli.first.as_str()], options)
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match chain {
        Some(chain) => writeln!(out, "{}", chain.join(" -> "))?,
        None => writeln!(
            out,
            "no chain of {} words starting from {:?}",
            cli.length, cli.first
        )?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    wordkit_cli::init_logging(cli.verbosity);
    wordkit_cli::exit_on_error(run(cli));
}
