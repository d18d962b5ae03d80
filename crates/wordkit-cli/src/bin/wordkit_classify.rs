// wordkit-classify: Find palindromes, semordnilaps, rotodromes and other
// word classes in a word list.
//
// Usage:
//   wordkit-classify [-w WORDS] KIND [--chars CHARS] [--len N] [--limit N] [--json]
//
// Kinds:
//   palindromes          words that read the same backwards
//   semordnilaps         words that are a different word backwards
//   rotodromes           words that are a different word when rotated
//   almost-palindromes   words that become palindromes minus one letter
//   triple-duplicates    words with three doubled letters
//   consecutive-triples  words with three doubled letters in a row
//   alphabet             words spelled only with --chars

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use wordkit_cli::{CliError, Verbosity, WordSource};
use wordkit_puzzles::classify::{
    AlmostPalindrome, ConsecutiveTripleDuplicate, LimitedAlphabet, Palindrome, Rotodrome,
    Semordnilap, TripleDuplicate, WordClassifier, select,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Palindromes,
    Semordnilaps,
    Rotodromes,
    AlmostPalindromes,
    TripleDuplicates,
    ConsecutiveTriples,
    Alphabet,
}

/// Classify the words of a word list.
#[derive(Debug, Parser)]
#[command(name = "wordkit-classify", version)]
struct Cli {
    #[command(flatten)]
    source: WordSource,

    #[command(flatten)]
    verbosity: Verbosity,

    /// Word class to look for
    #[arg(value_enum)]
    kind: Kind,

    /// Allowed characters for the `alphabet` class
    #[arg(long, default_value = "abcdef")]
    chars: String,

    /// Only consider words of this many characters
    #[arg(long)]
    len: Option<usize>,

    /// Print at most this many words
    #[arg(long)]
    limit: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    count: usize,
    words: &'a [&'a str],
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut words = cli.source.load()?;
    if let Some(len) = cli.len {
        words = words.with_len(len);
    }
    let words = words.as_slice();

    let classifier: Box<dyn WordClassifier + '_> = match cli.kind {
        Kind::Palindromes => Box::new(Palindrome),
        Kind::Semordnilaps => Box::new(Semordnilap::new(words)),
        Kind::Rotodromes => Box::new(Rotodrome::new(words)),
        Kind::AlmostPalindromes => Box::new(AlmostPalindrome),
        Kind::TripleDuplicates => Box::new(TripleDuplicate),
        Kind::ConsecutiveTriples => Box::new(ConsecutiveTripleDuplicate),
        Kind::Alphabet => Box::new(LimitedAlphabet::new(&cli.chars)),
    };

    let found = select(classifier.as_ref(), words);
    let shown = &found[..cli.limit.map_or(found.len(), |n| n.min(found.len()))];

    if cli.json {
        return wordkit_cli::print_json(&Report {
            count: found.len(),
            words: shown,
        });
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    writeln!(out, "Found {} {:?}:", found.len(), cli.kind)?;
    writeln!(out, "{}", shown.join(", "))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    wordkit_cli::init_logging(cli.verbosity);
    wordkit_cli::exit_on_error(run(cli));
}
