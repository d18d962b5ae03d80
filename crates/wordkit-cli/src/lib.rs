// wordkit-cli: shared utilities for CLI tools.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args};
use serde::Serialize;
use tracing::{Level, debug};
use wordkit_core::{LoadOptions, SortPolicy, WordError, WordList};

/// Environment variable naming the word list file.
pub const WORDS_ENV: &str = "WORDKIT_WORDS";

/// Default word list file name.
const WORDS_FILE: &str = "words_sorted.txt";

/// Error type for the command-line tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Word(#[from] WordError),

    #[error("could not find {file} in any of the search paths:\n{paths}")]
    WordListNotFound { file: String, paths: String },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

/// Word list location and loading flags shared by every tool.
#[derive(Debug, Clone, Args)]
pub struct WordSource {
    /// Word list file, one word per line
    #[arg(short = 'w', long = "words", value_name = "PATH")]
    pub words: Option<PathBuf>,

    /// Sort the word list instead of rejecting unsorted input
    #[arg(long)]
    pub sort: bool,

    /// Lowercase words while loading
    #[arg(long)]
    pub lowercase: bool,
}

impl WordSource {
    pub fn options(&self) -> LoadOptions {
        LoadOptions {
            sort: if self.sort {
                SortPolicy::Sort
            } else {
                SortPolicy::Verify
            },
            lowercase: self.lowercase,
        }
    }

    /// Locate and load the word list.
    ///
    /// Search order:
    /// 1. `--words PATH`
    /// 2. `WORDKIT_WORDS` environment variable
    /// 3. `~/.wordkit/words_sorted.txt`
    /// 4. `words_sorted.txt` in the current directory
    pub fn load(&self) -> Result<WordList, CliError> {
        load_first(&build_search_paths(self.words.clone()), self.options())
    }
}

/// Load the first existing file of `search_paths`.
fn load_first(search_paths: &[PathBuf], options: LoadOptions) -> Result<WordList, CliError> {
    for path in search_paths {
        if path.is_file() {
            let words = WordList::load(path, options)?;
            debug!(path = %path.display(), words = words.len(), "loaded word list");
            return Ok(words);
        }
    }

    Err(CliError::WordListNotFound {
        file: WORDS_FILE.to_string(),
        paths: search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

/// Build the list of candidate word list files.
fn build_search_paths(explicit: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = explicit {
        paths.push(p);
    }

    if let Ok(env_path) = std::env::var(WORDS_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".wordkit").join(WORDS_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// `-v` flags controlling log verbosity.
#[derive(Debug, Clone, Copy, Args)]
pub struct Verbosity {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Verbosity {
    pub fn level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Install the stderr log subscriber.
pub fn init_logging(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_max_level(verbosity.level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read all of stdin.
pub fn read_stdin() -> Result<String, CliError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

/// Write `value` to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Run a tool body, exiting through [`fatal`] on error.
pub fn exit_on_error(result: Result<(), CliError>) {
    if let Err(e) = result {
        fatal(&e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some(PathBuf::from("/tmp/words.txt")));
        assert_eq!(paths[0], PathBuf::from("/tmp/words.txt"));
        assert!(paths.last().is_some_and(|p| p.ends_with(WORDS_FILE)));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(Verbosity { verbose: 0 }.level(), Level::WARN);
        assert_eq!(Verbosity { verbose: 2 }.level(), Level::DEBUG);
        assert_eq!(Verbosity { verbose: 9 }.level(), Level::TRACE);
    }

    #[test]
    fn load_options_follow_flags() {
        let source = WordSource {
            words: None,
            sort: true,
            lowercase: false,
        };
        assert_eq!(source.options().sort, SortPolicy::Sort);
    }

    #[test]
    fn missing_word_list_lists_search_paths() {
        let search_paths = [
            PathBuf::from("/nonexistent/wordkit/list.txt"),
            PathBuf::from("/nonexistent/home/.wordkit").join(WORDS_FILE),
        ];
        match load_first(&search_paths, LoadOptions::default()) {
            Err(CliError::WordListNotFound { file, paths }) => {
                assert_eq!(file, WORDS_FILE);
                assert_eq!(paths.lines().count(), 2);
                assert!(paths.contains("  - /nonexistent/wordkit/list.txt"));
                assert!(paths.contains("/nonexistent/home/.wordkit"));
            }
            other => panic!("expected WordListNotFound, got {other:?}"),
        }
    }

    #[test]
    fn first_existing_path_is_loaded() {
        let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../wordkit-puzzles/tests/data/words_small.txt");
        let search_paths = [PathBuf::from("/nonexistent/wordkit/list.txt"), fixture];
        let words = load_first(&search_paths, LoadOptions::default())
            .expect("fixture word list should load");
        assert_eq!(words.len(), 29);
        assert!(words.contains("bookkeeper"));
    }
}
