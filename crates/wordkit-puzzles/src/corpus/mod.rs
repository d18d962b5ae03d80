// Corpus word statistics
//
// Text is normalized line by line (lowercase, contractions expanded,
// possessives stripped) and split into runs of the letters a..z before
// counting.

pub mod frequency;
pub mod normalize;

pub use frequency::{WordCount, WordFrequency};
pub use normalize::{normalize_line, split_words};
