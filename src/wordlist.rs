//! Word-list loading and insertion orders.
//!
//! A word list is UTF-8 text with one term per line; trailing whitespace is
//! stripped from every line. Insertion order decides the shape of a ternary
//! search tree, so this module also produces the three orders used when
//! measuring it:
//!
//! * [`InsertionOrder::Best`] - median order, which keeps the tree balanced
//! * [`InsertionOrder::Average`] - a random shuffle
//! * [`InsertionOrder::Worst`] - sorted order, which degenerates sibling chains

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WordListConfig;
use crate::data_structures::TernarySearchTree;
use crate::error::TstResult;

/// Reads the word list at `path`.
///
/// # Errors
///
/// Returns [`TstError::Io`](crate::error::TstError::Io) if the file cannot be
/// opened or is not valid UTF-8.
pub fn load_words<P: AsRef<Path>>(path: P, config: &WordListConfig) -> TstResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let words = parse_words(BufReader::new(file), config)?;
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Reads one term per line from `reader`, stripping trailing whitespace.
pub fn parse_words<R: BufRead>(reader: R, config: &WordListConfig) -> TstResult<Vec<String>> {
    let limit = config.max_words.unwrap_or(usize::MAX);
    let mut words = Vec::new();

    for line in reader.lines() {
        if words.len() >= limit {
            break;
        }
        let line = line?;
        let word = line.trim_end();
        if word.is_empty() && config.skip_blank_lines {
            continue;
        }
        words.push(word.to_string());
    }

    Ok(words)
}

/// Builds a tree from the word list at `path`.
pub fn load_tree<P: AsRef<Path>>(path: P, config: &WordListConfig) -> TstResult<TernarySearchTree> {
    Ok(load_words(path, config)?.into_iter().collect())
}

/// Reorders `words` so that each slice's middle element comes before both halves.
///
/// Inserting sorted input in this order yields a balanced tree.
pub fn median_order<T: Clone>(words: &[T]) -> Vec<T> {
    let mut ordered = Vec::with_capacity(words.len());
    // Work list of half-open ranges; right half pushed first so the left is handled first.
    let mut pending = vec![(0, words.len())];

    while let Some((lower, upper)) = pending.pop() {
        if lower >= upper {
            continue;
        }
        let mid = lower + (upper - lower) / 2;
        ordered.push(words[mid].clone());
        pending.push((mid + 1, upper));
        pending.push((lower, mid));
    }

    ordered
}

/// The order in which words are fed to a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionOrder {
    /// Median of the sorted words first, recursively
    Best,
    /// Shuffled
    Average,
    /// Sorted ascending
    Worst,
}

impl InsertionOrder {
    /// All orders, best case first.
    pub const ALL: [InsertionOrder; 3] = [
        InsertionOrder::Best,
        InsertionOrder::Average,
        InsertionOrder::Worst,
    ];

    /// Short lowercase name, used for labels.
    pub fn name(self) -> &'static str {
        match self {
            InsertionOrder::Best => "best",
            InsertionOrder::Average => "average",
            InsertionOrder::Worst => "worst",
        }
    }

    /// Returns `words` arranged in this order, shuffling with `rng` when needed.
    pub fn arrange_with<R: Rng + ?Sized>(self, words: &[String], rng: &mut R) -> Vec<String> {
        match self {
            InsertionOrder::Best => {
                let mut sorted = words.to_vec();
                sorted.sort();
                median_order(&sorted)
            }
            InsertionOrder::Average => {
                let mut shuffled = words.to_vec();
                shuffled.shuffle(rng);
                shuffled
            }
            InsertionOrder::Worst => {
                let mut sorted = words.to_vec();
                sorted.sort();
                sorted
            }
        }
    }

    /// Returns `words` arranged in this order using the thread-local RNG.
    pub fn arrange(self, words: &[String]) -> Vec<String> {
        self.arrange_with(words, &mut rand::thread_rng())
    }
}
