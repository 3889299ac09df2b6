//! Puzzle definition: the letter grid, the target words and word placements.

use rustc_hash::FxHashSet;

use crate::direction::Direction;
use crate::grid::{Coord, Grid};
use crate::solver::{self, Solution};

/// Case-folds a letter for comparison and output.
///
/// Uses the Unicode uppercase mapping when it is a single char, so a word
/// always stamps exactly as many cells as it matched.
#[inline]
pub fn fold_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => letter,
    }
}

/// Case-folds a whole word with [`fold_letter`].
pub fn fold_word(word: &str) -> String {
    word.chars().map(fold_letter).collect()
}

/// Ordered list of distinct target words.
///
/// Words keep the spelling they were given. Distinctness is case-insensitive:
/// a later word that folds to an earlier one is dropped, as are blank entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word| {
                if word.trim().is_empty() {
                    return false;
                }
                let fresh = seen.insert(fold_word(word));
                if !fresh {
                    log::debug!("dropping duplicate word {word:?}");
                }
                fresh
            })
            .collect();
        Self { words }
    }

    /// Wraps words already known to be distinct and non-blank.
    pub(crate) fn from_distinct(words: Vec<String>) -> Self {
        Self { words }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        let folded = fold_word(word);
        self.words.iter().any(|w| fold_word(w) == folded)
    }
}

impl IntoIterator for WordList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

/// A located occurrence of a word: its start cell and reading direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The word as stamped, case-folded to uppercase.
    pub word: String,
    pub start: Coord,
    pub direction: Direction,
}

impl Placement {
    pub fn new(word: &str, start: Coord, direction: Direction) -> Self {
        Self {
            word: fold_word(word),
            start,
            direction,
        }
    }

    /// Number of cells the placement covers.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Yields each covered cell with the letter stamped there.
    ///
    /// Steps that would leave a `dim x dim` grid are skipped; placements
    /// produced by the solver never take such steps.
    pub fn path(&self, dim: usize) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.word.chars().enumerate().filter_map(move |(step, letter)| {
            let coord = self.direction.walk(self.start, step, dim);
            debug_assert!(coord.is_some(), "{self:?} leaves a {dim}x{dim} grid");
            coord.map(|coord| (coord, letter))
        })
    }
}

/// A grid together with the words hidden in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: WordList,
}

impl Puzzle {
    pub fn new(grid: Grid, words: WordList) -> Self {
        Self { grid, words }
    }

    /// Locates every word. See [`solver::solve`].
    pub fn solve(&self) -> Solution {
        solver::solve(&self.grid, self.words.clone())
    }
}
