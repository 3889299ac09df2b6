//! Word search solver.
//!
//! Each word is resolved independently, in list order:
//! - candidate start cells are visited in row-major order
//! - at each candidate the eight directions are tried in [`Direction::ALL`] order
//! - the first (cell, direction) pair that reads the word wins and is stamped
//! - a word with no such pair is removed from the word list
//!
//! Only the first occurrence of a word is ever reported. Overlapping words are
//! stamped in list order, so a later word overwrites shared cells.
//!
//! [`Direction::ALL`]: crate::direction::Direction::ALL

use rustc_hash::FxHashMap;

use crate::grid::{Coord, Grid, SolvedGrid};
use crate::matcher::first_direction;
use crate::puzzle::{fold_letter, fold_word, Placement, WordList};

/// Start cells of every case-folded letter, each list in row-major order.
type StartIndex = FxHashMap<char, Vec<Coord>>;

/// Result of a solve pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Overlay holding the letters of every found word.
    pub solved: SolvedGrid,
    /// Input words minus those not found, in input order.
    pub words: WordList,
    /// Found placements, in word order.
    pub placements: Vec<Placement>,
    /// Words removed because they do not occur in the grid, in word order.
    pub missing: Vec<String>,
}

impl Solution {
    /// Returns the placement of `word`, if it was found.
    pub fn placement(&self, word: &str) -> Option<&Placement> {
        let folded = fold_word(word);
        self.placements.iter().find(|placement| placement.word == folded)
    }
}

/// Builds the first-letter index used to enumerate candidate start cells.
///
/// Visiting a letter's list front to back is the same as scanning the whole
/// grid row by row and skipping cells with a different letter.
fn build_start_index(grid: &Grid) -> StartIndex {
    let mut index = StartIndex::default();
    for (coord, letter) in grid.cells() {
        index.entry(fold_letter(letter)).or_default().push(coord);
    }
    index
}

/// Finds the first placement of `word`, scanning start cells row by row.
fn locate(grid: &Grid, start_index: &StartIndex, word: &str) -> Option<Placement> {
    let first_letter = fold_letter(word.chars().next()?);
    let starts = start_index.get(&first_letter)?;

    starts.iter().find_map(|&start| {
        first_direction(grid, word, start).map(|direction| Placement::new(word, start, direction))
    })
}

/// Locates every word of `words` in `grid`.
///
/// The pass is deterministic: identical inputs give identical solutions.
pub fn solve(grid: &Grid, words: WordList) -> Solution {
    let start_index = build_start_index(grid);

    let mut solved = SolvedGrid::new(grid.dim());
    let mut found = Vec::with_capacity(words.len());
    let mut placements = Vec::with_capacity(words.len());
    let mut missing = Vec::new();

    for word in words {
        match locate(grid, &start_index, &word) {
            Some(placement) => {
                log::debug!(
                    "found {word:?} at {:?} reading {}",
                    placement.start,
                    placement.direction
                );
                solved.stamp(&placement);
                placements.push(placement);
                found.push(word);
            }
            None => {
                log::info!("{word:?} does not occur in the grid; removing it");
                missing.push(word);
            }
        }
    }

    log::debug!(
        "solved {}x{} grid: {} found, {} missing",
        grid.dim(),
        grid.dim(),
        found.len(),
        missing.len()
    );

    Solution {
        solved,
        words: WordList::from_distinct(found),
        placements,
        missing,
    }
}
