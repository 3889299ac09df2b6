//! Directional matching of a word against the grid.

use crate::direction::Direction;
use crate::grid::{Coord, Grid};
use crate::puzzle::fold_letter;

/// Checks whether `word` reads from `start` along `direction`, ignoring case.
///
/// `start` must lie inside the grid. Every later step is bounds-checked, and a
/// step leaving the grid is a mismatch rather than an error. Returns as soon as
/// a letter differs.
pub fn matches(grid: &Grid, word: &str, start: Coord, direction: Direction) -> bool {
    let dim = grid.dim();
    word.chars().enumerate().all(|(step, expected)| {
        direction
            .walk(start, step, dim)
            .is_some_and(|coord| fold_letter(grid.letter(coord)) == fold_letter(expected))
    })
}

/// Returns the first direction in [`Direction::ALL`] along which `word` reads
/// from `start`.
///
/// A one-letter word matching its start cell reports [`Direction::Up`].
pub fn first_direction(grid: &Grid, word: &str, start: Coord) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&direction| matches(grid, word, start, direction))
}
