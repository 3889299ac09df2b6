//! Word Search Solver Library
//!
//! Locates each word of a word list in a square letter grid, reading along
//! one of eight straight directions, and marks the found letters on an
//! overlay grid.
//!
//! ```
//! use wordsearch::{Grid, WordList};
//!
//! let grid = Grid::from_rows(&["C A T", "X X X", "X X X"])?;
//! let solution = wordsearch::solve(&grid, WordList::new(["cat", "dog"]));
//!
//! assert_eq!(solution.words.as_slice(), ["cat"]);
//! assert_eq!(solution.missing, ["dog"]);
//! assert_eq!(wordsearch::grid::format_overlay(&solution.solved), "C A T\n. . .\n. . .\n");
//! # Ok::<(), wordsearch::PuzzleError>(())
//! ```

pub mod direction;
pub mod error;
pub mod grid;
pub mod html;
pub mod matcher;
pub mod persistence;
pub mod puzzle;
pub mod solver;

pub use direction::Direction;
pub use error::{PuzzleError, Result};
pub use grid::{Coord, Grid, SolvedGrid};
pub use puzzle::{Placement, Puzzle, WordList};
pub use solver::{solve, Solution};
