//! Letter grid and solved overlay for word search puzzles.
//!
//! Both grids are square and stored as flat row-major vectors, so cell
//! `(row, col)` lives at index `row * dim + col`.

use crate::error::{PuzzleError, Result};
use crate::puzzle::Placement;

/// A (row, col) cell coordinate, 0-based from the top-left corner.
pub type Coord = (usize, usize);

/// Converts a coordinate to a linear cell index.
#[inline(always)]
pub const fn coord_to_idx(dim: usize, (row, col): Coord) -> usize {
    row * dim + col
}

/// Converts a linear cell index to a coordinate.
#[inline(always)]
pub const fn idx_to_coord(dim: usize, cell_index: usize) -> Coord {
    (cell_index / dim, cell_index % dim)
}

/// An immutable square matrix of letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dim: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Builds a grid from rows of letters.
    ///
    /// Fails when there are no rows or when any row's length differs from the
    /// number of rows.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(PuzzleError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(dim * dim);
        for (row, letters) in rows.into_iter().enumerate() {
            if letters.len() != dim {
                return Err(PuzzleError::NotSquare {
                    row,
                    len: letters.len(),
                    expected: dim,
                });
            }
            cells.extend(letters);
        }

        Ok(Self { dim, cells })
    }

    /// Builds a grid from one string per row, ignoring whitespace inside rows.
    ///
    /// `["C A T", "DOG", ...]` are both accepted row spellings.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Self::new(
            rows.iter()
                .map(|row| row.as_ref().chars().filter(|c| !c.is_whitespace()).collect())
                .collect(),
        )
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the letter at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid.
    #[inline]
    pub fn letter(&self, coord: Coord) -> char {
        assert!(coord.0 < self.dim && coord.1 < self.dim, "{coord:?} outside grid");
        self.cells[coord_to_idx(self.dim, coord)]
    }

    /// Returns the letter at `coord`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<char> {
        (coord.0 < self.dim && coord.1 < self.dim)
            .then(|| self.cells[coord_to_idx(self.dim, coord)])
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(cell_index, &letter)| (idx_to_coord(self.dim, cell_index), letter))
    }
}

/// Overlay holding only the letters of located words.
///
/// Cells start unmarked. Stamping a placement overwrites whatever an earlier
/// placement left on the shared cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    dim: usize,
    cells: Vec<Option<char>>,
}

impl SolvedGrid {
    /// Creates an all-unmarked overlay for a `dim x dim` grid.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![None; dim * dim],
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the stamped letter at `coord`, if any.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<char> {
        if coord.0 < self.dim && coord.1 < self.dim {
            self.cells[coord_to_idx(self.dim, coord)]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_marked(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Number of cells carrying a stamped letter.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Writes the placement's letters along its path.
    pub fn stamp(&mut self, placement: &Placement) {
        for (coord, letter) in placement.path(self.dim) {
            self.cells[coord_to_idx(self.dim, coord)] = Some(letter);
        }
    }
}

/// Formats the answer grid as text.
///
/// Stamped cells show their uppercase letter, other cells the original grid
/// letter. Cells are separated by a single space, one row per line.
pub fn format_solution(grid: &Grid, solved: &SolvedGrid) -> String {
    format_rows(grid.dim(), |coord| {
        solved.get(coord).unwrap_or_else(|| grid.letter(coord))
    })
}

/// Formats only the located letters, with `.` for unmarked cells.
pub fn format_overlay(solved: &SolvedGrid) -> String {
    format_rows(solved.dim(), |coord| solved.get(coord).unwrap_or('.'))
}

fn format_rows(dim: usize, display_char: impl Fn(Coord) -> char) -> String {
    let mut output = String::with_capacity(dim * dim * 2);
    for row in 0..dim {
        for col in 0..dim {
            if col > 0 {
                output.push(' ');
            }
            output.push(display_char((row, col)));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for dim in 1..6 {
            for idx in 0..dim * dim {
                let coord = idx_to_coord(dim, idx);
                assert!(coord.0 < dim && coord.1 < dim);
                assert_eq!(coord_to_idx(dim, coord), idx, "Roundtrip failed for index {idx}");
            }
        }
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        assert!(matches!(Grid::new(Vec::new()), Err(PuzzleError::EmptyGrid)));
    }

    #[test]
    fn test_non_square_grid_is_rejected() {
        let err = Grid::from_rows(&["AB", "C"]).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        ));
        assert_eq!(err.to_string(), "grid row 1 has 1 cells, expected 2");

        assert!(Grid::from_rows(&["ABC", "DEF"]).is_err());
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = Grid::from_rows(&["A B", "C D"]).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            [((0, 0), 'A'), ((0, 1), 'B'), ((1, 0), 'C'), ((1, 1), 'D')]
        );
        assert_eq!(grid.get((2, 0)), None);
        assert_eq!(grid.letter((1, 0)), 'C');
    }

    #[test]
    fn test_stamp_overwrites_shared_cells() {
        let mut solved = SolvedGrid::new(3);
        solved.stamp(&Placement::new("cat", (0, 0), Direction::Right));
        solved.stamp(&Placement::new("tin", (0, 2), Direction::Down));
        assert_eq!(solved.marked_count(), 5);
        assert_eq!(solved.get((0, 2)), Some('T'));

        solved.stamp(&Placement::new("ox", (0, 1), Direction::DownRight));
        assert_eq!(solved.get((1, 2)), Some('X'));
        assert_eq!(solved.get((0, 1)), Some('O'));
        assert_eq!(solved.marked_count(), 5);
    }

    #[test]
    fn test_format_solution_and_overlay() {
        let grid = Grid::from_rows(&["cat", "xxx", "xxx"]).unwrap();
        let mut solved = SolvedGrid::new(3);
        solved.stamp(&Placement::new("cat", (0, 0), Direction::Right));

        assert_eq!(format_solution(&grid, &solved), "C A T\nx x x\nx x x\n");
        assert_eq!(format_overlay(&solved), "C A T\n. . .\n. . .\n");
    }
}
