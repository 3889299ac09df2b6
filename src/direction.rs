//! The eight straight reading directions of a word search.
//!
//! Each direction is a unit step over `{-1, 0, 1} x {-1, 0, 1}` excluding the
//! null vector. Declaration order is significant: when a word reads correctly
//! in several directions from the same start cell, the earliest one in
//! [`Direction::ALL`] is reported.

use crate::grid::Coord;

/// A (row, col) step applied once per letter.
pub type Offset = (isize, isize);

/// A straight line direction, rows growing downward and columns rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    #[display("up")]
    Up,
    #[display("down")]
    Down,
    #[display("left")]
    Left,
    #[display("right")]
    Right,
    #[display("up-left")]
    UpLeft,
    #[display("up-right")]
    UpRight,
    #[display("down-left")]
    DownLeft,
    #[display("down-right")]
    DownRight,
}

impl Direction {
    /// All directions, in tie-breaking priority order.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Returns the (row, col) unit step for this direction.
    #[inline]
    pub const fn offset(self) -> Offset {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Returns the cell reached after `distance` steps from `start`.
    ///
    /// Returns `None` when that cell falls outside a `dim x dim` grid. There is
    /// no wrap-around: leaving the grid on either axis ends the walk.
    #[inline]
    pub fn walk(self, start: Coord, distance: usize, dim: usize) -> Option<Coord> {
        let (row_step, col_step) = self.offset();
        let row = shift(start.0, row_step, distance)?;
        let col = shift(start.1, col_step, distance)?;
        (row < dim && col < dim).then_some((row, col))
    }
}

/// Moves `origin` by `step * distance`, or `None` if the result is negative.
#[inline(always)]
fn shift(origin: usize, step: isize, distance: usize) -> Option<usize> {
    match step {
        0 => Some(origin),
        1 => origin.checked_add(distance),
        _ => origin.checked_sub(distance),
    }
}
