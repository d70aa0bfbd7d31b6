//! Error types

use thiserror::Error;

use crate::grid::Position;

/// Errors raised by the maze engine.
///
/// Rejected player moves are not errors, see [crate::player::MoveOutcome].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Grid constructed with a zero row or column count.
    #[error("invalid grid dimensions {rows}x{cols}, both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    /// Coordinate outside of the grid.
    #[error("position (row={row}, col={col}) is outside of the grid")]
    OutOfBounds { row: isize, col: isize },

    /// Wall operation on cells that do not share an edge.
    #[error("cells {a} and {b} are not adjacent")]
    NotAdjacent { a: Position, b: Position },

    /// Operation requested before the maze is ready for it.
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),

    /// Goal could not be reached from start, the wall state is inconsistent.
    #[error("no path from {start} to {goal}")]
    Unreachable { start: Position, goal: Position },
}

impl MazeError {
    pub(crate) fn out_of_bounds(position: Position) -> Self {
        MazeError::OutOfBounds {
            row: position.row as isize,
            col: position.col as isize,
        }
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, MazeError>;
