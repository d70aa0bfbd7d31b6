//! Player movement inside a generated maze

use log::debug;

use crate::grid::{Direction, Grid, Position};

/// Result of a move request
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MoveOutcome {
    /// Target out of bounds, not adjacent or behind a wall; nothing changed
    Blocked,
    /// Player stepped to the target
    Moved,
    /// Player stepped onto the exit for the first time
    Won,
}

/// Player walking from the entrance towards the exit
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Player {
    position: Position,
    goal: Position,
    has_won: bool,
}

impl Player {
    /// Place player at the entrance of `grid`
    pub fn new(grid: &Grid) -> Self {
        Self {
            position: grid.entrance(),
            goal: grid.exit(),
            has_won: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the exit has been reached
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// Move to `(target_row, target_col)`.
    ///
    /// Accepted only if the target is inside the grid, orthogonally adjacent
    /// to the current position and not separated from it by a wall. Rejected
    /// moves leave the player in place. Reaching the exit reports
    /// [MoveOutcome::Won] once; later moves onto it are plain moves.
    pub fn move_to(&mut self, grid: &Grid, target_row: isize, target_col: isize) -> MoveOutcome {
        let Some(target) = grid.position(target_row, target_col) else {
            return MoveOutcome::Blocked;
        };
        if !grid.is_connected(self.position, target) {
            return MoveOutcome::Blocked;
        }
        self.position = target;

        if self.position == self.goal && !self.has_won {
            debug!("player reached the exit at {}", self.goal);
            self.has_won = true;
            MoveOutcome::Won
        } else {
            MoveOutcome::Moved
        }
    }

    /// Move one cell in `direction`
    pub fn move_in(&mut self, grid: &Grid, direction: Direction) -> MoveOutcome {
        let (dr, dc) = direction.delta();
        self.move_to(
            grid,
            self.position.row as isize + dr,
            self.position.col as isize + dc,
        )
    }
}
