//! Single maze instance as seen by a driver

use log::debug;

use crate::error::{MazeError, Result};
use crate::grid::{Direction, Grid, Position};
use crate::maze_generator::{GenerationState, MazeGenerator};
use crate::player::{MoveOutcome, Player};
use crate::render::{render, Overlay};
use crate::solver::solve;

/// Maze size and randomness
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Seed for reproducible mazes
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            seed: None,
        }
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.cols < 1 {
            return Err(MazeError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Grid, generation cursor and player of one maze.
///
/// The driver calls [MazeSession::step] once per frame until
/// [MazeSession::is_complete]; after that, moves and solving are enabled.
pub struct MazeSession {
    grid: Grid,
    generator: MazeGenerator,
    player: Player,
    solution: Option<Vec<Position>>,
}

impl MazeSession {
    pub fn new(config: MazeConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)?;
        let player = Player::new(&grid);
        Ok(Self {
            grid,
            generator: MazeGenerator::new(config.seed),
            player,
            solution: None,
        })
    }

    /// Discard the current maze and start over with a fully walled grid
    pub fn reset(&mut self) -> Result<()> {
        self.grid = Grid::new(self.grid.rows(), self.grid.cols())?;
        self.generator.restart();
        self.player = Player::new(&self.grid);
        self.solution = None;
        debug!("new {}x{} maze", self.grid.rows(), self.grid.cols());
        Ok(())
    }

    /// Advance generation by one step
    pub fn step(&mut self) -> Result<GenerationState> {
        self.generator.step(&mut self.grid)
    }

    pub fn run_to_completion(&mut self) -> Result<usize> {
        self.generator.run_to_completion(&mut self.grid)
    }

    pub fn state(&self) -> GenerationState {
        self.generator.state()
    }

    pub fn is_complete(&self) -> bool {
        self.generator.is_complete()
    }

    /// Solve from entrance to exit, flagging the path on the grid.
    ///
    /// Returns [MazeError::PreconditionViolation] while generation is
    /// still running.
    pub fn solve(&mut self) -> Result<&[Position]> {
        if !self.is_complete() {
            return Err(MazeError::PreconditionViolation(
                "maze must be fully generated before solving",
            ));
        }
        let (start, goal) = (self.grid.entrance(), self.grid.exit());
        let path = solve(&mut self.grid, start, goal)?;
        Ok(self.solution.insert(path).as_slice())
    }

    /// Move player one cell; input is ignored until generation completes
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        if !self.is_complete() {
            return MoveOutcome::Blocked;
        }
        self.player.move_in(&self.grid, direction)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Generation cursor position
    pub fn cursor(&self) -> Position {
        self.generator.cursor()
    }

    /// Path from the last successful solve
    pub fn solution(&self) -> Option<&[Position]> {
        self.solution.as_deref()
    }

    /// Draw the maze: cursor while generating, player once complete
    pub fn render(&self) -> String {
        let overlay = if self.is_complete() {
            Overlay {
                player: Some(self.player.position()),
                cursor: None,
            }
        } else {
            Overlay {
                player: None,
                cursor: Some(self.cursor()),
            }
        };
        render(&self.grid, &overlay)
    }
}
