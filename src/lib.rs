//! Generate perfect mazes, find the way through, walk them.
//!
//! Mazes are carved by a recursive backtracker that advances one passage per
//! [MazeGenerator::step], so that generation can be animated. The finished
//! maze is a spanning tree of the grid: exactly one path joins any two cells.
//!
//! # Examples
//! ## Generate and solve
//! ```
//! use maze_backtracker::{Grid, MazeGenerator, Position, solve};
//!
//! let mut grid = Grid::new(10, 10).unwrap();
//! let mut gen = MazeGenerator::new(Some(1));
//! gen.run_to_completion(&mut grid).unwrap();
//! assert_eq!(grid.passage_count(), 99);
//!
//! let path = solve(&mut grid, Position::new(0, 0), Position::new(9, 9)).unwrap();
//! assert_eq!(path.last(), Some(&Position::new(9, 9)));
//! ```
//!
//! ## Drive a session frame by frame
//! ```
//! use maze_backtracker::{Direction, GenerationState, MazeConfig, MazeSession, MoveOutcome};
//!
//! let mut session = MazeSession::new(MazeConfig { rows: 1, cols: 2, seed: None }).unwrap();
//! while session.step().unwrap() != GenerationState::Complete {
//!     println!("{}", session.render());
//! }
//! assert_eq!(session.move_player(Direction::Right), MoveOutcome::Won);
//! ```

pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod player;
pub mod render;
pub mod session;
pub mod solver;

pub use error::{MazeError, Result};
pub use grid::{Cell, Direction, Grid, Position};
pub use maze_generator::{GenerationState, MazeGenerator};
pub use player::{MoveOutcome, Player};
pub use session::{MazeConfig, MazeSession};
pub use solver::solve;
