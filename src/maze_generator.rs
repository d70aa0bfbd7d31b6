//! Maze generation

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::Result;
use crate::grid::{Direction, Grid, Position};

/// Progress of a generation run
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GenerationState {
    /// Cursor at the origin, nothing visited yet
    Ready,
    /// Passages are still being carved
    Stepping,
    /// Every cell has been visited and the stack is exhausted
    Complete,
}

/// Recursive backtracker, driven one step at a time.
///
/// The recursion is kept in an explicit stack so that generation can be
/// paused between steps and rendered, e.g. once per animation frame.
pub struct MazeGenerator {
    random: StdRng,
    /// Cell the traversal currently stands on
    current: Position,
    /// Cells to return to once the current branch is exhausted
    stack: Vec<Position>,
    state: GenerationState,
}

impl MazeGenerator {
    /// Create generator starting at the grid origin.
    ///
    /// - `seed`: Seed for reproducible mazes, or `None` for entropy.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
            current: Position::new(0, 0),
            stack: Vec::new(),
            state: GenerationState::Ready,
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == GenerationState::Complete
    }

    /// Current traversal position
    pub fn cursor(&self) -> Position {
        self.current
    }

    pub fn backtrack_stack(&self) -> &[Position] {
        &self.stack
    }

    /// Return cursor to the origin for a fresh grid, keeping the random stream
    pub fn restart(&mut self) {
        self.current = Position::new(0, 0);
        self.stack.clear();
        self.state = GenerationState::Ready;
    }

    /// Carve one passage.
    ///
    /// Marks the cursor cell visited and moves to a random unvisited
    /// neighbour, opening the wall in between. When the cursor is at a dead
    /// end, cells are popped from the backtrack stack until one with an
    /// unvisited neighbour is found, so every `Stepping` result corresponds
    /// to exactly one removed wall pair. An empty stack means the maze is
    /// `Complete`; further calls change nothing.
    ///
    /// Returns error if `grid` does not contain the cursor, which means the
    /// generator is being driven over a grid it was not started on.
    pub fn step(&mut self, grid: &mut Grid) -> Result<GenerationState> {
        if self.is_complete() {
            return Ok(GenerationState::Complete);
        }
        grid.mark_visited(self.current)?;

        loop {
            if let Some(next) = self.pick_unvisited_neighbor(grid) {
                grid.mark_visited(next)?;
                self.stack.push(self.current);
                grid.remove_wall_between(self.current, next)?;
                trace!("carve {} -> {}", self.current, next);
                self.current = next;
                self.state = GenerationState::Stepping;
                return Ok(self.state);
            }

            match self.stack.pop() {
                Some(previous) => {
                    trace!("backtrack {} -> {}", self.current, previous);
                    self.current = previous;
                }
                None => {
                    debug!(
                        "generation complete, {} passages carved",
                        grid.passage_count()
                    );
                    self.state = GenerationState::Complete;
                    return Ok(self.state);
                }
            }
        }
    }

    /// Step until complete, returning the number of steps taken
    pub fn run_to_completion(&mut self, grid: &mut Grid) -> Result<usize> {
        let mut steps = 0;
        while !self.is_complete() {
            self.step(grid)?;
            steps += 1;
        }
        Ok(steps)
    }

    /// Uniform choice among unvisited neighbours, filtered in compass order
    fn pick_unvisited_neighbor(&mut self, grid: &Grid) -> Option<Position> {
        let current = self.current;
        let candidates: Vec<Position> = Direction::ALL
            .into_iter()
            .filter_map(|direction| grid.neighbor(current, direction))
            .filter(|&position| grid.cell(position).is_ok_and(|cell| !cell.visited()))
            .collect();

        if candidates.is_empty() {
            None
        } else {
            Some(candidates[self.random.gen_range(0..candidates.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::grid::{Grid, Position};
    use crate::maze_generator::{GenerationState, MazeGenerator};

    /// Number of cells reachable from the origin through open passages
    fn reachable_cells(grid: &Grid) -> usize {
        let mut seen = vec![Position::new(0, 0)];
        let mut queue = VecDeque::from([Position::new(0, 0)]);
        while let Some(position) = queue.pop_front() {
            for next in grid.passages(position) {
                if !seen.contains(&next) {
                    seen.push(next);
                    queue.push_back(next);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn completed_maze_is_spanning_tree() {
        for (rows, cols, seed) in [(20, 20, 0), (5, 9, 1), (7, 3, 2), (1, 6, 3)] {
            let mut grid = Grid::new(rows, cols).unwrap();
            let mut gen = MazeGenerator::new(Some(seed));
            gen.run_to_completion(&mut grid).unwrap();

            let n = rows * cols;
            assert_eq!(grid.passage_count(), n - 1);
            assert_eq!(reachable_cells(&grid), n);
            assert_eq!(grid.visited_count(), n);
            assert!(gen.backtrack_stack().is_empty());
        }
    }

    #[test]
    fn starts_ready() {
        let gen = MazeGenerator::new(Some(0));
        assert_eq!(gen.state(), GenerationState::Ready);
        assert_eq!(gen.cursor(), Position::new(0, 0));
    }

    #[test]
    fn single_cell_completes_on_first_step() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut gen = MazeGenerator::new(None);
        assert_eq!(gen.step(&mut grid).unwrap(), GenerationState::Complete);
        assert_eq!(grid.visited_count(), 1);
    }

    #[test]
    fn two_cells_have_one_possible_maze() {
        let mut grid = Grid::new(1, 2).unwrap();
        let mut gen = MazeGenerator::new(None);
        assert_eq!(gen.step(&mut grid).unwrap(), GenerationState::Stepping);
        assert_eq!(gen.cursor(), Position::new(0, 1));
        assert_eq!(gen.step(&mut grid).unwrap(), GenerationState::Complete);
        assert!(grid.is_connected(Position::new(0, 0), Position::new(0, 1)));
    }

    #[test]
    fn cell_count_steps_always_complete() {
        for seed in 0..20 {
            let mut grid = Grid::new(6, 8).unwrap();
            let mut gen = MazeGenerator::new(Some(seed));
            let mut state = GenerationState::Ready;
            for _ in 0..(6 * 8) {
                state = gen.step(&mut grid).unwrap();
            }
            assert_eq!(state, GenerationState::Complete, "seed {}", seed);
        }
    }

    #[test]
    fn each_step_carves_one_passage() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut gen = MazeGenerator::new(Some(7));
        let mut carved = 0;
        while gen.step(&mut grid).unwrap() == GenerationState::Stepping {
            carved += 1;
            assert_eq!(grid.passage_count(), carved);
        }
        assert_eq!(carved, 15);
    }

    #[test]
    fn stepping_after_completion_changes_nothing() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut gen = MazeGenerator::new(Some(42));
        gen.run_to_completion(&mut grid).unwrap();

        let snapshot = grid.clone();
        let cursor = gen.cursor();
        assert_eq!(gen.step(&mut grid).unwrap(), GenerationState::Complete);
        assert_eq!(gen.step(&mut grid).unwrap(), GenerationState::Complete);
        assert_eq!(grid, snapshot);
        assert_eq!(gen.cursor(), cursor);
        assert!(gen.backtrack_stack().is_empty());
    }

    #[test]
    fn seed_reproduces_maze() {
        let mut a = Grid::new(10, 10).unwrap();
        let mut b = Grid::new(10, 10).unwrap();
        MazeGenerator::new(Some(5)).run_to_completion(&mut a).unwrap();
        MazeGenerator::new(Some(5)).run_to_completion(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn restart_returns_to_ready() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut gen = MazeGenerator::new(Some(1));
        gen.step(&mut grid).unwrap();
        gen.restart();
        assert_eq!(gen.state(), GenerationState::Ready);
        assert_eq!(gen.cursor(), Position::new(0, 0));
        assert!(gen.backtrack_stack().is_empty());
    }
}
