//! Depth-first maze solver

use log::{debug, warn};

use crate::error::{MazeError, Result};
use crate::grid::{Direction, Grid, Position};

/// Find the path from `start` to `goal` through open passages.
///
/// Neighbours are tried in compass order (top, right, bottom, left). Cells on
/// the branch being explored are flagged as on the solution path and the flag
/// is dropped again when the branch is abandoned, so after a successful call
/// exactly the cells of the returned path carry it. Flags left from earlier
/// calls are cleared first.
///
/// The path runs from `start` to `goal` inclusive. On a perfect maze it is
/// the only simple path between the two.
///
/// ## Errors
/// - [MazeError::OutOfBounds] if `start` or `goal` is not in the grid.
/// - [MazeError::Unreachable] if the goal cannot be reached, which only
///   happens when the grid was not fully generated.
pub fn solve(grid: &mut Grid, start: Position, goal: Position) -> Result<Vec<Position>> {
    grid.cell(start)?;
    grid.cell(goal)?;
    grid.clear_solution_path();

    let cols = grid.cols();
    let mut explored = vec![false; grid.rows() * cols];
    explored[start.row * cols + start.col] = true;
    grid.set_on_solution_path(start, true)?;

    // Current branch, each cell with the index of the next direction to try
    let mut branch: Vec<(Position, usize)> = vec![(start, 0)];

    while let Some(frame) = branch.last_mut() {
        let position = frame.0;
        if position == goal {
            let path: Vec<Position> = branch.into_iter().map(|(p, _)| p).collect();
            debug!("solved {} -> {} in {} cells", start, goal, path.len());
            return Ok(path);
        }

        let direction = Direction::ALL.get(frame.1).copied();
        frame.1 += 1;

        match direction {
            Some(direction) => {
                let Some(next) = grid.neighbor(position, direction) else {
                    continue;
                };
                let i = next.row * cols + next.col;
                if !explored[i] && grid.is_connected(position, next) {
                    explored[i] = true;
                    grid.set_on_solution_path(next, true)?;
                    branch.push((next, 0));
                }
            }
            None => {
                // Dead end
                grid.set_on_solution_path(position, false)?;
                branch.pop();
            }
        }
    }

    warn!("no path from {} to {}, maze walls are inconsistent", start, goal);
    Err(MazeError::Unreachable { start, goal })
}

#[cfg(test)]
mod tests {
    use crate::error::MazeError;
    use crate::grid::{Grid, Position};
    use crate::maze_generator::MazeGenerator;
    use crate::solver::solve;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn flagged(grid: &Grid) -> Vec<Position> {
        grid.cells()
            .filter(|c| c.on_solution_path())
            .map(|c| c.position())
            .collect()
    }

    #[test]
    fn follows_open_passages() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall_between(p(0, 0), p(0, 1)).unwrap();
        grid.remove_wall_between(p(0, 1), p(1, 1)).unwrap();
        grid.remove_wall_between(p(0, 0), p(1, 0)).unwrap();

        let path = solve(&mut grid, p(0, 0), p(1, 1)).unwrap();
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(1, 1)]);
        assert_eq!(flagged(&grid), path);
    }

    #[test]
    fn abandoned_branch_is_unflagged() {
        // Right from the entrance is a dead end, tried before going down
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall_between(p(0, 0), p(0, 1)).unwrap();
        grid.remove_wall_between(p(0, 0), p(1, 0)).unwrap();
        grid.remove_wall_between(p(1, 0), p(1, 1)).unwrap();

        let path = solve(&mut grid, p(0, 0), p(1, 1)).unwrap();
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(1, 1)]);
        assert!(!grid.cell(p(0, 1)).unwrap().on_solution_path());
        assert_eq!(flagged(&grid), vec![p(0, 0), p(1, 0), p(1, 1)]);
    }

    #[test]
    fn generated_maze_path_is_connected() {
        for seed in 0..10 {
            let mut grid = Grid::new(20, 20).unwrap();
            MazeGenerator::new(Some(seed))
                .run_to_completion(&mut grid)
                .unwrap();
            let (start, goal) = (grid.entrance(), grid.exit());

            let path = solve(&mut grid, start, goal).unwrap();
            assert_eq!(path.first(), Some(&p(0, 0)));
            assert_eq!(path.last(), Some(&p(19, 19)));
            for pair in path.windows(2) {
                assert!(grid.is_connected(pair[0], pair[1]));
            }

            let mut on_path = flagged(&grid);
            let mut expected = path.clone();
            on_path.sort_by_key(|p| (p.row, p.col));
            expected.sort_by_key(|p| (p.row, p.col));
            assert_eq!(on_path, expected);
        }
    }

    #[test]
    fn resolving_clears_previous_flags() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.remove_wall_between(p(0, 0), p(0, 1)).unwrap();
        grid.remove_wall_between(p(0, 1), p(0, 2)).unwrap();

        solve(&mut grid, p(0, 0), p(0, 2)).unwrap();
        let path = solve(&mut grid, p(0, 0), p(0, 1)).unwrap();
        assert_eq!(path, vec![p(0, 0), p(0, 1)]);
        assert!(!grid.cell(p(0, 2)).unwrap().on_solution_path());
    }

    #[test]
    fn start_equal_to_goal() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(solve(&mut grid, p(1, 1), p(1, 1)).unwrap(), vec![p(1, 1)]);
    }

    #[test]
    fn invalid_coordinates_are_rejected() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(
            solve(&mut grid, p(0, 0), p(2, 0)),
            Err(MazeError::OutOfBounds { row: 2, col: 0 })
        );
    }

    #[test]
    fn walled_in_goal_is_unreachable() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall_between(p(0, 0), p(0, 1)).unwrap();
        assert_eq!(
            solve(&mut grid, p(0, 0), p(1, 1)),
            Err(MazeError::Unreachable {
                start: p(0, 0),
                goal: p(1, 1)
            })
        );
        assert!(flagged(&grid).is_empty());
    }
}
