//! Wall-based rectangular grid

use std::fmt;

use crate::error::{MazeError, Result};

/// Compass direction of a cell side.
///
/// The declaration order is the fixed order in which neighbours are
/// considered by the generator and the solver.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All directions in compass order
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Side facing back towards this one across a shared edge
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Row and column offset of one step in this direction
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }
}

/// Location in the grid
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Single square of the maze
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Cell {
    position: Position,
    /// Walls indexed by [Direction], `true` when the side is closed
    walls: [bool; 4],
    visited: bool,
    on_solution_path: bool,
}

impl Cell {
    fn new(position: Position) -> Self {
        Self {
            position,
            walls: [true; 4],
            visited: false,
            on_solution_path: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Wall flags in compass order
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    /// Generation has passed through this cell
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Cell is part of the path currently held by the solver
    pub fn on_solution_path(&self) -> bool {
        self.on_solution_path
    }
}

/// Rectangular grid of cells with symmetric wall state.
///
/// Walls can only be removed in pairs through [Grid::remove_wall_between],
/// so both cells sharing an edge always agree on whether it is open.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Cells in row-major order
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell is fully walled and unvisited.
    ///
    /// Returns [MazeError::InvalidDimension] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(Position::new(row, col))))
            .collect();
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Maze entrance, top left corner
    pub fn entrance(&self) -> Position {
        Position::new(0, 0)
    }

    /// Maze exit, bottom right corner
    pub fn exit(&self) -> Position {
        Position::new(self.rows - 1, self.cols - 1)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Convert signed coordinates into a position inside the grid
    pub fn position(&self, row: isize, col: isize) -> Option<Position> {
        if row < 0 || col < 0 {
            return None;
        }
        let position = Position::new(row as usize, col as usize);
        self.contains(position).then_some(position)
    }

    pub fn cell(&self, position: Position) -> Result<&Cell> {
        self.index(position).map(|i| &self.cells[i])
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Adjacent position in `direction`, `None` at the grid border
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        self.position(position.row as isize + dr, position.col as isize + dc)
    }

    /// Direction from `a` towards `b` if the two share an edge
    pub fn direction_between(&self, a: Position, b: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.neighbor(a, direction) == Some(b))
    }

    /// Open the passage between two adjacent cells, on both sides.
    pub fn remove_wall_between(&mut self, a: Position, b: Position) -> Result<()> {
        let ia = self.index(a)?;
        let ib = self.index(b)?;
        let direction = self
            .direction_between(a, b)
            .ok_or(MazeError::NotAdjacent { a, b })?;
        self.cells[ia].walls[direction.index()] = false;
        self.cells[ib].walls[direction.opposite().index()] = false;
        Ok(())
    }

    /// Whether `a` and `b` are adjacent with no wall between them.
    ///
    /// Non-adjacent or out-of-bounds pairs are never connected.
    pub fn is_connected(&self, a: Position, b: Position) -> bool {
        let (Ok(ia), Ok(ib)) = (self.index(a), self.index(b)) else {
            return false;
        };
        match self.direction_between(a, b) {
            Some(direction) => {
                !self.cells[ia].has_wall(direction) && !self.cells[ib].has_wall(direction.opposite())
            }
            None => false,
        }
    }

    /// Neighbours of `position` reachable through an open passage, in compass order
    pub fn passages(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(position, direction))
            .filter(move |&other| self.is_connected(position, other))
    }

    /// Number of removed wall pairs
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&d| {
                        self.neighbor(cell.position, d).is_some() && !cell.has_wall(d)
                    })
                    .count()
            })
            .sum()
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.visited).count()
    }

    /// Drop solution path flags from every cell
    pub fn clear_solution_path(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.on_solution_path = false;
        }
    }

    pub(crate) fn mark_visited(&mut self, position: Position) -> Result<()> {
        let i = self.index(position)?;
        self.cells[i].visited = true;
        Ok(())
    }

    pub(crate) fn set_on_solution_path(&mut self, position: Position, value: bool) -> Result<()> {
        let i = self.index(position)?;
        self.cells[i].on_solution_path = value;
        Ok(())
    }

    fn index(&self, position: Position) -> Result<usize> {
        if self.contains(position) {
            Ok(position.row * self.cols + position.col)
        } else {
            Err(MazeError::out_of_bounds(position))
        }
    }
}
