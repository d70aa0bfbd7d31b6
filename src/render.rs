//! Text rendering of the maze

use itertools::Itertools;

use crate::grid::{Cell, Direction, Grid, Position};

/// Transient markers drawn over the grid
#[derive(Default, Clone, Copy, Debug)]
pub struct Overlay {
    /// Player position
    pub player: Option<Position>,
    /// Generation cursor, shown while carving
    pub cursor: Option<Position>,
}

const CORNER: char = '+';
const H_WALL: &str = "---";
const H_OPEN: &str = "   ";
const V_WALL: char = '|';
const V_OPEN: char = ' ';

const G_PLAYER: &str = " @ ";
const G_ENTRANCE: &str = " S ";
const G_EXIT: &str = " E ";
const G_SOLUTION: &str = " . ";
const G_CURSOR: &str = " * ";
const G_VISITED: &str = "   ";
const G_UNVISITED: &str = "###";

/// Draw grid as lines of ASCII art.
///
/// Each edge is drawn closed if either adjacent cell reports a wall there.
/// Cell contents are chosen by precedence: player, entrance and exit,
/// solution path, generation cursor, visited, unvisited.
///
/// # Examples
/// ```
/// use maze_backtracker::{render::{render, Overlay}, Grid};
///
/// let grid = Grid::new(1, 2).unwrap();
/// assert_eq!(render(&grid, &Overlay::default()), "+---+---+\n| S | E |\n+---+---+");
/// ```
pub fn render(grid: &Grid, overlay: &Overlay) -> String {
    let rows = (0..grid.rows()).map(|row| {
        let cells = (0..grid.cols())
            .filter_map(|col| grid.cell(Position::new(row, col)).ok())
            .collect::<Vec<_>>();
        let top = horizontal_edge(grid, &cells, Direction::Top);
        let middle = cells
            .iter()
            .map(|cell| {
                let left = if closed(grid, cell, Direction::Left) {
                    V_WALL
                } else {
                    V_OPEN
                };
                format!("{}{}", left, glyph(grid, cell, overlay))
            })
            .join("");
        let right = match cells.last() {
            Some(cell) if !closed(grid, cell, Direction::Right) => V_OPEN,
            _ => V_WALL,
        };
        format!("{}\n{}{}", top, middle, right)
    });

    let last_row = (0..grid.cols())
        .filter_map(|col| grid.cell(Position::new(grid.rows() - 1, col)).ok())
        .collect::<Vec<_>>();
    let bottom = horizontal_edge(grid, &last_row, Direction::Bottom);

    rows.chain(std::iter::once(bottom)).join("\n")
}

fn horizontal_edge(grid: &Grid, cells: &[&Cell], side: Direction) -> String {
    let segments = cells
        .iter()
        .map(|cell| {
            if closed(grid, cell, side) {
                H_WALL
            } else {
                H_OPEN
            }
        })
        .join(&CORNER.to_string());
    format!("{}{}{}", CORNER, segments, CORNER)
}

/// Wall present on `side` of `cell`, as seen from either cell sharing the edge
fn closed(grid: &Grid, cell: &Cell, side: Direction) -> bool {
    let from_other = grid
        .neighbor(cell.position(), side)
        .and_then(|other| grid.cell(other).ok())
        .is_some_and(|other| other.has_wall(side.opposite()));
    cell.has_wall(side) || from_other
}

fn glyph(grid: &Grid, cell: &Cell, overlay: &Overlay) -> &'static str {
    let position = cell.position();
    if overlay.player == Some(position) {
        G_PLAYER
    } else if position == grid.entrance() {
        G_ENTRANCE
    } else if position == grid.exit() {
        G_EXIT
    } else if cell.on_solution_path() {
        G_SOLUTION
    } else if overlay.cursor == Some(position) {
        G_CURSOR
    } else if cell.visited() {
        G_VISITED
    } else {
        G_UNVISITED
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Grid, Position};
    use crate::render::{render, Overlay};
    use crate::solver::solve;

    #[test]
    fn open_walls_are_not_drawn() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall_between(Position::new(0, 0), Position::new(0, 1))
            .unwrap();
        grid.remove_wall_between(Position::new(0, 1), Position::new(1, 1))
            .unwrap();

        let expected = "\
+---+---+
| S  ###|
+---+   +
|###| E |
+---+---+";
        assert_eq!(render(&grid, &Overlay::default()), expected);
    }

    #[test]
    fn overlays_take_precedence() {
        let mut grid = Grid::new(1, 4).unwrap();
        for col in 0..3 {
            grid.remove_wall_between(Position::new(0, col), Position::new(0, col + 1))
                .unwrap();
        }
        solve(&mut grid, Position::new(0, 0), Position::new(0, 3)).unwrap();

        let overlay = Overlay {
            player: Some(Position::new(0, 1)),
            cursor: Some(Position::new(0, 2)),
        };
        assert_eq!(
            render(&grid, &overlay),
            "+---+---+---+---+\n| S   @   .   E |\n+---+---+---+---+"
        );
    }
}
