use std::fmt;

use crate::cells::GridCoordinate;
use crate::maze::{CoordinateSmallVec, Maze};
use crate::pathing::Distances;
use crate::utils;
use crate::utils::FnvHashSet;

/// Supplies the three character body text drawn inside each cell.
pub trait CellDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String;
}

impl CellDisplay for Distances {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl CellDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start_coordinates: CoordinateSmallVec,
    end_coordinates: CoordinateSmallVec,
}
impl StartEndPointsDisplay {
    pub fn new(starts: CoordinateSmallVec, ends: CoordinateSmallVec) -> StartEndPointsDisplay {
        StartEndPointsDisplay {
            start_coordinates: starts,
            end_coordinates: ends,
        }
    }
}
impl CellDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.start_coordinates.contains(&coord) {
            String::from(" S ")
        } else if self.end_coordinates.contains(&coord) {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR_3: &str = "───";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";

fn corner(left: bool, right: bool, up: bool, down: bool) -> &'static str {
    match (left, right, up, down) {
        (true, true, true, true) => WALL_LRUD,
        (true, true, true, false) => WALL_LRU,
        (true, true, false, true) => WALL_LRD,
        (true, false, true, true) => WALL_LUD,
        (false, true, true, true) => WALL_RUD,
        (true, true, false, false) => WALL_LR,
        (false, false, true, true) => WALL_UD,
        (false, true, true, false) => WALL_RU,
        (true, false, false, true) => WALL_LD,
        (true, false, true, false) => WALL_LU,
        (false, true, false, true) => WALL_RD,
        (true, false, false, false) => WALL_L,
        (false, true, false, false) => WALL_R,
        (false, false, true, false) => WALL_U,
        (false, false, false, true) => WALL_D,
        (false, false, false, false) => " ",
    }
}

impl Maze {
    /// Is there a wall on the vertical grid line `line` (0..=size) beside row `row`.
    /// The outer lines are the maze boundary.
    fn vertical_line_closed(&self, row: usize, line: usize) -> bool {
        line == 0 || line == self.size() || !self.verticals().is_open(row, line - 1)
    }

    /// Is there a wall on the horizontal grid line `line` (0..=size) above column `column`.
    fn horizontal_line_closed(&self, line: usize, column: usize) -> bool {
        line == 0 || line == self.size() || !self.horizontals().is_open(line - 1, column)
    }

    /// Box drawing rendering of the maze, cell bodies taken from `cell_display` if given.
    pub fn render(&self, cell_display: Option<&dyn CellDisplay>) -> String {
        let size = self.size();
        let default_cell_body = "   ";
        let mut output = String::new();

        for line in 0..=size {
            // Grid line `line`: corners and the walls between them.
            for column in 0..=size {
                let up = line > 0 && self.vertical_line_closed(line - 1, column);
                let down = line < size && self.vertical_line_closed(line, column);
                let left = column > 0 && self.horizontal_line_closed(line, column - 1);
                let right = column < size && self.horizontal_line_closed(line, column);
                output.push_str(corner(left, right, up, down));

                if column < size {
                    output.push_str(if right { WALL_LR_3 } else { "   " });
                }
            }
            output.push('\n');

            if line == size {
                break;
            }

            // The cells of row `line`, with their west and east walls.
            let row = line;
            for column in 0..=size {
                output.push_str(if self.vertical_line_closed(row, column) { WALL_UD } else { " " });
                if column < size {
                    match cell_display {
                        Some(displayer) => {
                            output.push_str(&displayer.render_cell_body(GridCoordinate::new(row, column)))
                        }
                        None => output.push_str(default_cell_body),
                    }
                }
            }
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(None))
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;
    use crate::cells::CompassPrimary;
    use crate::generators::recursive_backtracker;
    use crate::random::seeded;

    fn gc(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate::new(row, column)
    }

    fn u_shape() -> Maze {
        let mut maze = Maze::closed(2);
        maze.open_passage(gc(0, 0), CompassPrimary::East);
        maze.open_passage(gc(0, 1), CompassPrimary::South);
        maze.open_passage(gc(1, 1), CompassPrimary::West);
        maze
    }

    #[test]
    fn single_cell() {
        let maze = Maze::closed(1);
        assert_eq!(format!("{}", maze), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn two_by_two() {
        let expected = ["┌───────┐",
                        "│       │",
                        "├───╴   │",
                        "│       │",
                        "└───────┘",
                        ""]
            .join("\n");
        assert_eq!(u_shape().to_string(), expected);
    }

    #[test]
    fn closed_grid_has_every_junction() {
        let maze = Maze::closed(2);
        let expected = ["┌───┬───┐",
                        "│   │   │",
                        "├───┼───┤",
                        "│   │   │",
                        "└───┴───┘",
                        ""]
            .join("\n");
        assert_eq!(maze.to_string(), expected);
    }

    #[test]
    fn start_end_markers() {
        let maze = u_shape();
        let markers = StartEndPointsDisplay::new(smallvec![gc(0, 0)], smallvec![gc(1, 0)]);
        let rendered = maze.render(Some(&markers));
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "│ S     │");
        assert_eq!(lines[3], "│ E     │");
    }

    #[test]
    fn path_and_distance_bodies() {
        let maze = u_shape();
        let path = PathDisplay::new(&[gc(0, 0), gc(0, 1)]);
        let rendered = maze.render(Some(&path));
        assert_eq!(rendered.lines().nth(1), Some("│ .   . │"));

        let distances = Distances::new(&maze, gc(0, 0)).unwrap();
        let rendered = maze.render(Some(&distances));
        assert_eq!(rendered.lines().nth(1), Some("│ 0   1 │"));
        assert_eq!(rendered.lines().nth(3), Some("│ 3   2 │"));
    }

    #[test]
    fn rendering_size_matches_grid() {
        let maze = recursive_backtracker(7, &mut seeded(21)).unwrap();
        let rendered = maze.to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2 * 7 + 1);
        assert!(lines.iter().all(|line| line.chars().count() == 4 * 7 + 1));
    }
}
