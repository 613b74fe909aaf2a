//! Geometry for placing a maze in a 2D world.
//!
//! A physics or rendering layer turns each rectangle into a static body. Coordinates are in
//! world units with the origin at the top left corner of the maze and y growing downwards.

use std::fmt;

use crate::cells::{GridCoordinate, Orientation, Wall};
use crate::errors::*;
use crate::maze::Maze;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Side length of one square cell.
    pub cell_length: f32,
    /// Thickness of the interior wall segments.
    pub wall_thickness: f32,
    /// Thickness of the four outer walls.
    pub boundary_thickness: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            cell_length: 100.0,
            wall_thickness: 10.0,
            boundary_thickness: 2.0,
        }
    }
}

impl LayoutOptions {
    fn validate(&self) -> Result<()> {
        let positive = |value: f32| value.is_finite() && value > 0.0;
        if !positive(self.cell_length) {
            bail!(ErrorKind::InvalidArgument(format!("cell length must be positive, got {}",
                                                     self.cell_length)));
        }
        if !positive(self.wall_thickness) || !positive(self.boundary_thickness) {
            bail!(ErrorKind::InvalidArgument(format!("wall thicknesses must be positive, got {} and {}",
                                                     self.wall_thickness,
                                                     self.boundary_thickness)));
        }
        Ok(())
    }
}

/// An axis aligned rectangle given by its centre and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// A closed interior wall and where it sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub wall: Wall,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MazeLayout {
    /// Side length of the whole maze.
    pub extent: f32,
    pub walls: Vec<WallSegment>,
    /// Top, bottom, left, right.
    pub boundary: [Rect; 4],
    /// Goal square in the bottom right cell.
    pub goal: Rect,
    pub goal_cell: GridCoordinate,
    /// Ball in the top left cell.
    pub ball: Circle,
    pub ball_cell: GridCoordinate,
}

impl MazeLayout {
    pub fn new(maze: &Maze, options: &LayoutOptions) -> Result<MazeLayout> {
        options.validate()?;

        let unit = options.cell_length;
        let extent = maze.size() as f32 * unit;

        let walls = maze.closed_walls()
            .map(|wall| {
                let column = wall.column as f32;
                let row = wall.row as f32;
                let rect = match wall.orientation {
                    Orientation::Horizontal => Rect {
                        x: column * unit + unit / 2.0,
                        y: row * unit + unit,
                        width: unit,
                        height: options.wall_thickness,
                    },
                    Orientation::Vertical => Rect {
                        x: column * unit + unit,
                        y: row * unit + unit / 2.0,
                        width: options.wall_thickness,
                        height: unit,
                    },
                };
                WallSegment { wall, rect }
            })
            .collect();

        let edge = options.boundary_thickness;
        let boundary = [Rect { x: extent / 2.0, y: 0.0, width: extent, height: edge },
                        Rect { x: extent / 2.0, y: extent, width: extent, height: edge },
                        Rect { x: 0.0, y: extent / 2.0, width: edge, height: extent },
                        Rect { x: extent, y: extent / 2.0, width: edge, height: extent }];

        let last = maze.size() - 1;
        let goal_cell = GridCoordinate::new(last, last);
        let ball_cell = GridCoordinate::new(0, 0);
        let (goal_x, goal_y) = cell_centre(goal_cell, unit);
        let (ball_x, ball_y) = cell_centre(ball_cell, unit);

        Ok(MazeLayout {
            extent,
            walls,
            boundary,
            goal: Rect {
                x: goal_x,
                y: goal_y,
                width: unit * 0.7,
                height: unit * 0.7,
            },
            goal_cell,
            ball: Circle {
                x: ball_x,
                y: ball_y,
                radius: unit / 4.0,
            },
            ball_cell,
        })
    }
}

pub fn cell_centre(coord: GridCoordinate, cell_length: f32) -> (f32, f32) {
    (coord.column as f32 * cell_length + cell_length / 2.0,
     coord.row as f32 * cell_length + cell_length / 2.0)
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// One body per line: `kind x y width height`, circles as `kind x y radius`.
impl fmt::Display for MazeLayout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rect in self.boundary.iter() {
            writeln!(f, "boundary {}", rect)?;
        }
        for segment in &self.walls {
            writeln!(f, "wall {}", segment.rect)?;
        }
        writeln!(f, "goal {}", self.goal)?;
        writeln!(f, "ball {} {} {}", self.ball.x, self.ball.y, self.ball.radius)
    }
}
