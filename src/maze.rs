use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};
use smallvec::SmallVec;
use std::fmt;

use crate::cells::{CompassPrimary, GridCoordinate, Orientation, Wall};
use crate::units::{ColumnsCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

/// A fixed size matrix of wall states, `true` meaning the wall has been removed.
///
/// Stored flat in row-major order.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WallMatrix {
    rows: usize,
    columns: usize,
    open: Vec<bool>,
}

impl WallMatrix {
    pub fn new(RowsCount(rows): RowsCount, ColumnsCount(columns): ColumnsCount) -> WallMatrix {
        WallMatrix {
            rows,
            columns,
            open: vec![false; rows * columns],
        }
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        RowsCount(self.rows)
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        ColumnsCount(self.columns)
    }

    /// Is the wall at `(row, column)` open. Out of range entries are closed.
    #[inline]
    pub fn is_open(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns && self.open[row * self.columns + column]
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    /// Copy out as nested rows, `[row][column]`.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|r| self.open[r * self.columns..(r + 1) * self.columns].to_vec())
            .collect()
    }

    /// Iterate `(row, column, is_open)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let columns = self.columns;
        self.open
            .iter()
            .enumerate()
            .map(move |(i, &o)| (i / columns, i % columns, o))
    }

    #[inline]
    pub(crate) fn set_open(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.rows && column < self.columns);
        self.open[row * self.columns + column] = true;
    }
}

impl fmt::Debug for WallMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WallMatrix {}x{} {:?}", self.rows, self.columns, self.to_rows())
    }
}

/// A generated square maze: the N×(N−1) vertical walls and (N−1)×N horizontal walls.
///
/// Immutable once generation returns it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Maze {
    size: usize,
    verticals: WallMatrix,
    horizontals: WallMatrix,
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Maze :: size: {}, passages: {}", self.size, self.passages_count())
    }
}

impl Maze {
    /// An all-walls-closed grid. `size` must be at least one.
    pub(crate) fn closed(size: usize) -> Maze {
        debug_assert!(size >= 1);
        Maze {
            size,
            verticals: WallMatrix::new(RowsCount(size), ColumnsCount(size - 1)),
            horizontals: WallMatrix::new(RowsCount(size - 1), ColumnsCount(size)),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cells_count(&self) -> usize {
        self.size * self.size
    }

    /// Walls between horizontally adjacent cells, `[row][column]` for `(row, column)` |
    /// `(row, column + 1)`.
    #[inline]
    pub fn verticals(&self) -> &WallMatrix {
        &self.verticals
    }

    /// Walls between vertically adjacent cells, `[row][column]` for `(row, column)` over
    /// `(row + 1, column)`.
    #[inline]
    pub fn horizontals(&self) -> &WallMatrix {
        &self.horizontals
    }

    pub fn passages_count(&self) -> usize {
        self.verticals.open_count() + self.horizontals.open_count()
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.size && coord.column < self.size
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..cells_count().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.size + coord.column)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = GridCoordinate> {
        let size = self.size;
        (0..size * size).map(move |i| GridCoordinate::from_row_major_index(i, size))
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction).filter(|c| self.is_valid_coordinate(*c))
    }

    /// Cells to the North, East, South or West of `coord`, not necessarily linked by a passage.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    /// The interior wall between `coord` and its neighbour in `direction`, if both cells exist.
    pub fn wall_between(&self, coord: GridCoordinate, direction: CompassPrimary) -> Option<Wall> {
        self.neighbour_at_direction(coord, direction)
            .and_then(|_| Wall::crossed_from(coord, direction))
    }

    pub fn is_open(&self, wall: Wall) -> bool {
        match wall.orientation {
            Orientation::Vertical => self.verticals.is_open(wall.row, wall.column),
            Orientation::Horizontal => self.horizontals.is_open(wall.row, wall.column),
        }
    }

    pub fn is_neighbour_linked(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        self.wall_between(coord, direction)
            .map_or(false, |wall| self.is_open(wall))
    }

    /// Are two cells linked by a passage. Order of the arguments does not matter.
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        CompassPrimary::ALL
            .iter()
            .any(|&dir| {
                self.neighbour_at_direction(a, dir) == Some(b) && self.is_neighbour_linked(a, dir)
            })
    }

    /// Cells linked to `coord` by a passage. None for an invalid coordinate.
    pub fn links(&self, coord: GridCoordinate) -> Option<CoordinateSmallVec> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        let linked = CompassPrimary::ALL
            .iter()
            .filter(|&&dir| self.is_neighbour_linked(coord, dir))
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect();
        Some(linked)
    }

    /// Every open passage once, as `(a, b)` with `b` east or south of `a`.
    pub fn iter_links(&self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + '_ {
        self.iter().flat_map(move |coord| {
            [CompassPrimary::East, CompassPrimary::South]
                .iter()
                .filter(move |&&dir| self.is_neighbour_linked(coord, dir))
                .filter_map(move |&dir| self.neighbour_at_direction(coord, dir))
                .map(move |other| (coord, other))
                .collect::<SmallVec<[(GridCoordinate, GridCoordinate); 2]>>()
        })
    }

    /// Every interior wall still standing, verticals first.
    pub fn closed_walls(&self) -> impl Iterator<Item = Wall> + '_ {
        let verticals = self.verticals
            .iter()
            .filter(|&(_, _, open)| !open)
            .map(|(row, column, _)| Wall::vertical(row, column));
        let horizontals = self.horizontals
            .iter()
            .filter(|&(_, _, open)| !open)
            .map(|(row, column, _)| Wall::horizontal(row, column));
        verticals.chain(horizontals)
    }

    /// The passage graph: one node per cell in row-major order, one edge per open passage.
    pub fn to_graph(&self) -> UnGraph<GridCoordinate, ()> {
        let mut graph = UnGraph::with_capacity(self.cells_count(), self.passages_count());
        for coord in self.iter() {
            let _ = graph.add_node(coord);
        }
        for (a, b) in self.iter_links() {
            // Both coordinates come from iter() so they always index a node.
            if let (Some(ai), Some(bi)) = (self.coordinate_to_index(a), self.coordinate_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(ai), NodeIndex::new(bi), ());
            }
        }
        graph
    }

    /// Exactly one path between any two cells: connected and without cycles.
    pub fn is_perfect(&self) -> bool {
        let graph = self.to_graph();
        connected_components(&graph) == 1 && !is_cyclic_undirected(&graph)
    }

    pub(crate) fn open_passage(&mut self, coord: GridCoordinate, direction: CompassPrimary) {
        if let Some(wall) = self.wall_between(coord, direction) {
            match wall.orientation {
                Orientation::Vertical => self.verticals.set_open(wall.row, wall.column),
                Orientation::Horizontal => self.horizontals.set_open(wall.row, wall.column),
            }
        }
    }
}
