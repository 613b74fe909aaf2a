use crate::units::{ColumnIndex, RowIndex};

/// A cell position in a square grid, row 0 being the top row and column 0 the left column.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub column: usize,
}

impl GridCoordinate {
    #[inline]
    pub fn new(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, column_index: ColumnIndex) -> Self {
        GridCoordinate::new(row_index.0, column_index.0)
    }

    pub fn from_row_major_index(index: usize, size: usize) -> Self {
        GridCoordinate::new(index / size, index % size)
    }

    /// The coordinate one cell away in the given direction, or None if that would fall off the
    /// top or left edge. Callers check the bottom and right edges against their grid size.
    pub fn offset(self, direction: CompassPrimary) -> Option<GridCoordinate> {
        let GridCoordinate { row, column } = self;
        match direction {
            CompassPrimary::North => row.checked_sub(1).map(|r| GridCoordinate::new(r, column)),
            CompassPrimary::East => Some(GridCoordinate::new(row, column + 1)),
            CompassPrimary::South => Some(GridCoordinate::new(row + 1, column)),
            CompassPrimary::West => column.checked_sub(1).map(|c| GridCoordinate::new(row, c)),
        }
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_column: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_column.0, row_column.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    /// Up, right, down, left. The order neighbours are listed in before any shuffling.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::East,
                                          CompassPrimary::South,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

/// Which of the two wall matrices a wall lives in.
///
/// A `Vertical` wall stands between two horizontally adjacent cells, a `Horizontal` wall lies
/// between two vertically adjacent cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// One interior wall, addressed by its entry in the vertical or horizontal wall matrix.
///
/// A vertical wall at `(row, column)` separates `(row, column)` from `(row, column + 1)`.
/// A horizontal wall at `(row, column)` separates `(row, column)` from `(row + 1, column)`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Wall {
    pub row: usize,
    pub column: usize,
    pub orientation: Orientation,
}

impl Wall {
    /// The wall crossed when stepping from `coord` in `direction`, ignoring grid bounds other than
    /// the top and left edges.
    pub fn crossed_from(coord: GridCoordinate, direction: CompassPrimary) -> Option<Wall> {
        let GridCoordinate { row, column } = coord;
        match direction {
            CompassPrimary::North => row.checked_sub(1).map(|r| Wall::horizontal(r, column)),
            CompassPrimary::East => Some(Wall::vertical(row, column)),
            CompassPrimary::South => Some(Wall::horizontal(row, column)),
            CompassPrimary::West => column.checked_sub(1).map(|c| Wall::vertical(row, c)),
        }
    }

    #[inline]
    pub fn vertical(row: usize, column: usize) -> Wall {
        Wall { row, column, orientation: Orientation::Vertical }
    }

    #[inline]
    pub fn horizontal(row: usize, column: usize) -> Wall {
        Wall { row, column, orientation: Orientation::Horizontal }
    }

    /// The two cells this wall separates, top/left one first.
    pub fn flanking_cells(&self) -> (GridCoordinate, GridCoordinate) {
        let first = GridCoordinate::new(self.row, self.column);
        let second = match self.orientation {
            Orientation::Vertical => GridCoordinate::new(self.row, self.column + 1),
            Orientation::Horizontal => GridCoordinate::new(self.row + 1, self.column),
        };
        (first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stop_at_top_and_left_edges() {
        let origin = GridCoordinate::new(0, 0);
        assert_eq!(origin.offset(CompassPrimary::North), None);
        assert_eq!(origin.offset(CompassPrimary::West), None);
        assert_eq!(origin.offset(CompassPrimary::East), Some(GridCoordinate::new(0, 1)));
        assert_eq!(origin.offset(CompassPrimary::South), Some(GridCoordinate::new(1, 0)));
    }

    #[test]
    fn row_major_index_round_trip() {
        let coord = GridCoordinate::from_row_major_index(7, 3);
        assert_eq!(coord, GridCoordinate::new(2, 1));
        assert_eq!(GridCoordinate::from_row_column_indices(RowIndex(2), ColumnIndex(1)), coord);
    }

    #[test]
    fn walls_crossed_in_each_direction() {
        let gc = GridCoordinate::new(1, 1);
        assert_eq!(Wall::crossed_from(gc, CompassPrimary::North), Some(Wall::horizontal(0, 1)));
        assert_eq!(Wall::crossed_from(gc, CompassPrimary::East), Some(Wall::vertical(1, 1)));
        assert_eq!(Wall::crossed_from(gc, CompassPrimary::South), Some(Wall::horizontal(1, 1)));
        assert_eq!(Wall::crossed_from(gc, CompassPrimary::West), Some(Wall::vertical(1, 0)));
        assert_eq!(Wall::crossed_from(GridCoordinate::new(0, 0), CompassPrimary::West), None);
    }

    #[test]
    fn crossing_back_hits_the_same_wall() {
        let a = GridCoordinate::new(2, 3);
        for &dir in CompassPrimary::ALL.iter() {
            let b = a.offset(dir).unwrap();
            assert_eq!(Wall::crossed_from(a, dir), Wall::crossed_from(b, dir.opposite()));
        }
    }

    #[test]
    fn flanking_cells_of_walls() {
        assert_eq!(Wall::vertical(0, 0).flanking_cells(),
                   (GridCoordinate::new(0, 0), GridCoordinate::new(0, 1)));
        assert_eq!(Wall::horizontal(0, 0).flanking_cells(),
                   (GridCoordinate::new(0, 0), GridCoordinate::new(1, 0)));
    }
}
