use bit_set::BitSet;
use log::debug;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::maze::Maze;
use crate::random::RandomSource;
use crate::units::{ColumnIndex, RowIndex};

/// One cell on the traversal stack: its neighbour directions in shuffled order and how many of
/// them have been tried so far.
struct Frame {
    cell: GridCoordinate,
    exits: [CompassPrimary; 4],
    next_exit: usize,
}

/// Generate a perfect maze on a `size` by `size` grid with the recursive backtracker algorithm.
///
/// A depth first traversal starts from a uniformly random cell. On entering a cell it is marked
/// visited and its four neighbours (up, right, down, left) are shuffled; each neighbour in turn
/// that is inside the grid and not yet visited gets the wall towards it removed, and the
/// traversal continues from that neighbour before trying the next one. A wall is only removed
/// when stepping into an unvisited cell, so the passages form a spanning tree: `size² − 1`
/// passages, every cell reachable, no loops.
///
/// The traversal keeps its own stack instead of recursing. A cell's neighbours are shuffled at
/// the moment it is entered, so the draws consumed from `rng`, and the maze produced, are the
/// same as for the recursive formulation.
///
/// Random draws happen in this order: start row, start column, then one four element shuffle
/// per cell in visiting order. Any error from `rng` is returned as is.
///
/// Fails with `ErrorKind::InvalidArgument` if `size` is zero or `size * size` overflows.
pub fn recursive_backtracker<R>(size: usize, rng: &mut R) -> Result<Maze>
    where R: RandomSource + ?Sized
{
    if size < 1 {
        bail!(ErrorKind::InvalidArgument(format!("maze size must be at least 1, got {}", size)));
    }
    let cells_count = size.checked_mul(size)
        .ok_or_else(|| ErrorKind::InvalidArgument(format!("maze size {} is too large", size)))?;

    let mut maze = Maze::closed(size);
    let mut visited = BitSet::with_capacity(cells_count);

    let start = GridCoordinate::from_row_column_indices(RowIndex(rng.index_below(size)?),
                                                        ColumnIndex(rng.index_below(size)?));

    let mut stack = Vec::with_capacity(cells_count);
    stack.push(enter_cell(start, size, &mut visited, &mut *rng)?);

    while let Some(frame) = stack.last_mut() {
        if frame.next_exit == frame.exits.len() {
            let _ = stack.pop();
            continue;
        }
        let direction = frame.exits[frame.next_exit];
        frame.next_exit += 1;
        let current = frame.cell;

        let next = match maze.neighbour_at_direction(current, direction) {
            Some(coord) => coord,
            None => continue,
        };
        if visited.contains(row_major_index(next, size)) {
            continue;
        }

        maze.open_passage(current, direction);
        stack.push(enter_cell(next, size, &mut visited, &mut *rng)?);
    }

    debug!("recursive backtracker: {}x{} maze from start {:?}, {} passages",
           size,
           size,
           start,
           maze.passages_count());

    Ok(maze)
}

fn enter_cell<R>(cell: GridCoordinate,
                 size: usize,
                 visited: &mut BitSet,
                 rng: &mut R)
                 -> Result<Frame>
    where R: RandomSource + ?Sized
{
    let _ = visited.insert(row_major_index(cell, size));
    let mut exits = CompassPrimary::ALL;
    rng.shuffle(&mut exits)?;
    Ok(Frame {
        cell,
        exits,
        next_exit: 0,
    })
}

#[inline]
fn row_major_index(coord: GridCoordinate, size: usize) -> usize {
    coord.row * size + coord.column
}
