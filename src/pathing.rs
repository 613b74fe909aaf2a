use log::trace;
use smallvec::SmallVec;

use crate::cells::GridCoordinate;
use crate::maze::Maze;
use crate::utils;
use crate::utils::FnvHashMap;

/// Step counts from a start cell to every cell reachable through open passages.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill from `start_coordinate`. None if the coordinate is not on the maze.
    pub fn new(maze: &Maze, start_coordinate: GridCoordinate) -> Option<Distances> {
        if !maze.is_valid_coordinate(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(maze.cells_count());
        distances.insert(start_coordinate, 0);

        // Every step costs one, so the first time a cell is reached is also its shortest
        // distance. The distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                // The frontier only ever holds valid coordinates.
                let links = maze.links(*cell_coord).unwrap_or_default();
                for link_coordinate in links.iter() {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        new_frontier.push(*link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        trace!("distances from {:?}: {} cells reached, max {}",
               start_coordinate,
               distances.len(),
               max);

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// Cells at the maximum distance, in row-major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, &distance)| distance == self.max_distance)
            .map(|(&coord, _)| coord)
            .collect::<SmallVec<[GridCoordinate; 8]>>();
        furthest.sort();
        furthest
    }
}

/// The path from the start of `distances_from_start` to `end_point`, both ends included.
/// None if `end_point` cannot be reached.
pub fn shortest_path(maze: &Maze,
                     distances_from_start: &Distances,
                     end_point: GridCoordinate)
                     -> Option<Vec<GridCoordinate>> {

    distances_from_start.distance_from_start_to(end_point)?;

    let mut path = vec![end_point];
    let start = distances_from_start.start();
    let mut current_coord = end_point;

    while current_coord != start {
        let current_distance = distances_from_start.distance_from_start_to(current_coord)?;

        let closer = maze.links(current_coord)?
            .iter()
            .cloned()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(coord).map(|d| (coord, d))
            })
            .min_by_key(|&(_, distance)| distance);

        match closer {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                path.push(current_coord);
            }
            // No linked neighbour gets us any closer: the distances belong to another maze.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The longest path in a perfect maze: the cell furthest from the top left corner starts it,
/// the cell furthest from that start ends it.
pub fn longest_path(maze: &Maze) -> Vec<GridCoordinate> {
    let arbitrary_start_point = GridCoordinate::new(0, 0);
    let first_distances = match Distances::new(maze, arbitrary_start_point) {
        Some(distances) => distances,
        None => return vec![],
    };
    let long_path_start = first_distances.furthest_points_on_grid()[0];

    let distances_from_start = match Distances::new(maze, long_path_start) {
        Some(distances) => distances,
        None => return vec![],
    };
    let end_point = distances_from_start.furthest_points_on_grid()[0];

    shortest_path(maze, &distances_from_start, end_point).unwrap_or_else(Vec::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::recursive_backtracker;
    use crate::random::seeded;

    fn gc(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate::new(row, column)
    }

    /// 3x3 maze shaped like a snake: along the top row, down the right, back along the middle,
    /// down the left, along the bottom.
    fn snake() -> Maze {
        let mut maze = Maze::closed(3);
        use crate::cells::CompassPrimary::*;
        maze.open_passage(gc(0, 0), East);
        maze.open_passage(gc(0, 1), East);
        maze.open_passage(gc(0, 2), South);
        maze.open_passage(gc(1, 2), West);
        maze.open_passage(gc(1, 1), West);
        maze.open_passage(gc(1, 0), South);
        maze.open_passage(gc(2, 0), East);
        maze.open_passage(gc(2, 1), East);
        maze
    }

    #[test]
    fn distances_construction_requires_valid_start_coordinate() {
        let maze = Maze::closed(3);
        assert!(Distances::new(&maze, gc(3, 0)).is_none());
        assert!(Distances::new(&maze, gc(usize::MAX, usize::MAX)).is_none());
    }

    #[test]
    fn distances_to_unreachable_cells_is_none() {
        let maze = Maze::closed(3);
        let start = gc(0, 0);
        let distances = Distances::new(&maze, start).unwrap();
        assert_eq!(distances.start(), start);
        for coord in maze.iter() {
            let d = distances.distance_from_start_to(coord);
            if coord == start {
                assert_eq!(d, Some(0));
            } else {
                assert_eq!(d, None);
            }
        }
        assert_eq!(distances.max(), 0);
    }

    #[test]
    fn distances_along_a_snake() {
        let maze = snake();
        let distances = Distances::new(&maze, gc(0, 0)).unwrap();
        assert_eq!(distances.distance_from_start_to(gc(0, 2)), Some(2));
        assert_eq!(distances.distance_from_start_to(gc(1, 1)), Some(4));
        assert_eq!(distances.distance_from_start_to(gc(2, 2)), Some(8));
        assert_eq!(distances.max(), 8);
        assert_eq!(&*distances.furthest_points_on_grid(), &[gc(2, 2)]);
    }

    #[test]
    fn furthest_points_ties() {
        let maze = snake();
        let distances = Distances::new(&maze, gc(1, 1)).unwrap();
        assert_eq!(distances.max(), 4);
        assert_eq!(&*distances.furthest_points_on_grid(), &[gc(0, 0), gc(2, 2)]);
    }

    #[test]
    fn shortest_path_follows_passages() {
        let maze = snake();
        let distances = Distances::new(&maze, gc(0, 2)).unwrap();
        let path = shortest_path(&maze, &distances, gc(2, 0)).unwrap();
        assert_eq!(path, vec![gc(0, 2), gc(1, 2), gc(1, 1), gc(1, 0), gc(2, 0)]);

        let to_self = shortest_path(&maze, &distances, gc(0, 2)).unwrap();
        assert_eq!(to_self, vec![gc(0, 2)]);
    }

    #[test]
    fn no_path_to_unreachable_cell() {
        let mut maze = Maze::closed(2);
        maze.open_passage(gc(0, 0), crate::cells::CompassPrimary::East);
        let distances = Distances::new(&maze, gc(0, 0)).unwrap();
        assert_eq!(shortest_path(&maze, &distances, gc(1, 1)), None);
    }

    #[test]
    fn longest_path_of_a_snake_is_the_whole_snake() {
        let path = longest_path(&snake());
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(&gc(2, 2)));
        assert_eq!(path.last(), Some(&gc(0, 0)));
    }

    #[test]
    fn every_cell_reachable_in_generated_maze() {
        let maze = recursive_backtracker(12, &mut seeded(8)).unwrap();
        for start in [gc(0, 0), gc(11, 11), gc(5, 7)].iter() {
            let distances = Distances::new(&maze, *start).unwrap();
            for coord in maze.iter() {
                let path = shortest_path(&maze, &distances, coord).unwrap();
                assert_eq!(path.len() as u32, distances.distance_from_start_to(coord).unwrap() + 1);
            }
        }
    }
}
