use rand::Rng;

use crate::error::MazeError;
use crate::maze::grid::Grid;
use crate::maze::{CellStatus, Coord, Direction, Maze};

/// Working state for one run of randomized Prim's algorithm.
/// Created per call and consumed into the finished maze.
struct Prim {
    maze: Maze,
    status: Grid<CellStatus>,
    /// Every cell currently marked `Frontier`, in no particular order.
    frontiers: Vec<Coord>,
}

impl Prim {
    fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        Ok(Prim {
            status: Grid::new(width, height, CellStatus::Unreached)?,
            maze: Maze::new(width, height)?,
            frontiers: Vec::new(),
        })
    }

    fn set_status(&mut self, coord: Coord, status: CellStatus) {
        debug_assert!(
            self.status[coord] < status,
            "cell {coord:?} cannot move from {:?} to {status:?}",
            self.status[coord]
        );
        self.status[coord] = status;
    }

    /// Adds `coord` to the tree and promotes its unreached neighbors to frontier cells.
    fn paint(&mut self, coord: Coord) {
        self.set_status(coord, CellStatus::Painted);
        let unreached = self
            .status
            .adjacent(coord)
            .filter(|&(_, neighbor)| self.status[neighbor] == CellStatus::Unreached)
            .map(|(_, neighbor)| neighbor)
            .collect::<Vec<_>>();
        for neighbor in unreached {
            self.set_status(neighbor, CellStatus::Frontier);
            self.frontiers.push(neighbor);
        }
    }

    fn painted_neighbors(&self, coord: Coord) -> Vec<Direction> {
        self.status
            .adjacent(coord)
            .filter(|&(_, neighbor)| self.status[neighbor] == CellStatus::Painted)
            .map(|(direction, _)| direction)
            .collect()
    }

    fn finish(self) -> Maze {
        debug_assert!(
            self.status.data().iter().all(|&s| s == CellStatus::Painted),
            "every cell must be painted once the frontier is exhausted"
        );
        debug_assert_eq!(self.maze.edge_count(), self.status.len() - 1);
        debug_assert!(self.maze.is_symmetric());
        self.maze
    }
}

/// Grows a spanning tree over a `width` x `height` grid with randomized Prim's algorithm.
///
/// Starting from a random cell, each step picks a frontier cell uniformly at random,
/// connects it to one of its already painted neighbors (also chosen uniformly), then
/// paints it and adds its unreached neighbors to the frontier.
///
/// All randomness is drawn from `rng`, so a seeded generator gives a reproducible maze.
pub fn randomized_prim<R: Rng + ?Sized>(
    width: u16,
    height: u16,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    let mut prim = Prim::new(width, height)?;

    // Initialize the starting point
    let start: Coord = (rng.random_range(0..width), rng.random_range(0..height));
    prim.paint(start);
    tracing::debug!("[prim] starting at {:?}", start);

    while !prim.frontiers.is_empty() {
        // Randomly select a cell from the frontiers
        let idx = rng.random_range(0..prim.frontiers.len());
        let frontier = prim.frontiers.swap_remove(idx);

        // Any painted neighbor may take the doorway, not just the one that discovered it
        let painted = prim.painted_neighbors(frontier);
        debug_assert!(
            !painted.is_empty(),
            "frontier cell {frontier:?} has no painted neighbor"
        );
        let direction = painted[rng.random_range(0..painted.len())];

        prim.maze.connect(frontier, direction);
        tracing::trace!("[prim] opened {:?} towards {}", frontier, direction);
        prim.paint(frontier);
    }

    let maze = prim.finish();
    tracing::debug!(
        "[prim] finished {}x{} maze with {} doorways",
        width,
        height,
        maze.edge_count()
    );
    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_randomized_prim() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = randomized_prim(7, 7, &mut rng).unwrap();
        assert_eq!(maze.edge_count(), 48);
        assert!(maze.is_symmetric());
        assert!(maze.is_boundary_safe());
        assert_eq!(maze.reachable_from((3, 3)).unwrap(), 49);
        // Every cell has at least one doorway in a tree over more than one cell
        assert!(maze.as_slice().iter().all(|&mask| mask != 0));
    }

    #[test]
    fn test_single_cell() {
        let mut rng = StdRng::seed_from_u64(9);
        let maze = randomized_prim(1, 1, &mut rng).unwrap();
        assert_eq!(maze.as_slice(), &[0]);
    }

    #[test]
    fn test_two_cells_have_the_only_possible_tree() {
        let mut rng = StdRng::seed_from_u64(7);
        let maze = randomized_prim(2, 1, &mut rng).unwrap();
        assert_eq!(maze.to_rows(), vec![vec![0b0001, 0b0010]]);
    }

    #[test]
    fn test_strips_are_corridors() {
        let mut rng = StdRng::seed_from_u64(3);
        let row = randomized_prim(6, 1, &mut rng).unwrap();
        assert_eq!(row.as_slice(), &[1, 3, 3, 3, 3, 2]);

        let column = randomized_prim(1, 4, &mut rng).unwrap();
        assert_eq!(column.as_slice(), &[4, 12, 12, 8]);
    }

    #[test]
    fn test_paint_promotes_neighbors_once() {
        let mut prim = Prim::new(3, 3).unwrap();
        prim.paint((1, 1));
        assert_eq!(prim.frontiers, vec![(2, 1), (0, 1), (1, 2), (1, 0)]);

        prim.frontiers.retain(|&c| c != (2, 1));
        prim.paint((2, 1));
        // (2, 0) and (2, 2) are new, (1, 1) is painted and nothing is duplicated
        assert_eq!(
            prim.frontiers,
            vec![(0, 1), (1, 2), (1, 0), (2, 2), (2, 0)]
        );
        assert_eq!(prim.painted_neighbors((1, 0)), vec![Direction::Down]);
        assert_eq!(prim.painted_neighbors((2, 2)), vec![Direction::Up]);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            randomized_prim(0, 0, &mut rng),
            Err(MazeError::InvalidDimension { .. })
        ));
    }
}
