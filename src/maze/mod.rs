pub mod cell;
pub mod grid;

use std::collections::VecDeque;

pub use cell::{CellStatus, DOOR_MASK, Direction};
use grid::Grid;

use crate::error::MazeError;

/// An `(x, y)` cell coordinate, with `x` in `[0, width)` and `y` in `[0, height)`.
pub type Coord = (u16, u16);

/// A rectangular maze stored as one connectivity mask per cell.
///
/// Bit `Direction::bit()` of a cell is set when there is a doorway towards that
/// neighbor. Doorways are always recorded on both sides: if `(x, y)` has a door
/// to the right, `(x + 1, y)` has a door to the left.
pub struct Maze {
    cells: Grid<u8>,
}

impl Maze {
    /// Creates a maze of the given size with every doorway closed.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        Ok(Maze {
            cells: Grid::new(width, height, 0)?,
        })
    }

    /// Builds a maze from a `height x width` array of masks, e.g. one previously
    /// exported with [`Maze::to_rows`].
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let invalid = MazeError::InvalidDimension { width, height };
        if rows.iter().any(|row| row.len() != width) {
            return Err(invalid);
        }
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(invalid);
        };
        grid::check_dimensions(w, h)?;

        let data = rows.into_iter().flatten().collect::<Box<[u8]>>();
        let cells = Grid::from_parts(w, h, data);
        if let Some(index) = cells.data().iter().position(|&mask| mask & !DOOR_MASK != 0) {
            return Err(MazeError::InvalidMask {
                coord: cells.unravel_index(index),
                mask: cells.data()[index],
            });
        }
        Ok(Maze { cells })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.cells.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.cells.width()
    }

    /// The underlying grid, for bounds checks and neighbor lookups.
    pub fn grid(&self) -> &Grid<u8> {
        &self.cells
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.cells.is_in_bounds(coord)
    }

    /// All masks in row-major order.
    pub fn as_slice(&self) -> &[u8] {
        self.cells.data()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.data().chunks_exact(self.width() as usize)
    }

    /// Exports the masks as a `height x width` array.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    pub fn has_door(&self, coord: Coord, direction: Direction) -> bool {
        self.cells[coord] & direction.bit() != 0
    }

    /// Directions in which `coord` has a doorway.
    pub fn doors(&self, coord: Coord) -> impl Iterator<Item = Direction> + use<> {
        Direction::in_mask(self.cells[coord])
    }

    /// Opens the doorway between `coord` and its neighbor in `direction`,
    /// writing both sides together.
    ///
    /// # Panics
    /// If the neighbor lies outside the maze.
    pub(crate) fn connect(&mut self, coord: Coord, direction: Direction) {
        let Some(neighbor) = self.cells.step(coord, direction) else {
            panic!("Cannot open a doorway {direction} out of the maze from {coord:?}");
        };
        self.cells[coord] |= direction.bit();
        self.cells[neighbor] |= direction.opposite().bit();
    }

    /// Closes every doorway of `coord`, including the bits its neighbors hold
    /// towards it. Returns the number of doorways that were open.
    pub(crate) fn isolate(&mut self, coord: Coord) -> usize {
        let mut removed = 0;
        for direction in Direction::ALL {
            if let Some(neighbor) = self.cells.step(coord, direction) {
                let back = direction.opposite().bit();
                if self.cells[neighbor] & back != 0 {
                    removed += 1;
                }
                self.cells[neighbor] &= !back;
            }
        }
        self.cells[coord] = 0;
        removed
    }

    /// Number of doorways, each counted once.
    pub fn edge_count(&self) -> usize {
        let forward = Direction::Right.bit() | Direction::Down.bit();
        self.cells
            .data()
            .iter()
            .map(|mask| (mask & forward).count_ones() as usize)
            .sum()
    }

    /// Checks that every doorway is recorded on both of its sides.
    pub fn is_symmetric(&self) -> bool {
        self.cells.coords().all(|coord| {
            self.cells.adjacent(coord).all(|(direction, neighbor)| {
                self.has_door(coord, direction) == self.has_door(neighbor, direction.opposite())
            })
        })
    }

    /// Checks that no doorway leads out of the maze.
    pub fn is_boundary_safe(&self) -> bool {
        self.cells.coords().all(|coord| {
            self.doors(coord)
                .all(|direction| self.cells.step(coord, direction).is_some())
        })
    }

    /// Counts the cells reachable from `coord` through doorways, `coord` included.
    pub fn reachable_from(&self, coord: Coord) -> Result<usize, MazeError> {
        self.cells.check_bounds(coord)?;
        let mut visited = vec![false; self.cells.len()];
        visited[self.cells.ravel_index(coord)] = true;
        let mut queue = VecDeque::from([coord]);
        let mut count = 0;

        while let Some(current) = queue.pop_front() {
            count += 1;
            for direction in self.doors(current) {
                let Some(next) = self.cells.step(current, direction) else {
                    continue;
                };
                let idx = self.cells.ravel_index(next);
                if !visited[idx] {
                    visited[idx] = true;
                    queue.push_back(next);
                }
            }
        }
        Ok(count)
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = u8;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[index]
    }
}
