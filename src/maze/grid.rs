use crate::error::MazeError;

use super::Coord;
use super::cell::Direction;

/// A rectangular, row-major store with one value per cell.
pub struct Grid<T> {
    data: Box<[T]>,
    width: u16,
    height: u16,
}

impl<T: Clone> Grid<T> {
    /// Creates a `width` x `height` grid filled with `cell`.
    /// Both dimensions must be positive; this is checked before allocating.
    pub fn new(width: u16, height: u16, cell: T) -> Result<Self, MazeError> {
        check_dimensions(width, height)?;
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Ok(Grid {
            data,
            width,
            height,
        })
    }
}

impl<T> Grid<T> {
    pub(crate) fn from_parts(width: u16, height: u16, data: Box<[T]>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub fn check_bounds(&self, coord: Coord) -> Result<(), MazeError> {
        if self.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfRange {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub(crate) fn ravel_index(&self, coord: Coord) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    pub(crate) fn unravel_index(&self, index: usize) -> Coord {
        let width = self.width as usize;
        ((index % width) as u16, (index / width) as u16)
    }

    /// The cell one step from `coord` in `direction`, if it is inside the grid.
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (x, y) = coord;
        let next = match direction {
            Direction::Right => (x.checked_add(1)?, y),
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Down => (x, y.checked_add(1)?),
            Direction::Up => (x, y.checked_sub(1)?),
        };
        self.is_in_bounds(next).then_some(next)
    }

    /// In-bounds neighbors of a cell known to be in bounds, paired with the
    /// direction leading to each. Yields them in `Direction::ALL` order.
    pub(crate) fn adjacent(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| Some((direction, self.step(coord, direction)?)))
    }

    /// Get neighbors of a cell.
    /// A neighbor is a cell one step away in a cardinal direction that stays inside the grid.
    /// The order is stable: right, left, down, up.
    pub fn neighbors(&self, coord: Coord) -> Result<impl Iterator<Item = Coord> + '_, MazeError> {
        self.check_bounds(coord)?;
        Ok(self.adjacent(coord).map(|(_, neighbor)| neighbor))
    }

    /// Iterates all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}

pub(crate) fn check_dimensions(width: u16, height: u16) -> Result<(), MazeError> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidDimension {
            width: width as usize,
            height: height as usize,
        });
    }
    Ok(())
}

/// Direction of the step from `from` to `to`.
/// Returns `None` unless the two cells are axis-aligned and exactly one step apart.
pub fn direction_to(from: Coord, to: Coord) -> Option<Direction> {
    let dx = to.0 as i32 - from.0 as i32;
    let dy = to.1 as i32 - from.1 as i32;
    match (dx, dy) {
        (1, 0) => Some(Direction::Right),
        (-1, 0) => Some(Direction::Left),
        (0, 1) => Some(Direction::Down),
        (0, -1) => Some(Direction::Up),
        _ => None,
    }
}

/// Direction of the step from `to` back to `from`; the inverse of [`direction_to`].
pub fn opposite_direction(from: Coord, to: Coord) -> Option<Direction> {
    direction_to(from, to).map(Direction::opposite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 4, 0u8).err(),
            Some(MazeError::InvalidDimension {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::new(3, 0, 0u8).is_err());
        assert!(Grid::new(1, 1, 0u8).is_ok());
    }

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 4, 0u8).unwrap();
        grid[(2, 3)] = 7;
        assert_eq!(grid[(2, 3)], 7);
        assert_eq!(grid.data()[3 * 5 + 2], 7);
        assert_eq!(grid.unravel_index(17), (2, 3));
    }

    #[test]
    fn test_get_neighbors() {
        let grid = Grid::new(7, 7, ()).unwrap();
        let neighbors = grid.neighbors((3, 3)).unwrap().collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(4, 3), (2, 3), (3, 4), (3, 2)]);
    }

    #[test]
    fn test_corner_neighbors() {
        let grid = Grid::new(3, 2, ()).unwrap();
        let top_left = grid.neighbors((0, 0)).unwrap().collect::<Vec<_>>();
        assert_eq!(top_left, vec![(1, 0), (0, 1)]);
        let bottom_right = grid.neighbors((2, 1)).unwrap().collect::<Vec<_>>();
        assert_eq!(bottom_right, vec![(1, 1), (2, 0)]);

        let single = Grid::new(1, 1, ()).unwrap();
        assert_eq!(single.neighbors((0, 0)).unwrap().count(), 0);
    }

    #[test]
    fn test_neighbors_at_u16_limit() {
        let grid = Grid::new(u16::MAX, 1, ()).unwrap();
        let last = (u16::MAX - 1, 0);
        assert_eq!(grid.step(last, Direction::Right), None);
        assert_eq!(grid.step(last, Direction::Left), Some((u16::MAX - 2, 0)));
        assert_eq!(grid.step(last, Direction::Up), None);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(5, 5, ()).unwrap();
        assert!(!grid.is_in_bounds((5, 5)));
        assert!(!grid.is_in_bounds((0, 5)));
        assert!(!grid.is_in_bounds((5, 0)));
        assert!(grid.is_in_bounds((4, 4)));
        assert_eq!(
            grid.neighbors((5, 0)).err(),
            Some(MazeError::OutOfRange {
                coord: (5, 0),
                width: 5,
                height: 5
            })
        );
    }

    #[test]
    fn test_direction_between_cells() {
        assert_eq!(direction_to((1, 1), (2, 1)), Some(Direction::Right));
        assert_eq!(direction_to((1, 1), (0, 1)), Some(Direction::Left));
        assert_eq!(direction_to((1, 1), (1, 2)), Some(Direction::Down));
        assert_eq!(direction_to((1, 1), (1, 0)), Some(Direction::Up));
        assert_eq!(opposite_direction((1, 1), (2, 1)), Some(Direction::Left));
        assert_eq!(opposite_direction((1, 1), (1, 0)), Some(Direction::Down));

        assert_eq!(direction_to((1, 1), (1, 1)), None);
        assert_eq!(direction_to((1, 1), (2, 2)), None);
        assert_eq!(direction_to((0, 0), (2, 0)), None);
        assert_eq!(opposite_direction((0, 0), (0, 3)), None);
    }
}
