//! Post-generation hole punching.
//!
//! A hole is a cell cut off from all of its neighbors, leaving an unreachable
//! pocket inside an otherwise connected maze.

use crate::error::MazeError;
use crate::maze::{Coord, Maze};

/// Disconnects `coord` from every neighbor.
///
/// Clears the cell's own mask and the bit each in-bounds neighbor holds towards it,
/// so doorways stay symmetric. Cells on an edge or corner only touch the neighbors
/// that exist. Returns the number of doorways removed.
///
/// Fails with [`MazeError::OutOfRange`] without modifying the maze if `coord` is
/// outside the maze.
pub fn punch_hole(maze: &mut Maze, coord: Coord) -> Result<usize, MazeError> {
    maze.grid().check_bounds(coord)?;
    let removed = maze.isolate(coord);
    tracing::debug!("[holes] punched {:?}, removed {} doorways", coord, removed);
    Ok(removed)
}

/// Punches a hole at each coordinate.
///
/// Every coordinate is checked before any cell is touched, so an out-of-range
/// coordinate leaves the maze unchanged. Order does not matter and repeated
/// coordinates are harmless. Returns the total number of doorways removed.
pub fn punch_holes<I>(maze: &mut Maze, coords: I) -> Result<usize, MazeError>
where
    I: IntoIterator<Item = Coord>,
{
    let coords = coords.into_iter().collect::<Vec<_>>();
    coords
        .iter()
        .try_for_each(|&coord| maze.grid().check_bounds(coord))?;

    let removed: usize = coords.into_iter().map(|coord| maze.isolate(coord)).sum();
    tracing::debug!("[holes] removed {} doorways in total", removed);
    Ok(removed)
}
