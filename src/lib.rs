//! Perfect maze generation with randomized Prim's algorithm.
//!
//! A maze is a grid of cells whose doorways form a spanning tree: every cell can
//! reach every other one along exactly one path. Each cell stores its doorways as
//! a 4-bit mask (see [`Direction`]).
//!
//! ```
//! let mut maze = primaze::generate_maze(8, 5, Some(7)).unwrap();
//! assert_eq!(maze.edge_count(), 8 * 5 - 1);
//!
//! primaze::punch_hole(&mut maze, (0, 0)).unwrap();
//! assert_eq!(maze[(0, 0)], 0);
//! ```

pub mod error;
pub mod generators;
pub mod holes;
pub mod maze;
pub mod render;

pub use error::MazeError;
pub use generators::generate_maze;
pub use holes::{punch_hole, punch_holes};
pub use maze::{Coord, Direction, Maze};
