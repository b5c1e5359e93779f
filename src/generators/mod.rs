use rand::{SeedableRng, rngs::StdRng};

pub mod prim;

pub use prim::randomized_prim;

use crate::error::MazeError;
use crate::maze::{Maze, grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of `width` x `height` cells with randomized Prim's algorithm.
///
/// The same `seed` with the same dimensions always produces the same maze.
/// Without a seed the generator is initialized from OS entropy.
pub fn generate_maze(width: u16, height: u16, seed: Option<u64>) -> Result<Maze, MazeError> {
    grid::check_dimensions(width, height)?;
    tracing::debug!("[generate] {}x{} maze, seed {:?}", width, height, seed);
    let mut rng = get_rng(seed);
    randomized_prim(width, height, &mut rng)
}
