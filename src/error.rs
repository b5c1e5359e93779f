use crate::maze::Coord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// Width or height is zero (or too large to address).
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("coordinate {coord:?} lies outside the {width}x{height} maze")]
    OutOfRange { coord: Coord, width: u16, height: u16 },

    /// A supplied cell mask uses bits beyond the four doorway bits.
    #[error("cell {coord:?} has mask {mask:#06b} with bits outside the doorway mask")]
    InvalidMask { coord: Coord, mask: u8 },
}
