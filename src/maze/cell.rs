use std::fmt;

/// Bits of a cell mask that may carry a doorway.
pub const DOOR_MASK: u8 = 0b1111;

/// A cardinal direction out of a cell.
///
/// Each direction owns one bit of the per-cell connectivity mask:
///
/// | Bit | Direction | Doorway to   |
/// |-----|-----------|--------------|
/// | 0   | `Right`   | `(x + 1, y)` |
/// | 1   | `Left`    | `(x - 1, y)` |
/// | 2   | `Down`    | `(x, y + 1)` |
/// | 3   | `Up`      | `(x, y - 1)` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// All directions in bit order. Neighbor enumeration follows this order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// The mask bit for a doorway in this direction.
    pub const fn bit(self) -> u8 {
        match self {
            Direction::Right => 1 << 0,
            Direction::Left => 1 << 1,
            Direction::Down => 1 << 2,
            Direction::Up => 1 << 3,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// Iterates the directions whose bit is set in `mask`.
    pub fn in_mask(mask: u8) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| mask & direction.bit() != 0)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Left => write!(f, "left"),
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
        }
    }
}

/// Traversal state of a cell while a spanning tree is being grown.
///
/// A cell only ever moves forward: `Unreached -> Frontier -> Painted`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellStatus {
    #[default]
    Unreached,
    /// Not yet in the tree, but adjacent to at least one painted cell.
    Frontier,
    /// Part of the tree.
    Painted,
}
