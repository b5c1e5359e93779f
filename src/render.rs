//! Expands a maze into a block of wall and floor glyphs.
//!
//! Each cell becomes a 3x3 block: the corners are walls, the centre is floor, and each
//! edge midpoint is floor when the cell has a doorway in that direction.

use crossterm::style::{Color, Stylize};
use std::fmt;

use crate::maze::{Direction, Maze};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Floor,
}

impl Glyph {
    /// The width of each glyph when rendered to a terminal, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Plain-text symbol: `'X'` for wall, `' '` for floor.
    pub fn as_char(self) -> char {
        match self {
            Glyph::Wall => 'X',
            Glyph::Floor => ' ',
        }
    }

    fn open_if(door: bool) -> Glyph {
        if door { Glyph::Floor } else { Glyph::Wall }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Wall => "⬜".with(Color::White),
            Glyph::Floor => "  ".with(Color::Reset),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::CELL_WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Renders `maze` as `3 * height` rows of `3 * width` glyphs.
pub fn render(maze: &Maze) -> Vec<Vec<Glyph>> {
    let width = maze.width() as usize;
    let mut block = vec![vec![Glyph::Wall; 3 * width]; 3 * maze.height() as usize];

    for coord in maze.grid().coords() {
        let x = 3 * coord.0 as usize + 1;
        let y = 3 * coord.1 as usize + 1;
        let door = |direction| Glyph::open_if(maze.has_door(coord, direction));
        block[y][x] = Glyph::Floor;
        block[y - 1][x] = door(Direction::Up);
        block[y + 1][x] = door(Direction::Down);
        block[y][x - 1] = door(Direction::Left);
        block[y][x + 1] = door(Direction::Right);
    }
    block
}

/// Renders `maze` as plain text, one line per glyph row.
pub fn to_ascii(maze: &Maze) -> String {
    render(maze)
        .iter()
        .map(|row| row.iter().map(|glyph| glyph.as_char()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the styled glyph block of `maze` to `out`.
pub fn write_styled<W: std::io::Write>(maze: &Maze, out: &mut W) -> std::io::Result<()> {
    for row in render(maze) {
        for glyph in row {
            write!(out, "{}", glyph)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
