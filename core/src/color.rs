//! Terminal color lookup table.
//!
//! Each color maps to a constant 256-color ANSI background escape that
//! paints one two-character cell, the block the renderer emits per QR
//! module.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// One of the eight standard terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// All colors, in palette order.
pub const ALL: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

impl Color {
    /// The escape sequence for one cell painted in this color.
    pub fn block(&self) -> &'static str {
        match self {
            Color::Black => "\x1b[48;5;0m  \x1b[0m",
            Color::Red => "\x1b[48;5;1m  \x1b[0m",
            Color::Green => "\x1b[48;5;2m  \x1b[0m",
            Color::Yellow => "\x1b[48;5;3m  \x1b[0m",
            Color::Blue => "\x1b[48;5;4m  \x1b[0m",
            Color::Magenta => "\x1b[48;5;5m  \x1b[0m",
            Color::Cyan => "\x1b[48;5;6m  \x1b[0m",
            Color::White => "\x1b[48;5;7m  \x1b[0m",
        }
    }

    /// The color name as it appears in help text.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            _ => Err(Error::UnsupportedColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
