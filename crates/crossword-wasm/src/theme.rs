//! Color themes for the canvas crossword

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Color theme for the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Canvas and plain cell background
    pub background: Color,
    /// Other cells of the entry under the cursor
    pub word_bg: Color,
    /// Selected cell
    pub cursor_bg: Color,
    /// Cell borders
    pub border: Color,
    /// Clue numbers
    pub number: Color,
    /// Entered letters
    pub letter: Color,
    /// Letters once the puzzle is solved
    pub solved_letter: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Look a theme up by name; unknown names give the classic theme
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::classic(),
        }
    }

    /// White paper grid with yellow cursor and blue word
    pub fn classic() -> Self {
        Self {
            background: Color::new(0xff, 0xff, 0xff),
            word_bg: Color::new(0xb1, 0xd7, 0xfb),
            cursor_bg: Color::new(0xff, 0xeb, 0x3b),
            border: Color::new(0x00, 0x00, 0x00),
            number: Color::new(0x00, 0x00, 0x00),
            letter: Color::new(0x00, 0x00, 0x00),
            solved_letter: Color::new(0x1b, 0x7f, 0x3a),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::new(20, 22, 30),
            word_bg: Color::new(40, 60, 95),
            cursor_bg: Color::new(150, 120, 20),
            border: Color::new(110, 115, 135),
            number: Color::new(160, 165, 185),
            letter: Color::new(255, 255, 255),
            solved_letter: Color::new(90, 255, 130),
        }
    }
}
