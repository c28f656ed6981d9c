//! Discrete input events understood by the widget.

use crate::cursor::Arrow;
use crate::grid::Position;
use serde::{Deserialize, Serialize};

/// A key press, already decoded from whatever the host delivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// An ASCII letter, stored uppercase. Built by `from_char` and
    /// `from_name`; other characters are ignored by the widget.
    Letter(char),
    Arrow(Arrow),
    Enter,
    Tab,
    Backspace,
    /// Anything else; ignored
    Other,
}

impl Key {
    /// Decode a DOM `KeyboardEvent.key` name (`"a"`, `"ArrowLeft"`, `"Enter"` ...)
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::Arrow(Arrow::Left),
            "ArrowRight" => Key::Arrow(Arrow::Right),
            "ArrowUp" => Key::Arrow(Arrow::Up),
            "ArrowDown" => Key::Arrow(Arrow::Down),
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::from_char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    /// Decode a typed character
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Key::Letter(c.to_ascii_uppercase())
        } else {
            match c {
                '\n' | '\r' => Key::Enter,
                '\t' => Key::Tab,
                _ => Key::Other,
            }
        }
    }
}

/// Pixel geometry of the rendered grid, used to resolve pointer clicks.
///
/// Coordinates are relative to the top-left corner of the drawing
/// surface; the grid starts `padding` units in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub cell_width: f64,
    pub cell_height: f64,
    pub padding: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::square(100.0, 1.0)
    }
}

impl GridLayout {
    pub fn square(cell_size: f64, padding: f64) -> Self {
        Self {
            cell_width: cell_size,
            cell_height: cell_size,
            padding,
        }
    }

    /// Cell under the point `(px, py)`, if it lies on the grid
    pub fn cell_at(&self, px: f64, py: f64, size: usize) -> Option<Position> {
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return None;
        }
        let gx = ((px - self.padding) / self.cell_width).floor();
        let gy = ((py - self.padding) / self.cell_height).floor();
        if gx < 0.0 || gy < 0.0 || !gx.is_finite() || !gy.is_finite() {
            return None;
        }
        let pos = Position::new(gx as usize, gy as usize);
        pos.in_bounds(size).then_some(pos)
    }

    /// Top-left corner of a cell
    pub fn cell_origin(&self, pos: Position) -> (f64, f64) {
        (
            pos.x as f64 * self.cell_width + self.padding,
            pos.y as f64 * self.cell_height + self.padding,
        )
    }

    /// Total drawing size for an `size` x `size` grid, padding included
    pub fn extent(&self, size: usize) -> (f64, f64) {
        (
            self.cell_width * size as f64 + self.padding * 2.0,
            self.cell_height * size as f64 + self.padding * 2.0,
        )
    }
}
