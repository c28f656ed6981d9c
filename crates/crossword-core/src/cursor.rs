//! Cursor position and typing direction with their transition rules.

use crate::grid::{Direction, Position};
use serde::{Deserialize, Serialize};

/// An arrow key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

impl Arrow {
    /// The direction whose axis this arrow moves along
    pub fn axis(self) -> Direction {
        match self {
            Arrow::Left | Arrow::Right => Direction::Across,
            Arrow::Up | Arrow::Down => Direction::Down,
        }
    }

    pub fn delta(self) -> isize {
        match self {
            Arrow::Left | Arrow::Up => -1,
            Arrow::Right | Arrow::Down => 1,
        }
    }
}

/// The selected cell and typing direction. There is always a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursor {
    pub position: Position,
    pub direction: Direction,
}

impl Cursor {
    /// Top-left cell, typing across
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Move by `delta` along the current direction, clamped to the grid
    pub fn step(&mut self, delta: isize, size: usize) {
        let max = size.saturating_sub(1);
        let clamp = |v: usize| v.saturating_add_signed(delta).min(max);
        match self.direction {
            Direction::Across => self.position.x = clamp(self.position.x),
            Direction::Down => self.position.y = clamp(self.position.y),
        }
    }

    /// Advance after a letter was typed.
    ///
    /// Typing across past the last column of an unfilled grid wraps to the
    /// start of the next row, or from the last row switches to down at the
    /// top-left cell. Typing down only clamps.
    pub fn advance(&mut self, size: usize, grid_filled: bool) {
        if self.direction == Direction::Across && self.position.x + 1 >= size && !grid_filled {
            if self.position.y + 1 < size {
                self.position = Position::new(0, self.position.y + 1);
            } else {
                self.direction = Direction::Down;
                self.position = Position::origin();
            }
            return;
        }
        self.step(1, size);
    }

    /// Handle an arrow key: move along the current direction, or turn to
    /// the arrow's axis without moving
    pub fn arrow(&mut self, arrow: Arrow, size: usize) {
        if arrow.axis() == self.direction {
            self.step(arrow.delta(), size);
        } else {
            self.direction = arrow.axis();
        }
    }

    /// Jump to the start of the next row (across) or column (down); past
    /// the last one, flip direction and go back to the top-left cell
    pub fn next_line(&mut self, size: usize) {
        let last = size.saturating_sub(1);
        match self.direction {
            Direction::Across if self.position.y < last => {
                self.position = Position::new(0, self.position.y + 1);
            }
            Direction::Down if self.position.x < last => {
                self.position = Position::new(self.position.x + 1, 0);
            }
            _ => {
                self.toggle_direction();
                self.position = Position::origin();
            }
        }
    }

    /// Whether `pos` is in the same entry line as the cursor
    pub fn in_line(&self, pos: Position) -> bool {
        match self.direction {
            Direction::Across => pos.y == self.position.y,
            Direction::Down => pos.x == self.position.x,
        }
    }
}
