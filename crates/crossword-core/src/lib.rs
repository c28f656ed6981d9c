//! Crossword grid interaction engine.
//!
//! [`CrosswordWidget`] tracks the player's cursor, typing direction,
//! entered letters and completion state for a square, fully open grid,
//! and turns key presses, clicks and clue selections into state
//! transitions. Rendering is left to the host; it reads the state back
//! through queries or a [`WidgetSnapshot`] delivered to subscribers.
//!
//! ```
//! use crossword_core::{CrosswordWidget, Direction, Key, Position};
//!
//! let mut widget = CrosswordWidget::new(5);
//! widget.select_hint(6, Direction::Across);
//! widget.handle_key(Key::Letter('f'));
//! assert_eq!(widget.cursor(), Position::new(1, 1));
//! ```

mod completion;
mod cursor;
mod error;
mod grid;
mod input;
pub mod numbering;
mod payload;
mod puzzle;
mod widget;

#[cfg(test)]
mod tests;

pub use completion::Completion;
pub use cursor::{Arrow, Cursor};
pub use error::PuzzleError;
pub use grid::{Direction, Grid, Position, Square, DEFAULT_SIZE};
pub use input::{GridLayout, Key};
pub use numbering::{NumberedCell, Numbering};
pub use payload::{parse_puzzle_json, GridRow, PuzzleData, PuzzleRequest, PuzzleResponse};
pub use puzzle::{Clues, Puzzle, PLACEHOLDER_CLUE};
pub use widget::{CellHighlight, CrosswordWidget, ListenerId, WidgetSnapshot};
