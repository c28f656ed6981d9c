//! The crossword widget: one owned state machine per grid on screen.

use crate::completion::Completion;
use crate::cursor::Cursor;
use crate::grid::{Direction, Grid, Position, Square};
use crate::input::{GridLayout, Key};
use crate::numbering::{self, NumberedCell};
use crate::puzzle::{Clues, Puzzle};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a renderer should shade a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellHighlight {
    /// The selected cell
    Cursor,
    /// Another cell of the entry being typed
    Word,
    Plain,
}

/// Everything a renderer needs to paint the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSnapshot {
    pub size: usize,
    pub cells: Vec<Vec<Square>>,
    pub cursor: Position,
    pub direction: Direction,
    pub current_hint: u32,
    pub numbers: Vec<NumberedCell>,
    pub is_filled: bool,
    pub is_correct: bool,
    pub focused: bool,
    pub active: bool,
}

/// Handle returned by [`CrosswordWidget::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

impl ListenerId {
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

type Listener = Box<dyn FnMut(&WidgetSnapshot)>;

/// Interactive crossword grid.
///
/// Holds the loaded puzzle, the player's entries, the cursor and the
/// completion flags. Every command runs to completion synchronously and
/// then notifies subscribers if anything changed.
pub struct CrosswordWidget {
    puzzle: Puzzle,
    entries: Grid,
    cursor: Cursor,
    completion: Completion,
    /// Keyboard input is only processed while focused
    focused: bool,
    /// Set by the first click or clue selection
    active: bool,
    layout: GridLayout,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u32,
}

impl Default for CrosswordWidget {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SIZE)
    }
}

impl fmt::Debug for CrosswordWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrosswordWidget")
            .field("puzzle", &self.puzzle)
            .field("entries", &self.entries)
            .field("cursor", &self.cursor)
            .field("completion", &self.completion)
            .field("focused", &self.focused)
            .field("active", &self.active)
            .field("layout", &self.layout)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CrosswordWidget {
    /// Create a widget showing the sample puzzle of the given size
    pub fn new(size: usize) -> Self {
        Self::with_puzzle(Puzzle::sample(size))
    }

    pub fn with_puzzle(puzzle: Puzzle) -> Self {
        let size = puzzle.size();
        Self {
            puzzle,
            entries: Grid::empty(size),
            cursor: Cursor::new(),
            completion: Completion::default(),
            focused: false,
            active: false,
            layout: GridLayout::default(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Replace the geometry used to resolve clicks
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn set_layout(&mut self, layout: GridLayout) {
        self.layout = layout;
    }

    // ==================== Load ====================

    /// Replace the puzzle and reset entries, cursor and completion
    pub fn load_puzzle(&mut self, puzzle: Puzzle) {
        log::info!("loading {}x{} puzzle", puzzle.size(), puzzle.size());
        self.entries = Grid::empty(puzzle.size());
        self.puzzle = puzzle;
        self.cursor = Cursor::new();
        self.completion = Completion::default();
        self.notify();
    }

    // ==================== Queries ====================

    pub fn size(&self) -> usize {
        self.puzzle.size()
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn clues(&self) -> &Clues {
        self.puzzle.clues()
    }

    pub fn entries(&self) -> &Grid {
        &self.entries
    }

    pub fn entry(&self, pos: Position) -> Square {
        self.entries.get(pos)
    }

    pub fn cursor(&self) -> Position {
        self.cursor.position
    }

    pub fn direction(&self) -> Direction {
        self.cursor.direction
    }

    /// Clue number of the entry under the cursor
    pub fn current_hint(&self) -> u32 {
        numbering::entry_number(self.cursor.position, self.cursor.direction, self.size())
    }

    /// Clue text of the entry under the cursor
    pub fn current_clue(&self) -> Option<&str> {
        self.clues().get(self.current_hint(), self.direction())
    }

    pub fn is_filled(&self) -> bool {
        self.completion.is_filled
    }

    pub fn is_correct(&self) -> bool {
        self.completion.is_correct
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn number_at(&self, pos: Position) -> Option<u32> {
        self.puzzle.numbering().number_at(pos)
    }

    pub fn highlight(&self, pos: Position) -> CellHighlight {
        if pos == self.cursor.position {
            CellHighlight::Cursor
        } else if self.cursor.in_line(pos) {
            CellHighlight::Word
        } else {
            CellHighlight::Plain
        }
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            size: self.size(),
            cells: self.entries.to_rows(),
            cursor: self.cursor.position,
            direction: self.cursor.direction,
            current_hint: self.current_hint(),
            numbers: self.puzzle.numbering().cells(),
            is_filled: self.completion.is_filled,
            is_correct: self.completion.is_correct,
            focused: self.focused,
            active: self.active,
        }
    }

    // ==================== Commands ====================

    pub fn handle_focus(&mut self) {
        if !self.focused {
            self.focused = true;
            self.notify();
        }
    }

    pub fn handle_blur(&mut self) {
        if self.focused {
            self.focused = false;
            self.notify();
        }
    }

    /// Handle a pointer click at pixel coordinates.
    ///
    /// Clicking the selected cell of an active widget flips the direction;
    /// clicking any other cell selects it. The first click activates and
    /// focuses the widget wherever it lands.
    pub fn handle_click(&mut self, px: f64, py: f64) {
        let mut changed = false;

        if let Some(pos) = self.layout.cell_at(px, py, self.size()) {
            if pos == self.cursor.position && self.active {
                self.cursor.toggle_direction();
                log::debug!("direction toggled to {}", self.cursor.direction);
            } else {
                self.cursor.position = pos;
                log::debug!("selected {}", pos);
            }
            changed = true;
        }

        if !self.active {
            self.active = true;
            self.focused = true;
            changed = true;
        }

        if changed {
            self.notify();
        }
    }

    /// Handle a key press. Returns `true` if the key was consumed.
    ///
    /// Subscribers are only notified when the entries or the cursor moved;
    /// an arrow pressed against the edge is consumed but changes nothing.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.focused {
            return false;
        }

        let size = self.size();
        let before = self.cursor;
        let edited = match key {
            Key::Letter(c) if c.is_ascii_alphabetic() => {
                let pos = self.cursor.position;
                let square = Square::Letter(c.to_ascii_uppercase());
                let edited = self.entries.get(pos) != square;
                self.entries.set(pos, square);
                // Row wrapping looks at the flags from before this letter
                self.cursor.advance(size, self.completion.is_filled);
                log::debug!("typed {} at {}, cursor now {}", c, pos, self.cursor.position);
                edited
            }
            Key::Backspace => {
                let pos = self.cursor.position;
                let edited = self.entries.get(pos).is_filled();
                self.entries.set(pos, Square::Empty);
                self.cursor.step(-1, size);
                log::debug!("cleared {}, cursor now {}", pos, self.cursor.position);
                edited
            }
            Key::Arrow(arrow) => {
                self.cursor.arrow(arrow, size);
                false
            }
            Key::Enter | Key::Tab => {
                self.cursor.next_line(size);
                false
            }
            Key::Letter(_) | Key::Other => return false,
        };

        if edited {
            self.recheck();
        }
        if edited || self.cursor != before {
            self.notify();
        }
        true
    }

    /// Jump to the first cell of a clue's entry and focus the widget.
    ///
    /// Returns `false`, leaving the state untouched, if `number` does not
    /// label an entry in `direction`.
    pub fn select_hint(&mut self, number: u32, direction: Direction) -> bool {
        let Some(pos) = numbering::entry_start(number, direction, self.size()) else {
            log::warn!("no {} entry numbered {}", direction, number);
            return false;
        };

        self.cursor = Cursor {
            position: pos,
            direction,
        };
        self.active = true;
        self.focused = true;
        log::debug!("selected clue {} {} at {}", number, direction, pos);
        self.notify();
        true
    }

    /// Fill the selected cell with its answer
    pub fn reveal_square(&mut self) {
        let pos = self.cursor.position;
        let answer = self.puzzle.answer(pos);
        if self.entries.get(pos) == answer {
            return;
        }
        self.entries.set(pos, answer);
        log::debug!("revealed {}", pos);
        self.recheck();
        self.notify();
    }

    /// Fill every cell with its answer
    pub fn reveal_puzzle(&mut self) {
        if self.entries == *self.puzzle.answers() {
            return;
        }
        self.entries = self.puzzle.answers().clone();
        log::debug!("revealed puzzle");
        self.recheck();
        self.notify();
    }

    // ==================== Change notification ====================

    /// Register a listener called with a fresh snapshot after every change
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&WidgetSnapshot) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn recheck(&mut self) {
        let was_correct = self.completion.is_correct;
        self.completion = Completion::check(&self.entries, self.puzzle.answers());
        if self.completion.is_correct && !was_correct {
            log::info!("puzzle solved");
        }
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}
