use crate::config::Config;
use crate::error::TuiError;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use crossword_core::{
    parse_puzzle_json, Arrow, Completion, CrosswordWidget, Direction, GridLayout, Key, Puzzle,
};
use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

/// Terminal cells per grid cell: a border column plus three for the
/// content, and a border row plus the number and letter rows
pub const CELL_LAYOUT: GridLayout = GridLayout {
    cell_width: 4.0,
    cell_height: 3.0,
    padding: 0.0,
};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// A clickable clue line in the clue panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueTarget {
    pub row: u16,
    pub start: u16,
    pub end: u16,
    pub number: u32,
    pub direction: Direction,
}

impl ClueTarget {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.row && column >= self.start && column < self.end
    }
}

/// The main application state
pub struct App {
    /// The crossword being solved
    pub widget: CrosswordWidget,
    /// Color theme
    pub theme: Theme,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Set by the widget subscription whenever its state changes
    redraw: Rc<Cell<bool>>,
    /// Completion flags at the last announcement
    last_completion: Completion,
    /// Top-left terminal cell of the grid, filled in by the renderer
    pub grid_origin: (u16, u16),
    /// Clue lines drawn in the last frame
    pub clue_targets: Vec<ClueTarget>,
}

impl App {
    /// Create the app from settings and an optional loaded puzzle
    pub fn new(config: &Config, puzzle: Option<Puzzle>) -> Self {
        let mut widget = CrosswordWidget::new(config.size).with_layout(CELL_LAYOUT);

        let redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&redraw);
        widget.subscribe(move |_| flag.set(true));

        if let Some(puzzle) = puzzle {
            widget.load_puzzle(puzzle);
        }
        // The terminal has focus when we start
        widget.handle_focus();

        Self {
            widget,
            theme: Theme::from_name(config.theme),
            message: None,
            message_timer: 0,
            redraw,
            last_completion: Completion::default(),
            grid_origin: (0, 0),
            clue_targets: Vec::new(),
        }
    }

    /// Tick rate for the message timer
    pub fn get_tick_rate(&self) -> Duration {
        Duration::from_millis(100)
    }

    /// Update timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
                self.request_redraw();
            }
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw.get()
    }

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    pub fn mark_drawn(&self) {
        self.redraw.set(false);
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms ticks
        self.request_redraw();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') if ctrl => {
                self.widget.reveal_square();
            }
            KeyCode::Char('g') if ctrl => {
                self.widget.reveal_puzzle();
                self.show_message("Puzzle revealed");
            }
            _ if ctrl => {}
            code => {
                self.widget.handle_key(translate_key(code));
            }
        }
        self.announce_completion();
        AppAction::Continue
    }

    /// Handle a mouse event: clicks on the grid or on a clue
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(target) = self
            .clue_targets
            .iter()
            .find(|t| t.contains(mouse.column, mouse.row))
            .copied()
        {
            self.widget.select_hint(target.number, target.direction);
            return;
        }

        // Off-grid clicks still go through: the first one activates the widget
        let (gx, gy) = self.grid_origin;
        let px = f64::from(mouse.column) - f64::from(gx);
        let py = f64::from(mouse.row) - f64::from(gy);
        self.widget.handle_click(px, py);
    }

    /// Terminal focus gained or lost
    pub fn handle_focus(&mut self, gained: bool) {
        if gained {
            self.widget.handle_focus();
        } else {
            self.widget.handle_blur();
        }
    }

    fn announce_completion(&mut self) {
        let completion = self.widget.completion();
        if completion == self.last_completion {
            return;
        }
        self.last_completion = completion;

        if completion.is_correct {
            self.show_message("Solved! Congratulations");
        } else if completion.is_filled {
            self.show_message("Something's not right yet");
        }
    }
}

/// Map a terminal key code to a widget key
pub fn translate_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::from_char(c),
        KeyCode::Left => Key::Arrow(Arrow::Left),
        KeyCode::Right => Key::Arrow(Arrow::Right),
        KeyCode::Up => Key::Arrow(Arrow::Up),
        KeyCode::Down => Key::Arrow(Arrow::Down),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        _ => Key::Other,
    }
}

/// Read and validate a puzzle file
pub fn load_puzzle_file(path: &Path) -> Result<Puzzle, TuiError> {
    let json = fs::read_to_string(path).map_err(|source| TuiError::ReadPuzzle {
        path: path.to_path_buf(),
        source,
    })?;
    let puzzle = parse_puzzle_json(&json).map_err(|source| TuiError::Puzzle {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "loaded {}x{} puzzle from {}",
        puzzle.size(),
        puzzle.size(),
        path.display()
    );
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossword_core::{Position, Square};

    fn app() -> App {
        App::new(&Config::default(), None)
    }

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_translate_key() {
        assert_eq!(translate_key(KeyCode::Char('q')), Key::Letter('Q'));
        assert_eq!(translate_key(KeyCode::Char('3')), Key::Other);
        assert_eq!(translate_key(KeyCode::Left), Key::Arrow(Arrow::Left));
        assert_eq!(translate_key(KeyCode::Tab), Key::Tab);
        assert_eq!(translate_key(KeyCode::Backspace), Key::Backspace);
        assert_eq!(translate_key(KeyCode::Delete), Key::Other);
    }

    #[test]
    fn test_typing_goes_to_widget() {
        let mut app = app();
        assert!(app.widget.is_focused());
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.widget.entry(Position::new(0, 0)), Square::Letter('H'));
        assert_eq!(app.widget.cursor(), Position::new(1, 0));
    }

    #[test]
    fn test_control_letters_do_not_type() {
        let mut app = app();
        ctrl(&mut app, 'x');
        assert_eq!(app.widget.entries().empty_count(), 25);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        assert!(matches!(press(&mut app, KeyCode::Esc), AppAction::Quit));
        assert!(matches!(press(&mut app, KeyCode::Char('q')), AppAction::Continue));
    }

    #[test]
    fn test_reveal_shortcuts() {
        let mut app = app();
        ctrl(&mut app, 'r');
        assert_eq!(app.widget.entry(Position::new(0, 0)), Square::Letter('A'));

        ctrl(&mut app, 'g');
        assert!(app.widget.is_correct());
        assert_eq!(app.message.as_deref(), Some("Solved! Congratulations"));
    }

    #[test]
    fn test_wrong_fill_is_announced() {
        let mut app = app();
        for _ in 0..25 {
            press(&mut app, KeyCode::Char('z'));
        }
        assert!(app.widget.is_filled());
        assert_eq!(app.message.as_deref(), Some("Something's not right yet"));
    }

    #[test]
    fn test_grid_clicks() {
        let mut app = app();
        app.grid_origin = (2, 2);

        // column 2 + 4*3 + 1, row 2 + 3*1 + 2 -> cell (3, 1)
        click(&mut app, 15, 7);
        assert_eq!(app.widget.cursor(), Position::new(3, 1));
        assert!(app.widget.is_active());

        click(&mut app, 15, 7);
        assert_eq!(app.widget.direction(), Direction::Down);

        // far outside the grid: ignored
        click(&mut app, 80, 1);
        assert_eq!(app.widget.cursor(), Position::new(3, 1));
    }

    #[test]
    fn test_first_click_off_grid_activates() {
        let mut app = app();
        app.grid_origin = (2, 2);
        assert!(!app.widget.is_active());

        click(&mut app, 0, 0);
        assert!(app.widget.is_active());
        assert_eq!(app.widget.cursor(), Position::new(0, 0));

        // Once active, the same cell click toggles; the off-grid one did not
        click(&mut app, 3, 3);
        assert_eq!(app.widget.direction(), Direction::Down);
    }

    #[test]
    fn test_clue_clicks() {
        let mut app = app();
        app.clue_targets = vec![ClueTarget {
            row: 10,
            start: 30,
            end: 45,
            number: 4,
            direction: Direction::Down,
        }];
        click(&mut app, 35, 10);
        assert_eq!(app.widget.cursor(), Position::new(3, 0));
        assert_eq!(app.widget.direction(), Direction::Down);
    }

    #[test]
    fn test_blur_stops_typing() {
        let mut app = app();
        app.handle_focus(false);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.widget.entries().empty_count(), 25);
        app.handle_focus(true);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.widget.entries().empty_count(), 24);
    }

    #[test]
    fn test_redraw_follows_widget_changes() {
        let mut app = app();
        app.mark_drawn();
        press(&mut app, KeyCode::F(5));
        assert!(!app.needs_redraw());
        press(&mut app, KeyCode::Right);
        assert!(app.needs_redraw());
    }

    #[test]
    fn test_load_puzzle_file_errors() {
        let missing = std::env::temp_dir().join("crossword-no-such-puzzle.json");
        assert!(matches!(
            load_puzzle_file(&missing),
            Err(TuiError::ReadPuzzle { .. })
        ));

        let bad = std::env::temp_dir()
            .join(format!("crossword-{}-bad-puzzle.json", std::process::id()));
        fs::write(&bad, r#"{"grid": ["AB", "C"]}"#).unwrap();
        assert!(matches!(load_puzzle_file(&bad), Err(TuiError::Puzzle { .. })));
        let _ = fs::remove_file(bad);
    }
}
