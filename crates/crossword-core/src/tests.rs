//! End-to-end solving scenarios for the crossword widget

use crate::{
    parse_puzzle_json, Arrow, CrosswordWidget, Direction, Key, Position, Puzzle, Square,
};

const PETS: &str = r#"{
    "grid": ["CATSO", "ARENA", "TENTS", "SNORE", "OASES"],
    "clues": {
        "across": {"1": "Felines", "6": "Venue", "7": "Camping gear", "8": "Sleep noise", "9": "Desert stops"},
        "down": {"1": "Felines again", "2": "Zone", "3": "Decades", "4": "Not lefts", "5": "Also"}
    }
}"#;

fn pets_widget() -> CrosswordWidget {
    let mut widget = CrosswordWidget::new(5);
    widget.load_puzzle(parse_puzzle_json(PETS).unwrap());
    widget.handle_focus();
    widget
}

fn type_word(widget: &mut CrosswordWidget, word: &str) {
    for c in word.chars() {
        widget.handle_key(Key::from_char(c));
    }
}

#[test]
fn test_load_resets_for_every_size() {
    for size in 1..=7 {
        let mut widget = CrosswordWidget::new(3);
        widget.handle_focus();
        widget.reveal_puzzle();
        widget.load_puzzle(Puzzle::sample(size));

        assert!(!widget.is_filled());
        assert!(!widget.is_correct());
        assert_eq!(widget.cursor(), Position::new(0, 0));
        assert_eq!(widget.direction(), Direction::Across);
        assert_eq!(widget.entries().empty_count(), size * size);
    }
}

#[test]
fn test_select_hint_positions() {
    let mut widget = CrosswordWidget::new(5);
    widget.select_hint(1, Direction::Across);
    assert_eq!(widget.cursor(), Position::new(0, 0));
    widget.select_hint(6, Direction::Across);
    assert_eq!(widget.cursor(), Position::new(0, 1));
    widget.select_hint(3, Direction::Down);
    assert_eq!(widget.cursor(), Position::new(2, 0));
}

#[test]
fn test_reveal_puzzle_is_idempotent() {
    let mut widget = pets_widget();
    type_word(&mut widget, "XY");

    widget.reveal_puzzle();
    let once = widget.entries().clone();
    assert!(widget.is_correct());

    widget.reveal_puzzle();
    assert_eq!(widget.entries(), &once);
    assert!(widget.is_filled());
    assert!(widget.is_correct());
}

#[test]
fn test_letter_then_backspace_restores_cursor() {
    for direction in [Direction::Across, Direction::Down] {
        let mut widget = pets_widget();
        widget.select_hint(7, Direction::Across);
        widget.handle_key(Key::Arrow(Arrow::Right));
        if direction == Direction::Down {
            widget.handle_key(Key::Arrow(Arrow::Down));
        }
        let before = widget.cursor();

        widget.handle_key(Key::Letter('E'));
        assert_ne!(widget.cursor(), before);
        widget.handle_key(Key::Backspace);

        // backspace clears the cell the cursor had advanced to, then steps back
        let advanced = match direction {
            Direction::Across => Position::new(before.x + 1, before.y),
            Direction::Down => Position::new(before.x, before.y + 1),
        };
        assert_eq!(widget.entry(advanced), Square::Empty);
        assert_eq!(widget.entry(before), Square::Letter('E'));
        assert_eq!(widget.cursor(), before);
        assert_eq!(widget.direction(), direction);
    }
}

#[test]
fn test_across_overflow_wraps_to_next_row() {
    let mut widget = pets_widget();
    widget.handle_click(450.0, 50.0);
    assert_eq!(widget.cursor(), Position::new(4, 0));

    widget.handle_key(Key::Letter('O'));
    assert_eq!(widget.cursor(), Position::new(0, 1));
    assert_eq!(widget.direction(), Direction::Across);
}

#[test]
fn test_last_cell_overflow_turns_down() {
    let mut widget = pets_widget();
    widget.handle_click(450.0, 450.0);
    widget.handle_key(Key::Letter('S'));
    assert_eq!(widget.cursor(), Position::new(0, 0));
    assert_eq!(widget.direction(), Direction::Down);
}

#[test]
fn test_typing_whole_grid_across() {
    let mut widget = pets_widget();
    type_word(&mut widget, "catsoarenatentssnoreoases");

    assert!(widget.is_filled());
    assert!(widget.is_correct());
    // the final letter still saw an unfilled grid, so the cursor wrapped
    assert_eq!(widget.cursor(), Position::new(0, 0));
    assert_eq!(widget.direction(), Direction::Down);
}

#[test]
fn test_row_end_clamps_once_filled() {
    let mut widget = pets_widget();
    widget.reveal_puzzle();
    widget.select_hint(8, Direction::Across);
    type_word(&mut widget, "SNORE");
    assert_eq!(widget.cursor(), Position::new(4, 3));
    widget.handle_key(Key::Letter('E'));
    assert_eq!(widget.cursor(), Position::new(4, 3));
    assert_eq!(widget.direction(), Direction::Across);
}

#[test]
fn test_click_toggles_direction_in_place() {
    let mut widget = CrosswordWidget::new(5);
    widget.handle_click(250.0, 150.0);
    assert_eq!(widget.direction(), Direction::Across);

    widget.handle_click(250.0, 150.0);
    assert_eq!(widget.cursor(), Position::new(2, 1));
    assert_eq!(widget.direction(), Direction::Down);
}

#[test]
fn test_wrong_letter_then_fix() {
    let mut widget = pets_widget();
    widget.reveal_puzzle();
    assert!(widget.is_correct());

    widget.select_hint(9, Direction::Across);
    widget.handle_key(Key::Arrow(Arrow::Right));
    widget.handle_key(Key::Letter('Z'));
    assert!(widget.is_filled());
    assert!(!widget.is_correct());

    widget.handle_key(Key::Arrow(Arrow::Left));
    widget.handle_key(Key::Letter('A'));
    assert!(widget.is_filled());
    assert!(widget.is_correct());
}

#[test]
fn test_down_column_entry() {
    let mut widget = pets_widget();
    widget.select_hint(2, Direction::Down);
    type_word(&mut widget, "AREN");
    assert_eq!(widget.cursor(), Position::new(1, 4));
    widget.handle_key(Key::Letter('A'));
    // down never wraps
    assert_eq!(widget.cursor(), Position::new(1, 4));
    assert_eq!(widget.direction(), Direction::Down);

    let column: String = (0..5)
        .filter_map(|y| widget.entry(Position::new(1, y)).as_char())
        .collect();
    assert_eq!(column, "ARENA");
}

#[test]
fn test_enter_cycles_lines_and_directions() {
    let mut widget = pets_widget();
    for _ in 0..4 {
        widget.handle_key(Key::Enter);
    }
    assert_eq!(widget.cursor(), Position::new(0, 4));
    widget.handle_key(Key::Tab);
    assert_eq!(widget.cursor(), Position::new(0, 0));
    assert_eq!(widget.direction(), Direction::Down);

    widget.handle_key(Key::Enter);
    assert_eq!(widget.cursor(), Position::new(1, 0));
}

#[test]
fn test_blur_blocks_typing() {
    let mut widget = pets_widget();
    widget.handle_blur();
    type_word(&mut widget, "CAT");
    assert_eq!(widget.entries().empty_count(), 25);

    widget.handle_focus();
    type_word(&mut widget, "CAT");
    assert_eq!(widget.entries().empty_count(), 22);
}
