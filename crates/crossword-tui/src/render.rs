use crate::app::{App, ClueTarget, CELL_LAYOUT};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use crossword_core::{CellHighlight, Direction, Position};
use std::io;

/// Columns between the grid and the clue panel
const PANEL_GAP: u16 = 4;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(app.theme.bg),
        Clear(ClearType::All)
    )?;

    let size = app.widget.size() as u16;
    let grid_width = size * CELL_LAYOUT.cell_width as u16 + 1;
    let grid_height = size * CELL_LAYOUT.cell_height as u16 + 1;

    let start_x: u16 = 2;
    let start_y: u16 = if term_height > grid_height + 8 { 3 } else { 2 };

    // Clicks are measured from the top-left border corner
    app.grid_origin = (start_x, start_y);
    render_grid(stdout, app, start_x, start_y)?;

    let panel_x = start_x + grid_width + PANEL_GAP;
    let panel_width = term_width.saturating_sub(panel_x + 1);
    app.clue_targets = render_clues(stdout, app, panel_x, start_y, panel_width)?;

    render_status(stdout, app, start_x, start_y - 2, term_width)?;
    render_controls(stdout, app, start_x, start_y + grid_height + 1)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let size = app.widget.size();

    // +---+---+
    // |1  |2  |
    // | A | B |
    // +---+---+
    let separator = format!("+{}", "---+".repeat(size));

    for row in 0..size {
        let row_y = y + row as u16 * 3;
        execute!(
            stdout,
            MoveTo(x, row_y),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print(&separator)
        )?;

        for col in 0..size {
            let pos = Position::new(col, row);
            let cell_x = x + col as u16 * 4;
            render_cell(stdout, app, pos, cell_x, row_y + 1)?;
        }

        for line in 1..=2 {
            execute!(
                stdout,
                MoveTo(x + size as u16 * 4, row_y + line),
                SetBackgroundColor(theme.bg),
                SetForegroundColor(theme.border),
                Print("|")
            )?;
        }
    }

    execute!(
        stdout,
        MoveTo(x, y + size as u16 * 3),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        Print(&separator)
    )?;

    Ok(())
}

/// Draw one cell's two content lines, left border included
fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let widget = &app.widget;

    let bg = if widget.is_focused() {
        match widget.highlight(pos) {
            CellHighlight::Cursor => theme.selected_bg,
            CellHighlight::Word => theme.word_bg,
            CellHighlight::Plain => theme.bg,
        }
    } else {
        theme.bg
    };

    let number = widget
        .number_at(pos)
        .map(|n| format!("{:<3}", n))
        .unwrap_or_else(|| "   ".to_string());

    let letter_fg = if widget.is_correct() {
        theme.success
    } else {
        theme.letter
    };
    let letter = widget.entry(pos).as_char().unwrap_or(' ');

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        Print("|"),
        SetBackgroundColor(bg),
        SetForegroundColor(theme.number),
        Print(number),
        MoveTo(x, y + 1),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        Print("|"),
        SetBackgroundColor(bg),
        SetForegroundColor(letter_fg),
        Print(format!(" {} ", letter))
    )?;

    Ok(())
}

/// Draw the Across and Down lists; returns where each clue line landed
fn render_clues(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    width: u16,
) -> io::Result<Vec<ClueTarget>> {
    let theme = &app.theme;
    let widget = &app.widget;
    let mut targets = Vec::new();

    if width < 8 {
        return Ok(targets);
    }

    let mut line_y = y;
    for direction in [Direction::Across, Direction::Down] {
        execute!(
            stdout,
            MoveTo(x, line_y),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.info),
            Print(direction.as_str().to_uppercase())
        )?;
        line_y += 1;

        for (&number, clue) in widget.clues().for_direction(direction) {
            let text = truncate(&format!("{:>2}. {}", number, clue), width as usize);
            let is_current =
                direction == widget.direction() && number == widget.current_hint();
            let (fg, bg) = if is_current {
                (theme.fg, theme.word_bg)
            } else {
                (theme.fg, theme.bg)
            };

            execute!(
                stdout,
                MoveTo(x, line_y),
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(&text)
            )?;

            targets.push(ClueTarget {
                row: line_y,
                start: x,
                end: x + text.chars().count() as u16,
                number,
                direction,
            });
            line_y += 1;
        }
        line_y += 1;
    }

    Ok(targets)
}

/// "4 DOWN: clue text" for the entry under the cursor
fn render_status(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    term_width: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let widget = &app.widget;

    let clue = widget.current_clue().unwrap_or("");
    let line = format!(
        "{} {}: {}",
        widget.current_hint(),
        widget.direction().as_str().to_uppercase(),
        clue
    );
    let state = if widget.is_correct() {
        Some(("SOLVED", theme.success))
    } else if widget.is_filled() {
        Some(("CHECK", theme.error))
    } else {
        None
    };

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.fg),
        Print(truncate(&line, term_width.saturating_sub(x + 10) as usize))
    )?;

    if let Some((label, color)) = state {
        execute!(stdout, Print("  "), SetForegroundColor(color), Print(label))?;
    }

    if !widget.is_focused() {
        execute!(stdout, Print("  "), SetForegroundColor(theme.info), Print("(paused)"))?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    let controls = [
        ("A-Z", "Type"),
        ("Arrows", "Move"),
        ("Bksp", "Erase"),
        ("Enter/Tab", "Next line"),
        ("Click", "Select/turn"),
        ("Ctrl+R", "Reveal square"),
        ("Ctrl+G", "Reveal puzzle"),
        ("Esc", "Quit"),
    ];

    // Two rows of four
    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i % 4;
        let row = i / 4;
        let cx = x + col as u16 * 24;
        let cy = y + row as u16;

        execute!(
            stdout,
            MoveTo(cx, cy),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.key),
            Print(format!("{:>9}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_message(stdout: &mut io::Stdout, app: &App, msg: &str, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let padded = format!("  {}  ", msg);
    let x = term_width.saturating_sub(padded.len() as u16) / 2;

    let bg = if app.widget.is_correct() {
        theme.success
    } else {
        theme.selected_bg
    };

    execute!(
        stdout,
        MoveTo(x, 0),
        SetForegroundColor(Color::Black),
        SetBackgroundColor(bg),
        Print(&padded)
    )?;

    Ok(())
}

/// Cut `text` to at most `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}
