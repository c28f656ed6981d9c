//! Canvas rendering for the crossword grid

use crate::theme::Theme;
use crossword_core::{CellHighlight, CrosswordWidget, Position};
use web_sys::CanvasRenderingContext2d;

/// Font stack for numbers and letters; the page is expected to load the face
const FONT_FAMILY: &str = "'Basic-Sans', 'Helvetica Neue', Arial, sans-serif";

/// Clue number height relative to the cell
const NUMBER_SCALE: f64 = 0.32;
/// Letter height relative to the cell
const LETTER_SCALE: f64 = 0.75;

/// Paint the whole widget
pub fn render_widget(ctx: &CanvasRenderingContext2d, widget: &CrosswordWidget, theme: &Theme) {
    let layout = widget.layout();
    let (width, height) = layout.extent(widget.size());

    // Clear background
    ctx.set_fill_style_str(&theme.background.as_css());
    ctx.fill_rect(0.0, 0.0, width, height);

    for pos in widget.entries().positions() {
        render_cell(ctx, widget, theme, pos);
    }
}

fn render_cell(
    ctx: &CanvasRenderingContext2d,
    widget: &CrosswordWidget,
    theme: &Theme,
    pos: Position,
) {
    let layout = widget.layout();
    let (cell_x, cell_y) = layout.cell_origin(pos);
    let (cell_w, cell_h) = (layout.cell_width, layout.cell_height);

    let bg = match widget.highlight(pos) {
        CellHighlight::Cursor => theme.cursor_bg,
        CellHighlight::Word => theme.word_bg,
        CellHighlight::Plain => theme.background,
    };
    ctx.set_fill_style_str(&bg.as_css());
    ctx.fill_rect(cell_x, cell_y, cell_w, cell_h);

    ctx.set_stroke_style_str(&theme.border.as_css());
    ctx.stroke_rect(cell_x, cell_y, cell_w, cell_h);

    if let Some(number) = widget.number_at(pos) {
        ctx.set_fill_style_str(&theme.number.as_css());
        ctx.set_font(&format!("{}px {}", (cell_h * NUMBER_SCALE).round(), FONT_FAMILY));
        ctx.set_text_align("left");
        ctx.set_text_baseline("top");
        let _ = ctx.fill_text(&number.to_string(), cell_x + 2.0, cell_y + 2.0);
    }

    if let Some(letter) = widget.entry(pos).as_char() {
        let color = if widget.is_correct() {
            theme.solved_letter
        } else {
            theme.letter
        };
        ctx.set_fill_style_str(&color.as_css());
        ctx.set_font(&format!("{}px {}", (cell_h * LETTER_SCALE).round(), FONT_FAMILY));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(
            &letter.to_string(),
            cell_x + cell_w / 2.0,
            cell_y + cell_h * 0.7,
        );
    }
}
