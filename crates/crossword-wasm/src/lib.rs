//! WebAssembly crossword widget
//!
//! Binds a [`CrosswordWidget`] to a canvas element. The page forwards
//! `click`, `keydown`, `focus` and `blur` events to the exported handlers;
//! every command repaints the canvas and notifies JavaScript subscribers.

use crossword_core::{
    parse_puzzle_json, CrosswordWidget, Direction, Key, ListenerId, WidgetSnapshot, DEFAULT_SIZE,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent,
};

mod render;
mod theme;


pub use theme::Theme;

// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger(cfg!(debug_assertions));
}

fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        match console_log::init_with_level(level) {
            Ok(()) => log::info!("console logger initialized at {level:?} level"),
            Err(e) => {
                let msg = format!("failed to initialize console_log: {}", e);
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = debug_enabled;
}

/// Convert a snapshot to a plain JS object (maps become objects, not `Map`s)
pub fn snapshot_to_js(snapshot: &WidgetSnapshot) -> Result<JsValue, serde_wasm_bindgen::Error> {
    snapshot.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn js_error(msg: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&msg.to_string()).into()
}

/// The crossword bound to a canvas
#[wasm_bindgen]
pub struct CrosswordGame {
    widget: CrosswordWidget,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: Theme,
}

#[wasm_bindgen]
impl CrosswordGame {
    /// Create a widget drawing into the canvas with id `canvas_id`.
    ///
    /// Shows the built-in sample puzzle of `size` (default 5) until a
    /// puzzle is loaded.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, size: Option<usize>) -> Result<CrosswordGame, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("Canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        // Focusable so it receives focus/blur and keeps keyboard input
        let html_element: &HtmlElement = canvas.as_ref();
        html_element.set_tab_index(1);

        let game = CrosswordGame {
            widget: CrosswordWidget::new(size.unwrap_or(DEFAULT_SIZE)),
            canvas,
            ctx,
            theme: Theme::default(),
        };

        game.resize_canvas();
        game.render();
        Ok(game)
    }

    /// Load a puzzle: a `{grid, clues}` object or a generator response
    #[wasm_bindgen(js_name = loadPuzzle)]
    pub fn load_puzzle(&mut self, data: JsValue) -> Result<(), JsValue> {
        let json: String = js_sys::JSON::stringify(&data)?.into();
        self.load_puzzle_json(&json)
    }

    /// Load a puzzle from JSON text
    #[wasm_bindgen(js_name = loadPuzzleJson)]
    pub fn load_puzzle_json(&mut self, json: &str) -> Result<(), JsValue> {
        let puzzle = parse_puzzle_json(json).map_err(js_error)?;
        self.widget.load_puzzle(puzzle);
        self.resize_canvas();
        self.render();
        Ok(())
    }

    /// Clue texts as `{across: {"1": ...}, down: {...}}`
    #[wasm_bindgen(js_name = getClues)]
    pub fn get_clues(&self) -> Result<JsValue, JsValue> {
        // Numeric map keys go through JSON to come out as object keys
        let json = serde_json::to_string(self.widget.clues()).map_err(js_error)?;
        js_sys::JSON::parse(&json)
    }

    #[wasm_bindgen(js_name = getCurrentHint)]
    pub fn get_current_hint(&self) -> u32 {
        self.widget.current_hint()
    }

    #[wasm_bindgen(js_name = getDirection)]
    pub fn get_direction(&self) -> String {
        self.widget.direction().to_string()
    }

    #[wasm_bindgen(js_name = getIsFilled)]
    pub fn get_is_filled(&self) -> bool {
        self.widget.is_filled()
    }

    #[wasm_bindgen(js_name = getIsCorrect)]
    pub fn get_is_correct(&self) -> bool {
        self.widget.is_correct()
    }

    /// Full widget state as a plain object
    #[wasm_bindgen(js_name = getSnapshot)]
    pub fn get_snapshot(&self) -> Result<JsValue, JsValue> {
        snapshot_to_js(&self.widget.snapshot()).map_err(JsValue::from)
    }

    /// Canvas `click` handler
    #[wasm_bindgen(js_name = handleClick)]
    pub fn handle_click(&mut self, event: &MouseEvent) {
        let rect = self.canvas.get_bounding_client_rect();
        let px = f64::from(event.client_x()) - rect.left();
        let py = f64::from(event.client_y()) - rect.top();

        let was_active = self.widget.is_active();
        self.widget.handle_click(px, py);
        if !was_active {
            self.focus_canvas();
        }
        self.render();
    }

    /// `keydown` handler. Returns `true` if the key was used; its default
    /// action is then prevented so Tab and the arrows stay on the grid.
    #[wasm_bindgen(js_name = handleKeyPress)]
    pub fn handle_key_press(&mut self, event: &KeyboardEvent) -> bool {
        // Leave browser shortcuts alone
        if event.ctrl_key() || event.meta_key() || event.alt_key() {
            return false;
        }

        let handled = self.widget.handle_key(Key::from_name(&event.key()));
        if handled {
            event.prevent_default();
            self.render();
        }
        handled
    }

    /// Canvas `focus` handler
    #[wasm_bindgen(js_name = handleFocus)]
    pub fn handle_focus(&mut self) {
        self.widget.handle_focus();
        self.render();
    }

    /// Canvas `blur` handler
    #[wasm_bindgen(js_name = handleBlur)]
    pub fn handle_blur(&mut self) {
        self.widget.handle_blur();
        self.render();
    }

    /// Jump to a clue; `direction` is `"across"` or `"down"`.
    ///
    /// Returns `false` if no entry carries that number.
    #[wasm_bindgen(js_name = selectHint)]
    pub fn select_hint(&mut self, number: u32, direction: &str) -> Result<bool, JsValue> {
        let direction: Direction = direction.parse().map_err(js_error)?;
        let selected = self.widget.select_hint(number, direction);
        if selected {
            self.focus_canvas();
            self.render();
        }
        Ok(selected)
    }

    #[wasm_bindgen(js_name = revealSquare)]
    pub fn reveal_square(&mut self) {
        self.widget.reveal_square();
        self.render();
    }

    #[wasm_bindgen(js_name = revealPuzzle)]
    pub fn reveal_puzzle(&mut self) {
        self.widget.reveal_puzzle();
        self.render();
    }

    /// Call `callback(snapshot)` after every change. Returns an id for
    /// [`unsubscribe`](Self::unsubscribe).
    ///
    /// The callback runs inside the command that caused the change, so it
    /// must read the snapshot rather than call back into this object.
    pub fn subscribe(&mut self, callback: js_sys::Function) -> u32 {
        self.widget
            .subscribe(move |snapshot| {
                let value = match snapshot_to_js(snapshot) {
                    Ok(value) => value,
                    Err(e) => {
                        log::warn!("could not convert snapshot: {}", e);
                        return;
                    }
                };
                if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                    log::warn!("subscriber threw: {:?}", e);
                }
            })
            .get()
    }

    /// Remove a subscriber. Returns `false` for an unknown id.
    pub fn unsubscribe(&mut self, id: u32) -> bool {
        self.widget.unsubscribe(ListenerId::from_raw(id))
    }

    /// Set the color theme (`"classic"` or `"dark"`)
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, name: &str) {
        self.theme = Theme::from_name(name);
        self.render();
    }

    /// Match the canvas resolution to the grid and the device pixel ratio
    fn resize_canvas(&self) {
        let (width, height) = self.widget.layout().extent(self.widget.size());

        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);

        // Set actual canvas resolution (scaled by dpr)
        self.canvas.set_width((width * dpr) as u32);
        self.canvas.set_height((height * dpr) as u32);

        // Set CSS display size (logical pixels)
        let html_element: &HtmlElement = self.canvas.as_ref();
        let style = html_element.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", height));

        // Reset and scale context to account for dpr
        let _ = self.ctx.reset_transform();
        let _ = self.ctx.scale(dpr, dpr);
    }

    /// Give the canvas keyboard focus once the current call has returned.
    ///
    /// `focus()` dispatches the `focus` event synchronously, and the page
    /// routes that back into `handleFocus` while `self` is still borrowed.
    /// The widget already counts itself focused, so the late event is a
    /// no-op.
    fn focus_canvas(&self) {
        let canvas: HtmlElement = self.canvas.clone().unchecked_into();
        let focus = Closure::once_into_js(move || {
            if let Err(e) = canvas.focus() {
                log::debug!("canvas focus failed: {:?}", e);
            }
        });

        let scheduled = web_sys::window()
            .ok_or_else(|| JsValue::from_str("No window"))
            .and_then(|w| w.set_timeout_with_callback(focus.unchecked_ref()));
        if let Err(e) = scheduled {
            log::debug!("could not schedule canvas focus: {:?}", e);
        }
    }

    /// Render the widget to canvas
    fn render(&self) {
        render::render_widget(&self.ctx, &self.widget, &self.theme);
    }
}
