//! Rendering: draws the full board grid to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of the
//! grid store and viewport and produces pixels — it does not mutate any
//! application state.
//!
//! The full grid is redrawn every frame; no dirty tracking. Board sides are
//! tens to low hundreds of cells, so the simple pass is fast enough.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use protocol::{Color, Position};

use crate::grid::GridStore;
use crate::viewport::Viewport;

/// Fill color for cells no player owns.
const UNCLAIMED_FILL: &str = "#3498db";

/// Fill color for a cell whose owner is missing from the registry.
const DESYNC_FILL: &str = "#7f8c8d";

/// Color of the number drawn on owned cells.
const NUMBER_FILL: &str = "#ffffff";

/// Gap in display units subtracted from each cell's fill rectangle so
/// adjacent cells stay visually separated at any zoom.
const CELL_INSET: f64 = 2.0;

/// Draw the full board: every cell of the `board_size × board_size` grid.
///
/// `viewport_w` and `viewport_h` are the canvas dimensions in pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    grid: &GridStore,
    viewport: &Viewport,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    ctx.save();
    // Inverse of Viewport::screen_to_board: scale, then translate by -offset.
    ctx.scale(viewport.scale, viewport.scale)?;
    ctx.translate(-viewport.offset_x, -viewport.offset_y)?;

    let cell = grid.cell_size();
    let inset = CELL_INSET.min(cell * 0.1);
    let fill_side = cell - inset;

    for x in 0..grid.board_size() {
        for y in 0..grid.board_size() {
            let px = f64::from(x) * cell;
            let py = f64::from(y) * cell;

            match grid.square_at(Position { x, y }) {
                Some(square) => {
                    let fill = grid
                        .player_color(square.owner)
                        .map_or_else(|| DESYNC_FILL.to_owned(), css_color);
                    ctx.set_fill_style_str(&fill);
                    ctx.fill_rect(px, py, fill_side, fill_side);
                    draw_number(ctx, square.number, px, py, cell)?;
                }
                None => {
                    ctx.set_fill_style_str(UNCLAIMED_FILL);
                    ctx.fill_rect(px, py, fill_side, fill_side);
                }
            }
        }
    }

    ctx.restore();
    Ok(())
}

fn draw_number(
    ctx: &CanvasRenderingContext2d,
    number: u8,
    px: f64,
    py: f64,
    cell: f64,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(NUMBER_FILL);
    ctx.set_font(&format!("{:.0}px Arial", cell * 0.5));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&number.to_string(), px + cell * 0.5, py + cell * 0.5)
}

fn css_color((r, g, b): Color) -> String {
    format!("rgb({r}, {g}, {b})")
}
