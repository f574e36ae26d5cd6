#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use protocol::Position;

use crate::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_INTENSITY};

/// A point in either screen or board space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tunable viewport parameters.
///
/// Zoom bounds are configuration rather than constants; different
/// deployments want different clamp ranges.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    /// Smallest accepted scale.
    pub min_zoom: f64,
    /// Largest accepted scale.
    pub max_zoom: f64,
    /// Multiplicative zoom step per wheel event.
    pub zoom_intensity: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_intensity: DEFAULT_ZOOM_INTENSITY,
        }
    }
}

/// Pan/zoom viewport over the board.
///
/// `offset_x` / `offset_y` are in board display units and name the board
/// point that sits at the screen origin. `scale` is screen pixels per board
/// display unit and stays inside the configured zoom bounds at all times.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0 }
    }
}

impl Viewport {
    /// Convert a screen-space point (pixels) to board display coordinates.
    ///
    /// This is the single transform shared by click targeting and the render
    /// pass (whose canvas transform is the exact inverse).
    #[must_use]
    pub fn screen_to_board(&self, screen: Point) -> Point {
        Point {
            x: screen.x / self.scale + self.offset_x,
            y: screen.y / self.scale + self.offset_y,
        }
    }

    /// Convert a board display point to screen coordinates (pixels).
    #[must_use]
    pub fn board_to_screen(&self, board: Point) -> Point {
        Point {
            x: (board.x - self.offset_x) * self.scale,
            y: (board.y - self.offset_y) * self.scale,
        }
    }

    /// Pan by a screen-space delta. Board-space movement is inversely
    /// proportional to the scale, which keeps the panning feel constant
    /// regardless of zoom level.
    pub fn pan(&mut self, screen_dx: f64, screen_dy: f64) {
        self.offset_x -= screen_dx / self.scale;
        self.offset_y -= screen_dy / self.scale;
    }

    /// Zoom by one wheel step anchored at `pointer` (a screen point).
    ///
    /// Returns `false` without changing any state when the resulting scale
    /// would leave `[min_zoom, max_zoom]` — a hard clamp, so repeated wheel
    /// events at the boundary are no-ops. When accepted, the offset is
    /// recomputed so the board point under the pointer maps to the same
    /// screen pixel after the zoom.
    pub fn zoom_at(&mut self, pointer: Point, zoom_in: bool, config: &ViewConfig) -> bool {
        let factor = if zoom_in {
            1.0 + config.zoom_intensity
        } else {
            1.0 - config.zoom_intensity
        };
        let new_scale = self.scale * factor;
        if new_scale < config.min_zoom || new_scale > config.max_zoom {
            return false;
        }

        let anchor = self.screen_to_board(pointer);
        self.offset_x = anchor.x - (anchor.x - self.offset_x) / factor;
        self.offset_y = anchor.y - (anchor.y - self.offset_y) / factor;
        self.scale = new_scale;
        true
    }

    /// Resolve a screen point to the board cell under it, or `None` when the
    /// point falls outside the `board_size × board_size` grid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cell_at(&self, screen: Point, cell_size: f64, board_size: u32) -> Option<Position> {
        let board = self.screen_to_board(screen);
        let cx = (board.x / cell_size).floor();
        let cy = (board.y / cell_size).floor();
        let limit = f64::from(board_size);
        if cx < 0.0 || cy < 0.0 || cx >= limit || cy >= limit {
            return None;
        }
        Some(Position { x: cx as u32, y: cy as u32 })
    }
}
