use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use protocol::{Color, PlayerId, Position, Snapshot, SquareChange};

use crate::consts::CLICK_SLOP_PX;
use crate::grid::GridStore;
use crate::input::{Button, DragState, WheelDelta};
use crate::render;
use crate::viewport::{Point, ViewConfig, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// The player clicked an in-bounds cell; send the click intent upstream.
    SendClick(Position),
    /// Viewport state changed; a redraw is wanted before the next frame.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies. Every entry point leaves the state internally consistent
/// before returning; the single-threaded host never sees a partial update.
pub struct EngineCore {
    pub grid: GridStore,
    pub viewport: Viewport,
    pub config: ViewConfig,
    pub drag: DragState,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            grid: GridStore::new(),
            viewport: Viewport::default(),
            config: ViewConfig::default(),
            drag: DragState::Idle,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate board state from the server's login snapshot.
    pub fn apply_snapshot(
        &mut self,
        snapshot: Snapshot,
        self_id: PlayerId,
        spawn_point: Position,
        board_size: u32,
        cell_size: f64,
    ) {
        self.grid
            .apply_snapshot(snapshot, self_id, spawn_point, board_size, cell_size);
    }

    /// Apply a server broadcast: a batch of square changes.
    pub fn apply_changes(&mut self, changes: &[(Position, SquareChange)]) {
        self.grid.apply_changes(changes);
    }

    /// Apply a server broadcast: another player joined.
    pub fn apply_player_join(&mut self, id: PlayerId, color: Color) {
        self.grid.apply_player_join(id, color);
    }

    // --- Input events ---

    /// Primary button down starts a drag gesture; other buttons are ignored.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if button == Button::Primary {
            self.drag = DragState::Dragging { origin: screen, last_screen: screen, moved: false };
        }
        Vec::new()
    }

    /// Pointer movement pans the viewport while a drag is active.
    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let DragState::Dragging { origin, last_screen, moved } = self.drag else {
            return Vec::new();
        };

        self.viewport.pan(screen.x - last_screen.x, screen.y - last_screen.y);

        let travel = (screen.x - origin.x).hypot(screen.y - origin.y);
        self.drag = DragState::Dragging {
            origin,
            last_screen: screen,
            moved: moved || travel > CLICK_SLOP_PX,
        };
        vec![Action::RenderNeeded]
    }

    /// Primary button up ends the gesture. A press-release that never
    /// travelled past the click slop resolves to a cell click; out-of-range
    /// clicks are dropped silently.
    pub fn on_pointer_up(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let was_click = matches!(self.drag, DragState::Dragging { moved: false, .. });
        self.drag = DragState::Idle;

        if was_click {
            let cell = self
                .viewport
                .cell_at(screen, self.grid.cell_size(), self.grid.board_size());
            if let Some(pos) = cell {
                return vec![Action::SendClick(pos)];
            }
        }
        Vec::new()
    }

    /// The pointer left the render surface mid-gesture. Treated exactly like
    /// a release (minus the click), so a drag can never get stuck.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.drag = DragState::Idle;
        Vec::new()
    }

    /// Wheel scrolling zooms, anchored at the pointer. Scrolling up
    /// (negative `dy`) zooms in. Rejected zooms produce no actions.
    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta) -> Vec<Action> {
        if self.viewport.zoom_at(screen, delta.dy < 0.0, &self.config) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }
}

/// The full engine. Wraps [`EngineCore`] and owns the browser canvas element
/// and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the element has no usable 2D rendering context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen, button)
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen)
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen, delta)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(
            &self.ctx,
            &self.core.grid,
            &self.core.viewport,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }
}
