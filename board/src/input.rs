//! Input model: mouse buttons, wheel deltas, and the drag state machine.
//!
//! `DragState` is the active gesture tracked between pointer-down and
//! pointer-up. It carries the context needed to compute incremental pan
//! deltas and to tell a click (press-release in place) apart from a pan
//! (press-move-release) when the pointer comes back up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::viewport::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down, i.e. zoom out).
    pub dy: f64,
}

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The primary button is held and the view pans with the pointer.
    Dragging {
        /// Screen position where the button went down, used to measure
        /// total travel for the click-vs-pan decision.
        origin: Point,
        /// Screen position of the previous pointer event, used to compute
        /// the incremental pan delta.
        last_screen: Point,
        /// Whether the pointer has travelled past the click slop.
        moved: bool,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}
