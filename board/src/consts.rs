//! Shared numeric constants for the board crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Default lower bound on the viewport scale. Bounds are tunable through
/// [`crate::viewport::ViewConfig`]; these are only defaults.
pub const DEFAULT_MIN_ZOOM: f64 = 0.5;

/// Default upper bound on the viewport scale.
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;

/// Multiplicative zoom step per wheel event: `1 ± intensity`.
pub const DEFAULT_ZOOM_INTENSITY: f64 = 0.1;

// ── Board geometry ──────────────────────────────────────────────

/// Display-unit multiplier applied to the server's board size at login when
/// deriving the per-cell display size.
pub const CELL_SCALE: f64 = 20.0;

// ── Input ───────────────────────────────────────────────────────

/// Screen-space movement (pixels) below which a press-release still counts
/// as a click rather than a pan.
pub const CLICK_SLOP_PX: f64 = 3.0;
