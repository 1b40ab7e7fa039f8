//! Shared numeric constants for the board crate.

// ── Placement ───────────────────────────────────────────────────

/// Side length of the square footprint a dropped image occupies, in CSS pixels.
pub const IMAGE_SIZE: f64 = 100.0;

/// Offset applied on both axes when duplicating an image.
pub const DUPLICATE_OFFSET: f64 = 20.0;

// ── Keyboard ────────────────────────────────────────────────────

/// Arrow-key nudge distance without modifiers.
pub const NORMAL_MOVE_STEP: f64 = 1.0;

/// Arrow-key nudge distance while shift is held.
pub const FAST_MOVE_STEP: f64 = 10.0;

// ── Pointer ─────────────────────────────────────────────────────

/// Default throttle window for pointer moves (~60 Hz).
pub const THROTTLE_60_FPS_MS: f64 = 16.0;

// ── DOM regions ─────────────────────────────────────────────────

/// Selector matched against click targets to detect hits on placed images.
pub const CANVAS_IMAGE_SELECTOR: &str = ".canvas-image";

/// Selector matched against click targets to detect clicks inside the menu.
pub const CONTEXT_MENU_SELECTOR: &str = ".context-menu";
