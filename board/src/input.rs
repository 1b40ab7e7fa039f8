//! Input model: pointer coordinates, modifier keys, and the recognized key set.
//!
//! The host translates raw DOM events into these types before handing them to
//! the controllers. Coordinates are viewport CSS pixels (`clientX`/`clientY`)
//! unless a doc comment says otherwise.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A point in viewport or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
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

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Modifier keys held during a keydown. Only shift changes board behavior
/// (the fast arrow step).
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
}

/// Keys the board reacts to while an image is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKey {
    Delete,
    Backspace,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl BoardKey {
    /// Map a browser `KeyboardEvent.key` name to a board key.
    ///
    /// Returns `None` for anything outside the recognized set.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "Delete" => Some(Self::Delete),
            "Backspace" => Some(Self::Backspace),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }

    /// Whether this key asks for the selected image to be removed.
    #[must_use]
    pub fn is_delete(self) -> bool {
        matches!(self, Self::Delete | Self::Backspace)
    }

    /// Unit direction `(dx, dy)` for arrow keys; `None` for delete keys.
    #[must_use]
    pub fn direction(self) -> Option<(f64, f64)> {
        match self {
            Self::ArrowUp => Some((0.0, -1.0)),
            Self::ArrowDown => Some((0.0, 1.0)),
            Self::ArrowLeft => Some((-1.0, 0.0)),
            Self::ArrowRight => Some((1.0, 0.0)),
            Self::Delete | Self::Backspace => None,
        }
    }
}
