//! Keyboard control of the selected image.
//!
//! Arrow keys nudge the selection by a small step (a larger one with shift);
//! `Delete` and `Backspace` ask the collection owner to remove it. Nothing
//! happens, and the browser default is left alone, while nothing is selected.

#[cfg(test)]
#[path = "keyboard_test.rs"]
mod keyboard_test;

use crate::consts::{FAST_MOVE_STEP, NORMAL_MOVE_STEP};
use crate::image::CanvasImage;
use crate::input::{BoardKey, Modifiers};

/// Result of routing one keydown through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not for us: no selection, unknown key, or a stale index.
    Ignored,
    /// The selected image at this index was nudged.
    Moved(usize),
    /// The owner should delete the image at this index.
    Delete(usize),
}

impl KeyOutcome {
    /// Whether the host must call `preventDefault` on the event.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Step sizes for arrow-key nudging.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardController {
    pub normal_step: f64,
    pub fast_step: f64,
}

impl Default for KeyboardController {
    fn default() -> Self {
        Self { normal_step: NORMAL_MOVE_STEP, fast_step: FAST_MOVE_STEP }
    }
}

impl KeyboardController {
    /// Handle a keydown named `key` for the current selection.
    pub fn on_key_down(
        &self,
        images: &mut [CanvasImage],
        selection: Option<usize>,
        key: &str,
        modifiers: Modifiers,
    ) -> KeyOutcome {
        let Some(index) = selection else {
            return KeyOutcome::Ignored;
        };
        let Some(key) = BoardKey::parse(key) else {
            return KeyOutcome::Ignored;
        };
        let Some(image) = images.get_mut(index) else {
            return KeyOutcome::Ignored;
        };

        let Some((dx, dy)) = key.direction() else {
            return KeyOutcome::Delete(index);
        };
        let step = if modifiers.shift { self.fast_step } else { self.normal_step };
        image.x += dx * step;
        image.y += dy * step;
        KeyOutcome::Moved(index)
    }
}
