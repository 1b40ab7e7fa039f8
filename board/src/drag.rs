//! Drag-and-drop: gallery drops and in-canvas repositioning.
//!
//! Two protocols share this controller. A native drag from the gallery
//! records the image URL on drag start and places a new image on drop,
//! centred under the cursor and stacked above everything else. A pointer drag
//! on a placed image tracks the grab offset and moves the image with the
//! pointer until mouseup; while it runs the host keeps window-level move/up
//! listeners attached, as requested through the returned [`Action`]s.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::IMAGE_SIZE;
use crate::engine::Action;
use crate::image::{CanvasImage, ImageUrl, next_z};
use crate::input::Point;

/// An in-progress reposition of a placed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    /// Index of the image being moved.
    pub index: usize,
    /// Pointer position minus image position at grab time.
    pub offset: Point,
}

/// Ephemeral drag session state.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    dragged_url: Option<ImageUrl>,
    active: Option<ActiveDrag>,
    listening: bool,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Gallery → canvas ---

    /// A gallery thumbnail started a native drag.
    pub fn on_drag_start(&mut self, url: impl Into<ImageUrl>) {
        self.dragged_url = Some(url.into());
    }

    /// Place the pending gallery image at the drop point.
    ///
    /// `canvas_origin` is the canvas element's bounding-box top-left in
    /// viewport coordinates; `None` when the canvas is not mounted. Returns
    /// the index of the new image, or `None` when there was nothing to drop.
    pub fn on_drop(
        &mut self,
        images: &mut Vec<CanvasImage>,
        canvas_origin: Option<Point>,
        pointer: Point,
    ) -> Option<usize> {
        let origin = canvas_origin?;
        let url = self.dragged_url.take()?;

        let local = pointer - origin;
        let half = IMAGE_SIZE / 2.0;
        images.push(CanvasImage {
            url,
            x: local.x - half,
            y: local.y - half,
            z: Some(next_z(images)),
        });
        Some(images.len() - 1)
    }

    // --- In-canvas repositioning ---

    /// Mousedown on the placed image at `index`.
    ///
    /// Cancels any pending gallery drag, selects the image and records the
    /// grab offset. An out-of-range `index` is ignored.
    pub fn start_dragging(
        &mut self,
        images: &[CanvasImage],
        selection: &mut Option<usize>,
        index: usize,
        pointer: Point,
    ) -> Vec<Action> {
        let Some(image) = images.get(index) else {
            return Vec::new();
        };

        self.dragged_url = None;
        self.active = Some(ActiveDrag { index, offset: pointer - image.position() });
        *selection = Some(index);

        if self.listening {
            return Vec::new();
        }
        self.listening = true;
        vec![Action::AttachDragListeners]
    }

    /// Pointer moved while listeners are attached. Returns whether an image moved.
    pub fn on_drag(&mut self, images: &mut [CanvasImage], pointer: Point) -> bool {
        let Some(drag) = self.active else {
            return false;
        };
        let Some(image) = images.get_mut(drag.index) else {
            return false;
        };
        image.set_position(pointer - drag.offset);
        true
    }

    /// End the reposition and release the window listeners.
    ///
    /// Safe to call at any time; only emits a detach when listeners are attached.
    pub fn stop_dragging(&mut self) -> Vec<Action> {
        self.active = None;
        if !self.listening {
            return Vec::new();
        }
        self.listening = false;
        vec![Action::DetachDragListeners]
    }

    /// Click on the canvas: deselect unless the click hit a placed image.
    pub fn clear_selection(selection: &mut Option<usize>, on_image: bool) {
        if !on_image {
            *selection = None;
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn dragged_url(&self) -> Option<&str> {
        self.dragged_url.as_deref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<ActiveDrag> {
        self.active
    }

    /// Whether window move/up listeners are currently expected to be attached.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Shift the active drag index after the image at `removed` was deleted.
    ///
    /// Ends the drag when the dragged image itself was removed.
    pub fn on_image_removed(&mut self, removed: usize) -> Vec<Action> {
        let Some(drag) = self.active else {
            return Vec::new();
        };
        if drag.index == removed {
            return self.stop_dragging();
        }
        if drag.index > removed {
            self.active = Some(ActiveDrag { index: drag.index - 1, ..drag });
        }
        Vec::new()
    }
}
