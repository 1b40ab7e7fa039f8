use crate::consts::{DUPLICATE_OFFSET, THROTTLE_60_FPS_MS};
use crate::context_menu::{ContextMenu, MenuItem};
use crate::drag::DragController;
use crate::image::{CanvasImage, ImageUrl, next_z};
use crate::input::{Modifiers, Point};
use crate::keyboard::{KeyOutcome, KeyboardController};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Call `preventDefault` on the triggering event.
    PreventDefault,
    /// Attach window `mousemove` (throttled) and `mouseup` listeners.
    AttachDragListeners,
    /// Remove the listeners attached by `AttachDragListeners`.
    DetachDragListeners,
}

/// Board state owned by the hosting view: the placed images, the selection
/// cell and the controllers that mutate them.
///
/// Free of DOM types so it can be tested without WASM/browser dependencies.
/// The host answers DOM queries (bounding boxes, `closest()` hits) and passes
/// plain values in.
#[derive(Debug, Clone)]
pub struct BoardCore {
    pub images: Vec<CanvasImage>,
    pub selection: Option<usize>,
    pub drag: DragController,
    pub keyboard: KeyboardController,
    pub menu: ContextMenu<usize>,
    /// Throttle window applied by the host to window `mousemove`.
    pub move_interval_ms: f64,
}

impl Default for BoardCore {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            selection: None,
            drag: DragController::new(),
            keyboard: KeyboardController::default(),
            menu: ContextMenu::new(),
            move_interval_ms: THROTTLE_60_FPS_MS,
        }
    }
}

impl BoardCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Collection ---

    /// Remove the image at `index` and keep every index that refers into the
    /// collection valid: selection, active drag and menu target.
    pub fn delete_image(&mut self, index: usize) -> Vec<Action> {
        if index >= self.images.len() {
            return Vec::new();
        }
        self.images.remove(index);

        self.selection = match self.selection {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        self.menu.retarget(|t| match t {
            t if t == index => None,
            t if t > index => Some(t - 1),
            t => Some(t),
        });
        self.drag.on_image_removed(index)
    }

    /// Append a copy of the image at `index`, nudged and stacked on top, and
    /// select it. Returns the new index.
    pub fn duplicate_image(&mut self, index: usize) -> Option<usize> {
        let source = self.images.get(index)?;
        let copy = CanvasImage {
            url: source.url.clone(),
            x: source.x + DUPLICATE_OFFSET,
            y: source.y + DUPLICATE_OFFSET,
            z: Some(next_z(&self.images)),
        };
        self.images.push(copy);
        let new_index = self.images.len() - 1;
        self.selection = Some(new_index);
        Some(new_index)
    }

    /// Images in draw order (ascending z, insertion order for ties) with
    /// their collection indices.
    #[must_use]
    pub fn draw_order(&self) -> Vec<(usize, &CanvasImage)> {
        let mut ordered: Vec<(usize, &CanvasImage)> = self.images.iter().enumerate().collect();
        ordered.sort_by_key(|(i, img)| (img.z_index(), *i));
        ordered
    }

    // --- Gallery ---

    pub fn on_gallery_drag_start(&mut self, url: impl Into<ImageUrl>) {
        self.drag.on_drag_start(url);
    }

    /// Native drop on the canvas. See [`DragController::on_drop`].
    pub fn on_canvas_drop(&mut self, canvas_origin: Option<Point>, pointer: Point) -> Option<usize> {
        self.drag.on_drop(&mut self.images, canvas_origin, pointer)
    }

    // --- Pointer ---

    pub fn on_image_mouse_down(&mut self, index: usize, pointer: Point) -> Vec<Action> {
        self.drag
            .start_dragging(&self.images, &mut self.selection, index, pointer)
    }

    /// Window `mousemove` after throttling by the host.
    pub fn on_window_mouse_move(&mut self, pointer: Point) -> bool {
        self.drag.on_drag(&mut self.images, pointer)
    }

    pub fn on_window_mouse_up(&mut self) -> Vec<Action> {
        self.drag.stop_dragging()
    }

    /// Click on the canvas surface; `target_in_image` is whether the target
    /// is inside an element matching [`crate::consts::CANVAS_IMAGE_SELECTOR`].
    pub fn on_canvas_click(&mut self, target_in_image: bool) {
        DragController::clear_selection(&mut self.selection, target_in_image);
    }

    // --- Context menu ---

    /// Right-click on the placed image at `index`.
    pub fn on_image_context_menu(&mut self, index: usize, at: Point) -> Vec<Action> {
        if index < self.images.len() {
            self.menu.show(at, index);
        }
        vec![Action::PreventDefault]
    }

    /// Window click; `target_in_menu` is whether the target is inside an
    /// element matching [`crate::consts::CONTEXT_MENU_SELECTOR`].
    pub fn on_window_click(&mut self, target_in_menu: bool) {
        self.menu.on_window_click(target_in_menu);
    }

    /// Run a menu entry against the menu's target, then close the menu.
    pub fn apply_menu_item(&mut self, item: MenuItem) -> Vec<Action> {
        let Some(&index) = self.menu.target() else {
            return Vec::new();
        };
        self.menu.hide();
        match item {
            MenuItem::Delete => self.delete_image(index),
            MenuItem::Duplicate => {
                self.duplicate_image(index);
                Vec::new()
            }
        }
    }

    // --- Keyboard ---

    /// Window keydown: menu dismissal first, then selection control.
    pub fn on_key_down(&mut self, key: &str, modifiers: Modifiers) -> Vec<Action> {
        self.menu.on_window_key(key);

        let outcome = self
            .keyboard
            .on_key_down(&mut self.images, self.selection, key, modifiers);
        let mut actions = Vec::new();
        if outcome.prevents_default() {
            actions.push(Action::PreventDefault);
        }
        if let KeyOutcome::Delete(index) = outcome {
            actions.extend(self.delete_image(index));
        }
        actions
    }

    // --- Lifecycle ---

    /// The hosting view is going away: end any drag so its listeners are released.
    pub fn teardown(&mut self) -> Vec<Action> {
        self.menu.hide();
        self.drag.stop_dragging()
    }

    // --- Queries ---

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection == Some(index)
    }
}
