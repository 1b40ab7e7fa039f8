//! Right-click menu state, generic over the payload it was opened for.
//!
//! The menu is either hidden or visible at a screen position with a target
//! (an image index on the board, but any `T` works). The host forwards
//! window clicks and keydowns while the owning view is mounted; a click
//! outside the menu region or `Escape` dismisses it.

#[cfg(test)]
#[path = "context_menu_test.rs"]
mod context_menu_test;

use crate::input::Point;

/// Entries offered by the image context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Delete,
    Duplicate,
}

impl MenuItem {
    /// All items in display order.
    pub const ALL: [MenuItem; 2] = [MenuItem::Delete, MenuItem::Duplicate];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Duplicate => "Duplicate",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Delete => "\u{274c}",
            Self::Duplicate => "\u{1f4c4}",
        }
    }
}

/// Context-menu visibility, position and target.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu<T> {
    visible: bool,
    position: Point,
    target: Option<T>,
}

impl<T> Default for ContextMenu<T> {
    fn default() -> Self {
        Self { visible: false, position: Point::default(), target: None }
    }
}

impl<T> ContextMenu<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the menu at `at` for `target`. The host suppresses the native menu.
    pub fn show(&mut self, at: Point, target: T) {
        self.visible = true;
        self.position = at;
        self.target = Some(target);
    }

    /// Close the menu and drop its target. The last position is kept.
    pub fn hide(&mut self) {
        self.visible = false;
        self.target = None;
    }

    /// Window click: dismiss unless the click landed inside the menu.
    pub fn on_window_click(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.hide();
        }
    }

    /// Window keydown: `Escape` dismisses.
    pub fn on_window_key(&mut self, key: &str) {
        if key == "Escape" {
            self.hide();
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Rewrite the target in place, hiding the menu when `f` returns `None`.
    pub fn retarget(&mut self, f: impl FnOnce(T) -> Option<T>) {
        match self.target.take().and_then(f) {
            Some(next) => self.target = Some(next),
            None => self.hide(),
        }
    }
}
