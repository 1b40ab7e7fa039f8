//! DOM event to board-input mapping.

use board::input::{Modifiers, Point};
use wasm_bindgen::JsCast;

pub fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

pub fn key_modifiers(ev: &web_sys::KeyboardEvent) -> Modifiers {
    Modifiers { shift: ev.shift_key() }
}

/// Whether the event target is inside an element matching `selector`.
pub fn event_hits(ev: &web_sys::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Top-left corner of `el` in client coordinates.
pub fn element_origin(el: &web_sys::Element) -> Point {
    let rect = el.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

pub fn file_list_to_vec(files: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}
