#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn no_modifiers() -> Modifiers {
    Modifiers::default()
}

fn shift() -> Modifiers {
    Modifiers { shift: true }
}

fn core_with(urls: &[&str]) -> BoardCore {
    let mut core = BoardCore::new();
    for (i, url) in urls.iter().enumerate() {
        let offset = f64::from(u32::try_from(i).unwrap_or(0)) * 10.0;
        core.images.push(CanvasImage {
            url: (*url).to_owned(),
            x: offset,
            y: offset,
            z: Some(i64::try_from(i).unwrap_or(0) + 1),
        });
    }
    core
}

fn urls(core: &BoardCore) -> Vec<&str> {
    core.images.iter().map(|img| img.url.as_str()).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_core_is_empty_and_idle() {
    let core = BoardCore::new();
    assert!(core.images.is_empty());
    assert_eq!(core.selection, None);
    assert!(!core.drag.is_dragging());
    assert!(!core.menu.is_visible());
    assert_eq!(core.move_interval_ms, 16.0);
}

// =============================================================
// Gallery drop
// =============================================================

#[test]
fn gallery_drag_then_drop_places_one_image() {
    let mut core = BoardCore::new();
    core.on_gallery_drag_start("u");
    let index = core.on_canvas_drop(Some(pt(10.0, 20.0)), pt(110.0, 120.0));

    assert_eq!(index, Some(0));
    assert_eq!(core.images, vec![CanvasImage { url: "u".into(), x: 50.0, y: 50.0, z: Some(1) }]);
}

#[test]
fn drop_without_drag_start_adds_nothing() {
    let mut core = BoardCore::new();
    assert_eq!(core.on_canvas_drop(Some(pt(0.0, 0.0)), pt(1.0, 1.0)), None);
    assert!(core.images.is_empty());
}

// =============================================================
// Pointer drag
// =============================================================

#[test]
fn mouse_down_move_up_repositions_and_releases_listeners() {
    let mut core = core_with(&["a"]);
    core.images[0].x = 50.0;
    core.images[0].y = 50.0;

    assert_eq!(core.on_image_mouse_down(0, pt(70.0, 80.0)), vec![Action::AttachDragListeners]);
    assert!(core.is_selected(0));

    assert!(core.on_window_mouse_move(pt(200.0, 180.0)));
    assert_eq!(core.images[0].position(), pt(180.0, 150.0));

    assert_eq!(core.on_window_mouse_up(), vec![Action::DetachDragListeners]);
    assert!(!core.on_window_mouse_move(pt(0.0, 0.0)));
    assert_eq!(core.images[0].position(), pt(180.0, 150.0));
}

#[test]
fn mouse_down_on_second_image_selects_it() {
    let mut core = core_with(&["a", "b"]);
    core.on_image_mouse_down(1, pt(10.0, 10.0));
    assert_eq!(core.selection, Some(1));
    assert_eq!(core.selection.map(|i| core.images[i].url.as_str()), Some("b"));
}

#[test]
fn teardown_mid_drag_detaches_listeners() {
    let mut core = core_with(&["a"]);
    core.on_image_mouse_down(0, pt(0.0, 0.0));
    assert_eq!(core.teardown(), vec![Action::DetachDragListeners]);
    assert!(core.teardown().is_empty());
}

#[test]
fn teardown_when_idle_emits_nothing() {
    let mut core = BoardCore::new();
    assert!(core.teardown().is_empty());
}

#[test]
fn canvas_click_outside_images_deselects() {
    let mut core = core_with(&["a"]);
    core.selection = Some(0);
    core.on_canvas_click(true);
    assert_eq!(core.selection, Some(0));
    core.on_canvas_click(false);
    assert_eq!(core.selection, None);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn arrow_keys_move_selection_and_prevent_default() {
    let mut core = core_with(&["a"]);
    core.selection = Some(0);

    assert_eq!(core.on_key_down("ArrowUp", no_modifiers()), vec![Action::PreventDefault]);
    assert_eq!(core.images[0].y, -1.0);
    core.on_key_down("ArrowRight", shift());
    assert_eq!(core.images[0].x, 10.0);
}

#[test]
fn delete_key_removes_selected_image_and_clears_selection() {
    let mut core = core_with(&["a", "b", "c"]);
    core.selection = Some(1);

    assert_eq!(core.on_key_down("Delete", no_modifiers()), vec![Action::PreventDefault]);

    assert_eq!(urls(&core), vec!["a", "c"]);
    assert_eq!(core.selection, None);
}

#[test]
fn backspace_removes_selected_image() {
    let mut core = core_with(&["a"]);
    core.selection = Some(0);
    core.on_key_down("Backspace", no_modifiers());
    assert!(core.images.is_empty());
}

#[test]
fn keys_without_selection_are_not_prevented() {
    let mut core = core_with(&["a"]);
    assert!(core.on_key_down("Delete", no_modifiers()).is_empty());
    assert!(core.on_key_down("ArrowUp", no_modifiers()).is_empty());
    assert_eq!(core.images.len(), 1);
    assert_eq!(core.images[0].y, 0.0);
}

#[test]
fn escape_closes_menu() {
    let mut core = core_with(&["a"]);
    core.on_image_context_menu(0, pt(5.0, 5.0));
    assert!(core.on_key_down("Escape", no_modifiers()).is_empty());
    assert!(!core.menu.is_visible());
}

// =============================================================
// Deletion keeps indices valid
// =============================================================

#[test]
fn deleting_before_selection_shifts_it_down() {
    let mut core = core_with(&["a", "b", "c"]);
    core.selection = Some(2);
    core.delete_image(0);
    assert_eq!(core.selection, Some(1));
    assert_eq!(core.selection.map(|i| core.images[i].url.as_str()), Some("c"));
}

#[test]
fn deleting_after_selection_leaves_it() {
    let mut core = core_with(&["a", "b", "c"]);
    core.selection = Some(0);
    core.delete_image(2);
    assert_eq!(core.selection, Some(0));
}

#[test]
fn deleting_out_of_range_is_noop() {
    let mut core = core_with(&["a"]);
    core.selection = Some(0);
    assert!(core.delete_image(4).is_empty());
    assert_eq!(core.images.len(), 1);
    assert_eq!(core.selection, Some(0));
}

#[test]
fn deleting_dragged_image_releases_listeners() {
    let mut core = core_with(&["a", "b"]);
    core.on_image_mouse_down(1, pt(0.0, 0.0));
    assert_eq!(core.delete_image(1), vec![Action::DetachDragListeners]);
    assert!(!core.drag.is_dragging());
}

#[test]
fn deleting_menu_target_hides_menu() {
    let mut core = core_with(&["a", "b"]);
    core.on_image_context_menu(1, pt(0.0, 0.0));
    core.delete_image(1);
    assert!(!core.menu.is_visible());
    assert_eq!(core.menu.target(), None);
}

#[test]
fn deleting_before_menu_target_retargets() {
    let mut core = core_with(&["a", "b"]);
    core.on_image_context_menu(1, pt(0.0, 0.0));
    core.delete_image(0);
    assert!(core.menu.is_visible());
    assert_eq!(core.menu.target(), Some(&0));
}

// =============================================================
// Context menu
// =============================================================

#[test]
fn right_click_opens_menu_and_prevents_native_menu() {
    let mut core = core_with(&["a", "b"]);
    let actions = core.on_image_context_menu(1, pt(100.0, 150.0));
    assert_eq!(actions, vec![Action::PreventDefault]);
    assert!(core.menu.is_visible());
    assert_eq!(core.menu.position(), pt(100.0, 150.0));
    assert_eq!(core.menu.target(), Some(&1));
}

#[test]
fn right_click_on_stale_index_keeps_menu_closed() {
    let mut core = core_with(&["a"]);
    core.on_image_context_menu(3, pt(0.0, 0.0));
    assert!(!core.menu.is_visible());
}

#[test]
fn window_click_outside_menu_hides_it() {
    let mut core = core_with(&["a"]);
    core.on_image_context_menu(0, pt(0.0, 0.0));
    core.on_window_click(true);
    assert!(core.menu.is_visible());
    core.on_window_click(false);
    assert!(!core.menu.is_visible());
}

#[test]
fn menu_delete_removes_target() {
    let mut core = core_with(&["a", "b"]);
    core.on_image_context_menu(0, pt(0.0, 0.0));
    core.apply_menu_item(MenuItem::Delete);
    assert_eq!(urls(&core), vec!["b"]);
    assert!(!core.menu.is_visible());
}

#[test]
fn menu_duplicate_copies_target_on_top() {
    let mut core = core_with(&["a", "b"]);
    core.on_image_context_menu(0, pt(0.0, 0.0));
    core.apply_menu_item(MenuItem::Duplicate);

    assert_eq!(urls(&core), vec!["a", "b", "a"]);
    let copy = &core.images[2];
    assert_eq!(copy.position(), pt(20.0, 20.0));
    assert_eq!(copy.z, Some(3));
    assert_eq!(core.selection, Some(2));
    assert!(!core.menu.is_visible());
}

#[test]
fn menu_item_without_target_does_nothing() {
    let mut core = core_with(&["a"]);
    assert!(core.apply_menu_item(MenuItem::Delete).is_empty());
    assert_eq!(core.images.len(), 1);
}

#[test]
fn duplicate_out_of_range_returns_none() {
    let mut core = core_with(&["a"]);
    assert_eq!(core.duplicate_image(9), None);
    assert_eq!(core.images.len(), 1);
}

// =============================================================
// Draw order
// =============================================================

#[test]
fn draw_order_sorts_by_z_then_index() {
    let mut core = BoardCore::new();
    core.images = vec![
        CanvasImage { url: "top".into(), x: 0.0, y: 0.0, z: Some(9) },
        CanvasImage { url: "bottom".into(), x: 0.0, y: 0.0, z: None },
        CanvasImage { url: "mid".into(), x: 0.0, y: 0.0, z: Some(3) },
        CanvasImage { url: "bottom2".into(), x: 0.0, y: 0.0, z: Some(0) },
    ];
    let order: Vec<(usize, &str)> = core
        .draw_order()
        .into_iter()
        .map(|(i, img)| (i, img.url.as_str()))
        .collect();
    assert_eq!(order, vec![(1, "bottom"), (3, "bottom2"), (2, "mid"), (0, "top")]);
}
