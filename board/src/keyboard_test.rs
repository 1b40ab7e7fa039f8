#![allow(clippy::float_cmp)]

use super::*;

fn one_image() -> Vec<CanvasImage> {
    vec![CanvasImage { url: "test.jpg".into(), x: 0.0, y: 0.0, z: Some(0) }]
}

fn shift() -> Modifiers {
    Modifiers { shift: true }
}

fn press(images: &mut [CanvasImage], selection: Option<usize>, key: &str, modifiers: Modifiers) -> KeyOutcome {
    KeyboardController::default().on_key_down(images, selection, key, modifiers)
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_requests_removal_of_selection() {
    let mut images = one_image();
    assert_eq!(press(&mut images, Some(0), "Delete", Modifiers::default()), KeyOutcome::Delete(0));
    assert_eq!(images.len(), 1);
}

#[test]
fn backspace_requests_removal_of_selection() {
    let mut images = one_image();
    assert_eq!(press(&mut images, Some(0), "Backspace", Modifiers::default()), KeyOutcome::Delete(0));
}

#[test]
fn delete_reports_the_selected_index() {
    let mut images = vec![
        CanvasImage::new("a", 0.0, 0.0),
        CanvasImage::new("b", 0.0, 0.0),
        CanvasImage::new("c", 0.0, 0.0),
    ];
    assert_eq!(press(&mut images, Some(2), "Delete", Modifiers::default()), KeyOutcome::Delete(2));
}

// =============================================================
// Arrows
// =============================================================

#[test]
fn arrow_up_moves_up_one() {
    let mut images = one_image();
    assert_eq!(press(&mut images, Some(0), "ArrowUp", Modifiers::default()), KeyOutcome::Moved(0));
    assert_eq!(images[0].y, -1.0);
    assert_eq!(images[0].x, 0.0);
}

#[test]
fn arrow_down_with_shift_moves_down_ten() {
    let mut images = one_image();
    press(&mut images, Some(0), "ArrowDown", shift());
    assert_eq!(images[0].y, 10.0);
}

#[test]
fn arrow_left_moves_left_one() {
    let mut images = one_image();
    press(&mut images, Some(0), "ArrowLeft", Modifiers::default());
    assert_eq!(images[0].x, -1.0);
    assert_eq!(images[0].y, 0.0);
}

#[test]
fn arrow_right_with_shift_moves_right_ten() {
    let mut images = one_image();
    press(&mut images, Some(0), "ArrowRight", shift());
    assert_eq!(images[0].x, 10.0);
}

#[test]
fn arrows_accumulate() {
    let mut images = one_image();
    press(&mut images, Some(0), "ArrowRight", Modifiers::default());
    press(&mut images, Some(0), "ArrowRight", Modifiers::default());
    press(&mut images, Some(0), "ArrowUp", shift());
    assert_eq!(images[0].x, 2.0);
    assert_eq!(images[0].y, -10.0);
}

#[test]
fn only_the_selected_image_moves() {
    let mut images = vec![CanvasImage::new("a", 0.0, 0.0), CanvasImage::new("b", 5.0, 5.0)];
    press(&mut images, Some(1), "ArrowDown", Modifiers::default());
    assert_eq!(images[0].y, 0.0);
    assert_eq!(images[1].y, 6.0);
}

#[test]
fn custom_steps_are_respected() {
    let mut images = one_image();
    let controller = KeyboardController { normal_step: 2.0, fast_step: 25.0 };
    controller.on_key_down(&mut images, Some(0), "ArrowLeft", Modifiers::default());
    controller.on_key_down(&mut images, Some(0), "ArrowUp", shift());
    assert_eq!(images[0].x, -2.0);
    assert_eq!(images[0].y, -25.0);
}

// =============================================================
// Guards
// =============================================================

#[test]
fn no_selection_ignores_recognized_keys() {
    let mut images = one_image();
    for key in ["Delete", "Backspace", "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight"] {
        let outcome = press(&mut images, None, key, shift());
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert!(!outcome.prevents_default());
    }
    assert_eq!(images, one_image());
}

#[test]
fn unrelated_keys_are_ignored() {
    let mut images = one_image();
    let outcome = press(&mut images, Some(0), "Enter", Modifiers::default());
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert!(!outcome.prevents_default());
    assert_eq!(images[0].x, 0.0);
    assert_eq!(images[0].y, 0.0);
}

#[test]
fn stale_selection_is_ignored() {
    let mut images = one_image();
    assert_eq!(press(&mut images, Some(3), "ArrowUp", Modifiers::default()), KeyOutcome::Ignored);
    assert_eq!(press(&mut images, Some(3), "Delete", Modifiers::default()), KeyOutcome::Ignored);
}

#[test]
fn handled_keys_prevent_default() {
    assert!(KeyOutcome::Moved(0).prevents_default());
    assert!(KeyOutcome::Delete(0).prevents_default());
}
