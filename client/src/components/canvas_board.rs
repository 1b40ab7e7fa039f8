//! Canvas surface: placed images, drop target, pointer and keyboard wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every transition happens in `board::engine::BoardCore`. This component
//! answers the DOM questions the core cannot (canvas origin, `closest()`
//! hits), feeds it plain inputs and executes the `Action`s it returns.
//!
//! LISTENER LIFETIMES
//! ==================
//! Window `keydown` and `click` listeners live as long as the component.
//! Window `mousemove` (throttled) and `mouseup` live for a single in-canvas
//! drag and are attached/detached only through actions.

use board::context_menu::MenuItem;
use board::engine::BoardCore;
use board::image::CanvasImage;
use leptos::prelude::*;

use crate::components::context_menu::ImageContextMenu;

#[cfg(feature = "csr")]
use board::engine::Action;
#[cfg(feature = "csr")]
use crate::util::listeners::ListenerSlot;

/// A `mousemove`/`mouseup` or `keydown`/`click` registration pair.
#[cfg(feature = "csr")]
type ListenerPair = (WindowListenerHandle, WindowListenerHandle);

#[cfg(feature = "csr")]
type DragSlot = StoredValue<ListenerSlot<ListenerPair>, LocalStorage>;

/// Execute actions returned by the board core. `ev` is the DOM event that
/// produced them, if any.
#[cfg(feature = "csr")]
fn process_actions(actions: &[Action], ev: Option<&web_sys::Event>, board: RwSignal<BoardCore>, drag: DragSlot) {
    for action in actions {
        match action {
            Action::PreventDefault => {
                if let Some(ev) = ev {
                    ev.prevent_default();
                }
            }
            Action::AttachDragListeners => {
                drag.update_value(|slot| slot.attach(|| attach_drag_listeners(board, drag)));
            }
            Action::DetachDragListeners => {
                drag.update_value(ListenerSlot::detach);
            }
        }
    }
}

#[cfg(feature = "csr")]
fn attach_drag_listeners(board: RwSignal<BoardCore>, drag: DragSlot) -> ListenerPair {
    use std::cell::RefCell;

    use board::input::Point;
    use board::throttle::throttle;

    use crate::util::dom_input::mouse_point;

    let interval = board.with_untracked(|b| b.move_interval_ms);
    let moved = RefCell::new(throttle(
        move |pointer: Point| {
            board.maybe_update(|b| b.on_window_mouse_move(pointer));
        },
        interval,
    ));

    let mouse_move = window_event_listener(leptos::ev::mousemove, move |ev| {
        moved.borrow_mut().call(mouse_point(&ev));
    });
    let mouse_up = window_event_listener(leptos::ev::mouseup, move |_ev| {
        let actions = board.try_update(BoardCore::on_window_mouse_up).unwrap_or_default();
        process_actions(&actions, None, board, drag);
    });
    (mouse_move, mouse_up)
}

/// Freeform canvas holding the placed images.
#[component]
pub fn CanvasBoard() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardCore>>();
    let canvas_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    let drag: DragSlot = StoredValue::new_local(ListenerSlot::default());

    #[cfg(feature = "csr")]
    {
        use board::consts::CONTEXT_MENU_SELECTOR;

        use crate::util::dom_input::{event_hits, key_modifiers};

        let key_down = window_event_listener(leptos::ev::keydown, move |ev| {
            let actions = board
                .try_update(|b| b.on_key_down(&ev.key(), key_modifiers(&ev)))
                .unwrap_or_default();
            let event: &web_sys::Event = ev.as_ref();
            process_actions(&actions, Some(event), board, drag);
        });
        let click = window_event_listener(leptos::ev::click, move |ev| {
            let inside_menu = event_hits(ev.as_ref(), CONTEXT_MENU_SELECTOR);
            board.update(|b| b.on_window_click(inside_menu));
        });
        let window: StoredValue<ListenerSlot<ListenerPair>, LocalStorage> = StoredValue::new_local(ListenerSlot::default());
        window.update_value(|slot| slot.attach(|| (key_down, click)));

        on_cleanup(move || {
            window.update_value(ListenerSlot::detach);
            let actions = board.try_update_untracked(BoardCore::teardown).unwrap_or_default();
            process_actions(&actions, None, board, drag);
        });
    }

    let on_drag_over = move |ev: leptos::ev::DragEvent| ev.prevent_default();

    let on_drop = {
        #[cfg(feature = "csr")]
        {
            use crate::util::dom_input::{element_origin, mouse_point};

            move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                let origin = canvas_ref.get().map(|el| element_origin(&el));
                let pointer = mouse_point(&ev);
                if let Some(index) = board.try_update(|b| b.on_canvas_drop(origin, pointer)).flatten() {
                    log::debug!("placed image {index}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::DragEvent| {}
        }
    };

    let on_click = {
        #[cfg(feature = "csr")]
        {
            use board::consts::CANVAS_IMAGE_SELECTOR;

            use crate::util::dom_input::event_hits;

            move |ev: leptos::ev::MouseEvent| {
                let on_image = event_hits(ev.as_ref(), CANVAS_IMAGE_SELECTOR);
                board.update(|b| b.on_canvas_click(on_image));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_menu_select = Callback::new(move |item: MenuItem| {
        let actions = board.try_update(|b| b.apply_menu_item(item)).unwrap_or_default();
        #[cfg(feature = "csr")]
        process_actions(&actions, None, board, drag);
        #[cfg(not(feature = "csr"))]
        let _ = actions;
    });

    let placed = move || {
        let items: Vec<(usize, CanvasImage, bool)> = board.with(|b| {
            b.draw_order()
                .into_iter()
                .map(|(index, image)| (index, image.clone(), b.is_selected(index)))
                .collect()
        });
        items
            .into_iter()
            .map(|(index, image, selected)| {
                #[cfg(feature = "csr")]
                let (on_mouse_down, on_context_menu) = image_handlers(index, board, drag);
                #[cfg(not(feature = "csr"))]
                let (on_mouse_down, on_context_menu) = image_handlers(index);
                let style = format!(
                    "left: {}px; top: {}px; z-index: {};",
                    image.x,
                    image.y,
                    image.z_index()
                );
                view! {
                    <img
                        class="canvas-image"
                        class=("canvas-image--selected", selected)
                        src=image.url
                        style=style
                        draggable="false"
                        on:mousedown=on_mouse_down
                        on:contextmenu=on_context_menu
                    />
                }
            })
            .collect_view()
    };

    // The menu sits outside the canvas so its clicks never reach `on_click`.
    view! {
        <div class="canvas" node_ref=canvas_ref on:dragover=on_drag_over on:drop=on_drop on:click=on_click>
            {placed}
        </div>
        <ImageContextMenu on_select=on_menu_select/>
    }
}

#[cfg(feature = "csr")]
fn image_handlers(
    index: usize,
    board: RwSignal<BoardCore>,
    drag: DragSlot,
) -> (impl Fn(leptos::ev::MouseEvent) + 'static, impl Fn(leptos::ev::MouseEvent) + 'static) {
    use crate::util::dom_input::mouse_point;

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let actions = board
            .try_update(|b| b.on_image_mouse_down(index, mouse_point(&ev)))
            .unwrap_or_default();
        process_actions(&actions, Some(ev.as_ref()), board, drag);
    };
    let on_context_menu = move |ev: leptos::ev::MouseEvent| {
        let actions = board
            .try_update(|b| b.on_image_context_menu(index, mouse_point(&ev)))
            .unwrap_or_default();
        process_actions(&actions, Some(ev.as_ref()), board, drag);
    };
    (on_mouse_down, on_context_menu)
}

#[cfg(not(feature = "csr"))]
fn image_handlers(_index: usize) -> (impl Fn(leptos::ev::MouseEvent) + 'static, impl Fn(leptos::ev::MouseEvent) + 'static) {
    (|_ev: leptos::ev::MouseEvent| {}, |_ev: leptos::ev::MouseEvent| {})
}
