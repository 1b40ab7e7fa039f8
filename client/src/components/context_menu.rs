//! Right-click menu for a placed image.
//!
//! Visibility, position and target come from `BoardCore::menu`; choosing an
//! entry is reported through `on_select` so the canvas can run the returned
//! actions.

use board::context_menu::MenuItem;
use board::engine::BoardCore;
use leptos::prelude::*;

#[component]
pub fn ImageContextMenu(on_select: Callback<MenuItem>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardCore>>();

    let visible = move || board.with(|b| b.menu.is_visible());
    let style = move || {
        let at = board.with(|b| b.menu.position());
        format!("left: {}px; top: {}px;", at.x, at.y)
    };

    view! {
        <Show when=visible>
            <ul class="context-menu" style=style>
                {MenuItem::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="context-menu-item" on:click=move |_| on_select.run(item)>
                                <span class="context-menu-item__icon">{item.icon()}</span>
                                <span class="context-menu-item__label">{item.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Show>
    }
}
