//! Server image list; each entry can be dragged onto the canvas.

use board::engine::BoardCore;
use leptos::prelude::*;

use crate::state::library::ImageLibrary;

#[component]
pub fn Gallery() -> impl IntoView {
    let library = expect_context::<RwSignal<ImageLibrary>>();
    let board = expect_context::<RwSignal<BoardCore>>();

    let error = move || {
        library
            .with(|l| l.error.clone())
            .map(|message| view! { <p class="gallery__error">{message}</p> })
    };

    view! {
        <section class="gallery">
            <Show when=move || library.with(|l| l.loading)>
                <p class="gallery__status">"Loading…"</p>
            </Show>
            {error}
            <div class="gallery__grid">
                <For
                    each=move || library.with(|l| l.images.clone())
                    key=Clone::clone
                    children=move |url: String| {
                        let src = url.clone();
                        view! {
                            <img
                                class="gallery-image"
                                src=src
                                draggable="true"
                                on:dragstart=move |_| board.update(|b| b.on_gallery_drag_start(url.clone()))
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}
