//! Root application component and context providers.

use board::engine::BoardCore;
use leptos::prelude::*;

use crate::components::{canvas_board::CanvasBoard, gallery::Gallery, upload_zone::UploadZone};
use crate::state::library::ImageLibrary;

/// Root application component.
///
/// Provides the board and gallery state to every child and kicks off the
/// first gallery fetch.
#[component]
pub fn App() -> impl IntoView {
    let board = RwSignal::new(BoardCore::new());
    let library = RwSignal::new(ImageLibrary::default());

    provide_context(board);
    provide_context(library);

    #[cfg(feature = "csr")]
    crate::net::api::spawn_refresh(library);

    view! {
        <main class="app">
            <aside class="app__sidebar">
                <UploadZone/>
                <Gallery/>
            </aside>
            <CanvasBoard/>
        </main>
    }
}
