//! Click-or-drop target that uploads JPEG/PNG files.
//!
//! Files go up one at a time; the gallery is refreshed once afterwards.

use leptos::prelude::*;

use crate::state::library::ImageLibrary;

#[component]
pub fn UploadZone() -> impl IntoView {
    let library = expect_context::<RwSignal<ImageLibrary>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let drag_over = RwSignal::new(false);

    let on_click = {
        #[cfg(feature = "csr")]
        {
            move |_ev: leptos::ev::MouseEvent| {
                if let Some(input) = input_ref.get() {
                    input.click();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_change = {
        #[cfg(feature = "csr")]
        {
            move |_ev: leptos::ev::Event| {
                let Some(input) = input_ref.get() else { return };
                let Some(files) = input.files() else { return };
                let files = crate::util::dom_input::file_list_to_vec(&files);
                // reset so picking the same file again still fires change
                input.set_value("");
                crate::net::api::spawn_uploads(files, library);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = library;
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(true);
    };

    let on_drag_leave = move |_ev: leptos::ev::DragEvent| drag_over.set(false);

    let on_drop = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                drag_over.set(false);
                let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
                    return;
                };
                crate::net::api::spawn_uploads(crate::util::dom_input::file_list_to_vec(&files), library);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::DragEvent| {}
        }
    };

    view! {
        <div
            class="upload-zone"
            class=("upload-zone--drag-over", move || drag_over.get())
            on:click=on_click
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <input
                node_ref=input_ref
                class="upload-zone__input"
                type="file"
                accept="image/jpeg,image/png"
                multiple
                hidden
                on:change=on_change
            />
            <span class="upload-zone__hint">"Drop images here or click to upload"</span>
        </div>
    }
}
