//! Application state models shared through Leptos context.
//!
//! DESIGN
//! ======
//! Two signals are provided at the root: `RwSignal<BoardCore>` (placed
//! images and interaction state, from the `board` crate) and
//! `RwSignal<ImageLibrary>` (the gallery list).

pub mod library;
