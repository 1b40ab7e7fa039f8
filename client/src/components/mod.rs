//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gallery` and `upload_zone` make up the sidebar; `canvas_board` owns the
//! canvas and its window listeners and renders `context_menu`.

pub mod canvas_board;
pub mod context_menu;
pub mod gallery;
pub mod upload_zone;
