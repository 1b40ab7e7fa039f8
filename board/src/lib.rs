//! Interaction core for the pinboard canvas.
//!
//! This crate holds everything the board needs that does not touch the DOM:
//! the placed-image collection and its selection, the drag-and-drop and
//! keyboard controllers that mutate it, the generic context-menu state, and
//! the throttle used to rate-limit pointer moves. It compiles natively (for
//! tests and for the server, which shares the wire types) and to WebAssembly,
//! where the `client` crate wires browser events into [`engine::BoardCore`]
//! and performs the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::BoardCore`], the collection owner and event router |
//! | [`image`] | `CanvasImage`, z-order helpers and REST wire types |
//! | [`input`] | Points, modifier keys and the recognized key set |
//! | [`drag`] | Gallery drop and in-canvas repositioning |
//! | [`keyboard`] | Arrow nudging and delete requests for the selection |
//! | [`context_menu`] | Right-click menu state, generic over its target |
//! | [`throttle`] | Leading-edge rate gate and throttled callbacks |
//! | [`consts`] | Shared numeric constants and DOM class names |

pub mod consts;
pub mod context_menu;
pub mod drag;
pub mod engine;
pub mod image;
pub mod input;
pub mod keyboard;
pub mod throttle;
