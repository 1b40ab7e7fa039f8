//! Utility helpers for the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `listeners` owns window listener registrations; `dom_input` (browser
//! build only) turns DOM events into `board` inputs.

#[cfg(feature = "csr")]
pub mod dom_input;
pub mod listeners;
