//! Owned window listener registrations.
//!
//! DESIGN
//! ======
//! A `ListenerSlot` holds at most one registration. Attaching twice is a
//! no-op and detaching an empty slot is a no-op, so attach/detach pairs
//! driven by `board::engine::Action`s can never leak or double-remove.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

/// Something that can unregister itself.
pub trait Detach {
    fn detach(self);
}

#[cfg(feature = "csr")]
impl Detach for leptos::prelude::WindowListenerHandle {
    fn detach(self) {
        self.remove();
    }
}

impl<A: Detach, B: Detach> Detach for (A, B) {
    fn detach(self) {
        self.0.detach();
        self.1.detach();
    }
}

#[derive(Debug)]
pub struct ListenerSlot<H> {
    handle: Option<H>,
}

impl<H> Default for ListenerSlot<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: Detach> ListenerSlot<H> {
    /// Register via `make` unless something is already registered.
    pub fn attach(&mut self, make: impl FnOnce() -> H) {
        if self.handle.is_none() {
            self.handle = Some(make());
        }
    }

    pub fn detach(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.detach();
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }
}
