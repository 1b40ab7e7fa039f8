//! Leading-edge throttling for high-frequency callbacks.
//!
//! `Throttle` is the bare rate gate: the first call passes, and afterwards a
//! call passes only once `interval_ms` has elapsed since the last call that
//! passed. Dropped calls are discarded; there is no queue and no trailing
//! invocation. `Throttled` pairs the gate with a callback and a [`Clock`] so
//! a pointer-move handler can be wrapped once and called on every event.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

use crate::consts::THROTTLE_60_FPS_MS;

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock: `Date.now()` in the browser, `SystemTime` elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Rate gate admitting at most one call per `interval_ms`.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval_ms: f64,
    last_call: Option<f64>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(THROTTLE_60_FPS_MS)
    }
}

impl Throttle {
    #[must_use]
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_call: None }
    }

    /// Decide whether a call at `now_ms` may run, recording it if so.
    pub fn try_pass(&mut self, now_ms: f64) -> bool {
        let ready = match self.last_call {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms,
        };
        if ready {
            self.last_call = Some(now_ms);
        }
        ready
    }
}

/// A callback behind a [`Throttle`].
pub struct Throttled<F, C = SystemClock> {
    callback: F,
    gate: Throttle,
    clock: C,
}

impl<F> Throttled<F, SystemClock> {
    /// Wrap `callback` using the wall clock.
    pub fn new(callback: F, interval_ms: f64) -> Self {
        Self::with_clock(callback, interval_ms, SystemClock)
    }
}

impl<F, C: Clock> Throttled<F, C> {
    pub fn with_clock(callback: F, interval_ms: f64, clock: C) -> Self {
        Self { callback, gate: Throttle::new(interval_ms), clock }
    }

    /// Invoke the callback with `arg` unless the window is still closed.
    ///
    /// Returns whether the callback ran.
    pub fn call<A>(&mut self, arg: A) -> bool
    where
        F: FnMut(A),
    {
        if !self.gate.try_pass(self.clock.now_ms()) {
            return false;
        }
        (self.callback)(arg);
        true
    }
}

/// Wrap `callback` so it runs at most once per `interval_ms` of wall time.
pub fn throttle<F>(callback: F, interval_ms: f64) -> Throttled<F> {
    Throttled::new(callback, interval_ms)
}
