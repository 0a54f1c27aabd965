#![forbid(unsafe_code)]

//! The run-in-progress token.
//!
//! Only one animated run may touch a driver's sequence at a time. The token
//! is a shared flag handing out an RAII guard: acquiring while a guard is
//! alive fails, and dropping the guard releases the flag — on normal
//! completion and on unwind alike, so a panicking observer cannot wedge the
//! driver. Requests that lose the race are rejected, never queued.

use std::cell::Cell;
use std::rc::Rc;

/// Shared "a run is active" flag.
///
/// Clones observe the same flag, so a front end can keep one to disable its
/// start buttons while a run is underway.
#[derive(Debug, Clone, Default)]
pub struct RunFlag {
    active: Rc<Cell<bool>>,
}

impl RunFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the token. Fails when a [`RunGuard`] from this flag is alive.
    #[must_use]
    pub fn try_acquire(&self) -> Option<RunGuard> {
        if self.active.get() {
            return None;
        }
        self.active.set(true);
        Some(RunGuard {
            active: Rc::clone(&self.active),
        })
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// RAII token for an active run; dropping it releases the flag.
#[derive(Debug)]
pub struct RunGuard {
    active: Rc<Cell<bool>>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.active.set(false);
    }
}
