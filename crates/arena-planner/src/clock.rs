//! Wall-clock abstraction for `last_updated` stamps.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use arena_core::types::Millis;

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> Millis;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Millis {
        // A clock set before 1970 reads as the epoch.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as Millis)
            .unwrap_or(0)
    }
}

/// Manually driven clock for deterministic tests.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<Millis>,
}

impl FixedClock {
    pub fn new(now: Millis) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    pub fn advance(&self, millis: Millis) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> Millis {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> Millis {
        (**self).now_millis()
    }
}
