//! Event id generation.
//!
//! Ids are seeded from wall-clock milliseconds so they look like creation
//! timestamps, but they are forced to increase strictly so two events created
//! in the same millisecond still get distinct ids.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::event::EventId;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start after `last`, e.g. the highest id already present in a store.
    pub fn starting_after(last: EventId) -> Self {
        Self {
            last: AtomicU64::new(last.0),
        }
    }

    /// Next id, strictly greater than every id returned before.
    pub fn next_id(&self) -> EventId {
        self.next_with_clock(now_millis())
    }

    fn next_with_clock(&self, clock: u64) -> EventId {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = clock.max(current.saturating_add(1));
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return EventId(candidate),
                Err(actual) => current = actual,
            }
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
