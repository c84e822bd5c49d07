use std::time::{Duration, Instant};

/// Visibility of the event modal.
///
/// Closing is two-phase: the modal first fades (`Closing`) and is removed
/// once the deadline passes (`Closed`). Intents are dispatched before the
/// transition starts, so nothing here gates a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissPhase {
    Open,
    Closing { deadline: Instant },
    Closed,
}

#[derive(Debug, Clone)]
pub struct DismissTransition {
    phase: DismissPhase,
    delay: Duration,
}

impl DismissTransition {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: DismissPhase::Open,
            delay,
        }
    }

    pub fn phase(&self) -> DismissPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DismissPhase::Open
    }

    pub fn is_closed(&self) -> bool {
        self.phase == DismissPhase::Closed
    }

    /// Start closing. Returns false if the modal was not open.
    pub fn begin(&mut self, now: Instant) -> bool {
        if !self.is_open() {
            return false;
        }
        self.phase = DismissPhase::Closing {
            deadline: now + self.delay,
        };
        true
    }

    /// Move to `Closed` once the deadline has passed.
    /// Returns true only on the call that performs the transition.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.phase {
            DismissPhase::Closing { deadline } if now >= deadline => {
                self.phase = DismissPhase::Closed;
                true
            }
            _ => false,
        }
    }

    /// Time left before removal, if closing.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            DismissPhase::Closing { deadline } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Fade factor for rendering: 1.0 while open, falling to 0.0 while closing.
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            DismissPhase::Open => 1.0,
            DismissPhase::Closed => 0.0,
            DismissPhase::Closing { deadline } => {
                if self.delay.is_zero() {
                    return 0.0;
                }
                let left = deadline.saturating_duration_since(now);
                (left.as_secs_f32() / self.delay.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}
