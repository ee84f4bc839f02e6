//! Environment abstractions for testability.
//!
//! Prompts read the time through the [`Clock`] trait so timeout behaviour
//! can be tested without sleeping.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Abstraction over the wall clock.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Real clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Mock clock for testing.
///
/// Starts at the instant it was created. Time moves only through
/// [`advance`](Self::advance) or, for a stepping clock, by a fixed amount
/// after every reading.
#[derive(Debug)]
pub struct MockClock {
    origin: Instant,
    elapsed: Mutex<Duration>,
    step: Duration,
}

impl MockClock {
    /// A clock that never moves unless advanced.
    pub fn fixed() -> Self {
        Self::stepping(Duration::ZERO)
    }

    /// A clock that moves forward by `step` after every [`Clock::now`] call.
    ///
    /// The prompt loop reads the clock once when it starts and once per
    /// rejected attempt, so a stepping clock models a user who takes `step`
    /// to answer each time.
    pub fn stepping(step: Duration) -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
            step,
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut elapsed = self.elapsed.lock().unwrap_or_else(PoisonError::into_inner);
        *elapsed += by;
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        let mut elapsed = self.elapsed.lock().unwrap_or_else(PoisonError::into_inner);
        let now = self.origin + *elapsed;
        *elapsed += self.step;
        now
    }
}
