// Lumen time source
//
// Scene programs only ever compare timestamps, so time is a plain
// monotonic millisecond count. Tests swap the system clock for a
// `ManualClock` they advance by hand.

use std::ops::{Add, Sub};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Monotonic point in time, in milliseconds since the clock's origin
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Timestamp(f64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0.0);

    pub fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> f64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`
    pub fn since(&self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }
}

impl Add<f64> for Timestamp {
    type Output = Timestamp;

    fn add(self, ms: f64) -> Timestamp {
        Timestamp(self.0 + ms)
    }
}

impl Sub for Timestamp {
    type Output = f64;

    fn sub(self, rhs: Timestamp) -> f64 {
        self.since(rhs)
    }
}

pub trait Clock: Send {
    fn now(&self) -> Timestamp;
}

/// Wall clock measured from the moment it was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.origin.elapsed().as_secs_f64() * 1000.0)
    }
}

/// Virtual clock for tests. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<Mutex<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, at: Timestamp) {
        *self.now_ms.lock().unwrap() = at.as_millis();
    }

    /// Move time forward and return the new time
    pub fn advance(&self, ms: f64) -> Timestamp {
        let mut now = self.now_ms.lock().unwrap();
        *now += ms;
        Timestamp(*now)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(*self.now_ms.lock().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_arithmetic() {
        let start = Timestamp::from_millis(100.0);
        let later = start + 250.0;
        assert_eq!(later.as_millis(), 350.0);
        assert_eq!(later.since(start), 250.0);
        assert_eq!(later - start, 250.0);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        assert_eq!(clock.now(), Timestamp::ZERO);
        handle.advance(16.0);
        handle.advance(16.0);
        assert_eq!(clock.now().as_millis(), 32.0);

        handle.set(Timestamp::from_millis(5.0));
        assert_eq!(clock.now().as_millis(), 5.0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
