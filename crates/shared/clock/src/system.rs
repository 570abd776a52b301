use chrono::Local;
use simtime_core::TimePoint;
use simtime_ports::Clock;

/// Real system clock
///
/// Returns the current local wall-clock time. `reset` uses it as the
/// origin of the new epoch.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> TimePoint {
        Local::now().naive_local()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
