use simtime_core::{SimDuration, TimePoint, parse_time_point};

use crate::{ClockError, ClockResult};

/// Port for time abstraction
///
/// This allows the command loop to use different time sources:
/// - The accelerated simulated clock
/// - Real system time (the source for `reset`)
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> TimePoint;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}

/// A clock whose epoch and run state can be driven from outside
pub trait ControllableClock: Clock {
    /// Start a new epoch at `origin` with zero accumulated offset
    fn set_origin(&self, origin: TimePoint);

    /// Set the running flag. Returns `false` when the clock was already in that state.
    fn set_running(&self, running: bool) -> bool;

    /// Whether the clock is currently accumulating simulated time
    fn is_running(&self) -> bool;

    /// Real-time length of a simulated duration at this clock's speed
    fn to_real_duration(&self, simulated: SimDuration) -> std::time::Duration;

    /// Start a new epoch at the current time of `wall`
    fn reset(&self, wall: &dyn Clock) -> TimePoint {
        let origin = wall.now();
        self.set_origin(origin);
        origin
    }

    /// Parse `YYYY-MM-DD HH:MM:SS` and start a new epoch there.
    ///
    /// The clock is untouched when parsing fails.
    fn set_origin_str(&self, text: &str) -> ClockResult<TimePoint> {
        let origin = parse_time_point(text).map_err(|_| ClockError::InvalidTimeFormat {
            input: text.trim().to_string(),
        })?;
        self.set_origin(origin);
        Ok(origin)
    }
}
