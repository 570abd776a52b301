use chrono::Duration;
use simtime_core::SimDuration;
use std::num::NonZeroU32;

/// Simulated seconds that pass per real second unless configured otherwise
pub const DEFAULT_MULTIPLIER: u32 = 20;

/// Upper bound on the multiplier: one quantum per millisecond, the finest
/// pause tokio timers resolve
pub const MAX_MULTIPLIER: u32 = 1_000;

/// Speed of the simulated clock relative to wall time
///
/// Every tick adds one simulated quantum (one second) and then waits
/// `quantum / multiplier` of real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeScale {
    multiplier: NonZeroU32,
}

impl TimeScale {
    /// Create a scale running `multiplier` times faster than real time.
    ///
    /// Returns `None` for zero or for multipliers above [`MAX_MULTIPLIER`].
    pub fn new(multiplier: u32) -> Option<Self> {
        if multiplier > MAX_MULTIPLIER {
            return None;
        }
        NonZeroU32::new(multiplier).map(|multiplier| Self { multiplier })
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier.get()
    }

    /// Simulated time added per tick
    pub fn quantum(&self) -> SimDuration {
        Duration::seconds(1)
    }

    /// Real time slept between ticks
    pub fn real_quantum(&self) -> std::time::Duration {
        self.to_real_duration(self.quantum())
    }

    /// Convert a simulated span into the real span it takes at this speed.
    /// Negative spans map to zero.
    pub fn to_real_duration(&self, simulated: SimDuration) -> std::time::Duration {
        simulated.to_std().unwrap_or_default() / self.multiplier.get()
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            multiplier: NonZeroU32::new(DEFAULT_MULTIPLIER).unwrap_or(NonZeroU32::MIN),
        }
    }
}
