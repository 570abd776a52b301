use chrono::{Duration, Local, NaiveDateTime};
use parking_lot::Mutex;
use simtime_core::{SimDuration, TimePoint, default_origin, format_time_point};
use simtime_ports::{Clock, ControllableClock};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::TimeScale;

#[derive(Debug)]
struct ClockState {
    /// Simulated time zero of the current epoch
    origin: TimePoint,
    /// Simulated time accumulated since `origin`
    offset: SimDuration,
    /// Whether ticks are being applied
    running: bool,
}

/// Consistent view of the clock taken under a single lock acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub origin: TimePoint,
    pub offset: SimDuration,
    pub running: bool,
}

impl ClockSnapshot {
    /// `origin + offset`, saturating at the largest representable time
    pub fn now(&self) -> TimePoint {
        self.origin
            .checked_add_signed(self.offset)
            .unwrap_or(NaiveDateTime::MAX)
    }
}

/// Accelerated simulated clock
///
/// Holds the origin, the accumulated offset and the running flag behind one
/// mutex so that readers never see an origin paired with another epoch's
/// offset. The offset only grows through [`SimulatedClock::advance`], which is
/// driven by an [`Advancer`](crate::Advancer) task.
///
/// Thread-safe and shared as `Arc<SimulatedClock>`.
#[derive(Debug)]
pub struct SimulatedClock {
    state: Mutex<ClockState>,
    scale: TimeScale,
    /// Signalled when the clock goes from stopped to running
    resumed: Notify,
}

impl SimulatedClock {
    /// Create a stopped clock whose epoch starts at `origin`
    pub fn new(origin: TimePoint, scale: TimeScale) -> Arc<Self> {
        Self::with_state(origin, scale, false)
    }

    /// Create a clock that is already running from `origin`
    pub fn running(origin: TimePoint, scale: TimeScale) -> Arc<Self> {
        Self::with_state(origin, scale, true)
    }

    /// Start-up clock: running, origin pinned to today's local date at the
    /// default origin hour
    pub fn starting_today(scale: TimeScale) -> Arc<Self> {
        Self::running(default_origin(Local::now().date_naive()), scale)
    }

    fn with_state(origin: TimePoint, scale: TimeScale, running: bool) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(ClockState {
                origin,
                offset: Duration::zero(),
                running,
            }),
            scale,
            resumed: Notify::new(),
        })
    }

    /// Speed of this clock
    pub fn scale(&self) -> TimeScale {
        self.scale
    }

    /// Read origin, offset and running flag together
    pub fn snapshot(&self) -> ClockSnapshot {
        let state = self.state.lock();
        ClockSnapshot {
            origin: state.origin,
            offset: state.offset,
            running: state.running,
        }
    }

    /// Add `quantum` to the offset if the clock is running.
    ///
    /// The running check and the increment happen under the same lock, so a
    /// tick can never land on an epoch that was started after a stop. Negative
    /// quanta are ignored. Returns whether the offset changed.
    pub fn advance(&self, quantum: SimDuration) -> bool {
        if quantum < Duration::zero() {
            return false;
        }

        let mut state = self.state.lock();
        if !state.running {
            return false;
        }
        state.offset = state.offset.checked_add(&quantum).unwrap_or(Duration::MAX);
        true
    }

    /// Wait until the clock is switched from stopped to running.
    ///
    /// A start that happens between a failed [`advance`](Self::advance) and
    /// this call is not lost: the wake-up is stored until consumed. Callers
    /// must re-check the running state after waking.
    pub async fn resumed(&self) {
        self.resumed.notified().await;
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> TimePoint {
        self.snapshot().now()
    }

    fn name(&self) -> &str {
        "SimulatedClock"
    }
}

impl ControllableClock for SimulatedClock {
    fn set_origin(&self, origin: TimePoint) {
        {
            let mut state = self.state.lock();
            state.origin = origin;
            state.offset = Duration::zero();
        }
        log::debug!("Clock origin set to {}", format_time_point(&origin));
    }

    fn set_running(&self, running: bool) -> bool {
        let changed = {
            let mut state = self.state.lock();
            let changed = state.running != running;
            state.running = running;
            changed
        };

        if changed {
            if running {
                self.resumed.notify_one();
                log::info!("Simulated clock started");
            } else {
                log::info!("Simulated clock stopped");
            }
        }
        changed
    }

    fn is_running(&self) -> bool {
        self.state.lock().running
    }

    fn to_real_duration(&self, simulated: SimDuration) -> std::time::Duration {
        self.scale.to_real_duration(simulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simtime_core::parse_time_point;

    fn time(text: &str) -> TimePoint {
        parse_time_point(text).unwrap()
    }

    #[test]
    fn test_new_clock_is_stopped_at_origin() {
        let clock = SimulatedClock::new(time("2024-01-01 06:00:00"), TimeScale::default());
        assert!(!clock.is_running());
        assert_eq!(clock.now(), time("2024-01-01 06:00:00"));
    }

    #[test]
    fn test_advance_adds_exactly_while_running() {
        let clock = SimulatedClock::running(time("2024-01-01 06:00:00"), TimeScale::default());
        let before = clock.now();

        assert!(clock.advance(Duration::milliseconds(1500)));
        assert_eq!(clock.now(), before + Duration::milliseconds(1500));

        for _ in 0..1000 {
            clock.advance(Duration::nanoseconds(1));
        }
        assert_eq!(
            clock.now(),
            before + Duration::milliseconds(1500) + Duration::microseconds(1)
        );
    }

    #[test]
    fn test_advance_is_ignored_when_stopped() {
        let clock = SimulatedClock::new(time("2024-01-01 06:00:00"), TimeScale::default());
        assert!(!clock.advance(Duration::seconds(1)));
        assert_eq!(clock.snapshot().offset, Duration::zero());
    }

    #[test]
    fn test_negative_quantum_is_ignored() {
        let clock = SimulatedClock::running(time("2024-01-01 06:00:00"), TimeScale::default());
        assert!(!clock.advance(Duration::seconds(-1)));
        assert_eq!(clock.now(), time("2024-01-01 06:00:00"));
    }

    #[test]
    fn test_set_origin_clears_offset() {
        let clock = SimulatedClock::running(time("2024-01-01 06:00:00"), TimeScale::default());
        clock.advance(Duration::seconds(42));
        clock.set_running(false);

        clock.set_origin(time("2030-05-20 12:00:00"));

        let snapshot = clock.snapshot();
        assert_eq!(snapshot.origin, time("2030-05-20 12:00:00"));
        assert_eq!(snapshot.offset, Duration::zero());
        assert_eq!(clock.now(), time("2030-05-20 12:00:00"));
    }

    #[test]
    fn test_set_running_reports_changes_only() {
        let clock = SimulatedClock::running(time("2024-01-01 06:00:00"), TimeScale::default());
        clock.advance(Duration::seconds(3));
        let before = clock.snapshot();

        assert!(!clock.set_running(true));
        assert_eq!(clock.snapshot(), before);

        assert!(clock.set_running(false));
        assert!(!clock.set_running(false));
        let after = clock.snapshot();
        assert_eq!(after.origin, before.origin);
        assert_eq!(after.offset, before.offset);
        assert!(!after.running);

        assert!(clock.set_running(true));
    }

    #[test]
    fn test_invalid_origin_leaves_state_unchanged() {
        let clock = SimulatedClock::running(time("2024-01-01 06:00:00"), TimeScale::default());
        clock.advance(Duration::seconds(7));
        let before = clock.snapshot();

        assert!(clock.set_origin_str("bad-input").is_err());
        assert_eq!(clock.snapshot(), before);
    }

    #[test]
    fn test_now_saturates_instead_of_overflowing() {
        let clock = SimulatedClock::running(NaiveDateTime::MAX, TimeScale::default());
        clock.advance(Duration::days(1));
        assert_eq!(clock.now(), NaiveDateTime::MAX);
    }

    #[test]
    fn test_starting_today_runs_from_six_am() {
        let clock = SimulatedClock::starting_today(TimeScale::default());
        let snapshot = clock.snapshot();
        assert!(snapshot.running);
        assert_eq!(
            format_time_point(&snapshot.origin),
            format!("{} 06:00:00", snapshot.origin.date().format("%Y-%m-%d"))
        );
    }

    #[test]
    fn test_concurrent_reads_see_prefix_sums() {
        const TICKS: i64 = 20_000;
        const READERS: usize = 4;

        let origin = time("2024-01-01 06:00:00");
        let quantum = Duration::seconds(1);
        let clock = SimulatedClock::running(origin, TimeScale::default());

        std::thread::scope(|scope| {
            let writer = {
                let clock = &clock;
                scope.spawn(move || {
                    for _ in 0..TICKS {
                        assert!(clock.advance(quantum));
                    }
                })
            };

            for _ in 0..READERS {
                let clock = &clock;
                scope.spawn(move || {
                    let mut last = Duration::zero();
                    for _ in 0..5_000 {
                        let snapshot = clock.snapshot();
                        assert_eq!(snapshot.origin, origin);
                        assert_eq!(snapshot.offset.subsec_nanos(), 0);
                        assert!(snapshot.offset >= last);
                        assert!(snapshot.offset <= Duration::seconds(TICKS));
                        assert_eq!(snapshot.now(), origin + snapshot.offset);
                        last = snapshot.offset;
                    }
                });
            }

            writer.join().unwrap();
        });

        assert_eq!(clock.snapshot().offset, Duration::seconds(TICKS));
    }

    #[test]
    fn test_reset_never_mixes_epochs() {
        let first = time("2024-01-01 06:00:00");
        let second = time("2030-05-20 12:00:00");
        let clock = SimulatedClock::running(first, TimeScale::default());

        std::thread::scope(|scope| {
            let clock = &clock;
            scope.spawn(move || {
                for _ in 0..10_000 {
                    clock.advance(Duration::seconds(1));
                }
            });
            scope.spawn(move || {
                for _ in 0..1_000 {
                    clock.set_origin(second);
                }
            });
            scope.spawn(move || {
                for _ in 0..5_000 {
                    let snapshot = clock.snapshot();
                    assert!(snapshot.origin == first || snapshot.origin == second);
                    assert_eq!(snapshot.now(), snapshot.origin + snapshot.offset);
                }
            });
        });

        assert_eq!(clock.snapshot().origin, second);
    }
}
