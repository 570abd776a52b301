use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::SimulatedClock;

/// Background task that moves a [`SimulatedClock`] forward
///
/// While the clock runs, one simulated quantum is applied per real quantum,
/// paced against fixed deadlines rather than back-to-back sleeps. While it
/// is stopped the task parks until the clock is started again. The task
/// lives as long as the runtime; it is never joined and is dropped with the
/// process.
pub struct Advancer {
    clock: Arc<SimulatedClock>,
}

impl Advancer {
    pub fn new(clock: Arc<SimulatedClock>) -> Self {
        Self { clock }
    }

    /// Spawn the advancement loop on the current tokio runtime
    pub fn spawn(clock: Arc<SimulatedClock>) -> JoinHandle<()> {
        tokio::spawn(Self::new(clock).run())
    }

    /// Run the advancement loop forever
    pub async fn run(self) {
        let scale = self.clock.scale();
        let quantum = scale.quantum();
        let pause = scale.real_quantum();

        log::info!(
            "Clock advancer started (x{}, {:?} real per {}s simulated)",
            scale.multiplier(),
            pause,
            quantum.num_seconds()
        );

        // Deadlines are fixed multiples of `pause` from the last (re)start, so
        // timer rounding and scheduling delays do not accumulate. Missed ticks
        // are applied in a burst.
        let mut ticker = tokio::time::interval(pause);
        loop {
            ticker.tick().await;
            if !self.clock.advance(quantum) {
                log::debug!("Clock advancer parked");
                self.clock.resumed().await;
                log::debug!("Clock advancer resumed");
                ticker.reset_immediately();
            }
        }
    }
}
