//! SimTime Clock Engine
//!
//! An accelerated simulated clock and the task that drives it:
//!
//! ```text
//!   Advancer (background task)          Command loop (foreground)
//!        │ advance(1s) every                │ now / set_origin /
//!        │ 1s / multiplier                  │ set_running
//!        ▼                                  ▼
//!   ┌──────────────────────────────────────────────┐
//!   │ SimulatedClock  Mutex{origin, offset, running}│
//!   └──────────────────────────────────────────────┘
//!              now() = origin + offset
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use simtime_clock::{Advancer, SimulatedClock, SystemClock, TimeScale};
//! use simtime_ports::{Clock, ControllableClock};
//!
//! let clock = SimulatedClock::starting_today(TimeScale::default()); // x20
//! Advancer::spawn(clock.clone());
//!
//! clock.set_running(false);                      // freeze
//! clock.set_origin_str("2030-05-20 12:00:00")?;  // new epoch
//! clock.reset(&SystemClock::new());              // epoch at wall time
//! println!("{}", clock.now());
//! ```

mod advancer;
mod scale;
mod simulated;
mod system;

pub use advancer::Advancer;
pub use scale::{DEFAULT_MULTIPLIER, MAX_MULTIPLIER, TimeScale};
pub use simulated::{ClockSnapshot, SimulatedClock};
pub use system::SystemClock;

// Re-export the clock traits for convenience
pub use simtime_ports::{Clock, ControllableClock};
