//! SimTime Ports
//!
//! Port definitions (traits) for the simulated clock.
//! These define the boundary between the clock engine and the command loop.

mod clock;
mod error;

pub use clock::{Clock, ControllableClock};
pub use error::{ClockError, ClockResult};
