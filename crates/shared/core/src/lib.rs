//! SimTime Core
//!
//! Pure value types for the simulated clock.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod values;

// Re-export commonly used types at crate root
pub use values::{
    DEFAULT_ORIGIN_HOUR, SimDuration, TIME_FORMAT, TimePoint, default_origin, format_time_point,
    parse_time_point,
};
