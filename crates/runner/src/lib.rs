//! SimTime Runner - interactive console for the accelerated clock
//!
//! - **Command**: parses one console line
//! - **Interpreter**: applies commands to the clock and produces replies
//! - **Session**: banner, prompt and the read/execute/print loop
//! - **Config**: JSON file plus environment overrides
//!
//! ## Architecture
//!
//! ```text
//!   stdin ──► Session ──► Command::parse ──► Interpreter ──► stdout
//!                                                │
//!                                                ▼
//!                               SimulatedClock ◄── Advancer (task)
//! ```

pub mod command;
pub mod config;
pub mod help;
pub mod interpreter;
pub mod session;

// Re-export main types
pub use command::{Command, CommandError, CommandKind};
pub use config::{ConfigError, MULTIPLIER_ENV, RunnerConfig};
pub use interpreter::{Interpreter, Reply};
pub use session::{DEFAULT_PROMPT, Session, SessionEnd};
