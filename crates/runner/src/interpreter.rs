//! Interpreter - applies parsed commands to the clock
//!
//! The interpreter owns no clock state of its own. Every command goes
//! through the [`ControllableClock`] port, so the pairing of origin and
//! offset is guarded by the clock implementation.

use crate::{
    command::{Command, CommandError},
    help,
};
use simtime_core::{TimePoint, format_time_point};
use simtime_ports::{Clock, ControllableClock};
use std::fmt;
use std::sync::Arc;

/// Outcome of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Started,
    AlreadyRunning,
    Stopped,
    AlreadyStopped,
    /// New epoch started at wall-clock time
    Reset(TimePoint),
    /// New epoch started at a user-supplied time
    OriginSet(TimePoint),
    Now(TimePoint),
    Help(String),
    Exit,
    /// Nothing to print
    Nothing,
}

impl Reply {
    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Started => write!(f, "Simulated time started"),
            Reply::AlreadyRunning => write!(f, "Simulated time is already running"),
            Reply::Stopped => write!(f, "Simulated time stopped"),
            Reply::AlreadyStopped => write!(f, "Simulated time is already stopped"),
            Reply::Reset(origin) => write!(
                f,
                "Simulated time reset to {}",
                format_time_point(origin)
            ),
            Reply::OriginSet(origin) => write!(
                f,
                "Simulated start time set to {}",
                format_time_point(origin)
            ),
            Reply::Now(now) => write!(f, "Current simulated time: {}", format_time_point(now)),
            Reply::Help(text) => write!(f, "{text}"),
            Reply::Exit => write!(f, "Exiting"),
            Reply::Nothing => Ok(()),
        }
    }
}

/// Executes console commands against a controllable clock
pub struct Interpreter<C: ControllableClock> {
    /// Clock being driven
    clock: Arc<C>,
    /// Source of real time for `reset`
    wall: Arc<dyn Clock>,
}

impl<C: ControllableClock> Interpreter<C> {
    pub fn new(clock: Arc<C>, wall: Arc<dyn Clock>) -> Self {
        Self { clock, wall }
    }

    /// Get reference to the driven clock
    pub fn clock(&self) -> &Arc<C> {
        &self.clock
    }

    /// Parse and execute one line of input
    pub fn execute_line(&self, line: &str) -> Result<Reply, CommandError> {
        let command = Command::parse(line)?;
        self.execute(&command)
    }

    /// Execute a parsed command
    pub fn execute(&self, command: &Command) -> Result<Reply, CommandError> {
        let reply = match command {
            Command::Start => {
                if self.clock.set_running(true) {
                    Reply::Started
                } else {
                    Reply::AlreadyRunning
                }
            }
            Command::Stop => {
                if self.clock.set_running(false) {
                    Reply::Stopped
                } else {
                    Reply::AlreadyStopped
                }
            }
            Command::Reset => Reply::Reset(self.clock.reset(self.wall.as_ref())),
            Command::Set(text) => Reply::OriginSet(self.clock.set_origin_str(text)?),
            Command::Now => Reply::Now(self.clock.now()),
            Command::Exit => {
                self.clock.set_running(false);
                Reply::Exit
            }
            Command::Help(None) => Reply::Help(help::menu()),
            Command::Help(Some(kind)) => Reply::Help(help::usage(*kind)),
            Command::Empty => Reply::Nothing,
        };
        Ok(reply)
    }
}
