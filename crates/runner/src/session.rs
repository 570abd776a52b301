//! Session - the read/execute/print loop around the interpreter

use crate::{help, interpreter::Interpreter};
use simtime_ports::ControllableClock;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const DEFAULT_PROMPT: &str = "> ";

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit`
    Exit,
    /// Input was closed
    EndOfInput,
}

/// Interactive console session
pub struct Session<C: ControllableClock> {
    interpreter: Interpreter<C>,
    prompt: String,
}

impl<C: ControllableClock> Session<C> {
    pub fn new(interpreter: Interpreter<C>) -> Self {
        Self::with_prompt(interpreter, DEFAULT_PROMPT)
    }

    pub fn with_prompt(interpreter: Interpreter<C>, prompt: impl Into<String>) -> Self {
        Self {
            interpreter,
            prompt: prompt.into(),
        }
    }

    /// Print the banner, then read and execute lines until `exit` or end of input.
    ///
    /// Command errors are printed and the loop continues; only I/O errors end
    /// the session early.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> io::Result<SessionEnd>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(output, "{}", help::banner())?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(output)?;
                log::info!("Input closed, ending session");
                return Ok(SessionEnd::EndOfInput);
            };

            match self.interpreter.execute_line(&line) {
                Ok(reply) => {
                    let text = reply.to_string();
                    if !text.is_empty() {
                        writeln!(output, "{text}")?;
                    }
                    if reply.is_exit() {
                        log::info!("Session ended by user");
                        return Ok(SessionEnd::Exit);
                    }
                }
                Err(e) => {
                    log::debug!("Rejected input {:?}: {}", line, e);
                    writeln!(output, "{e}")?;
                }
            }
        }
    }
}
