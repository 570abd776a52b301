//! Command - parsing of one line of console input

use simtime_ports::ClockError;
use thiserror::Error;

/// Commands that act on the clock or the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Start,
    Stop,
    Reset,
    Set,
    Now,
    Exit,
}

impl CommandKind {
    /// Every command, in the order the help menu lists them
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Start,
        CommandKind::Stop,
        CommandKind::Reset,
        CommandKind::Set,
        CommandKind::Now,
        CommandKind::Exit,
    ];

    /// Keyword typed at the prompt
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Start => "start",
            CommandKind::Stop => "stop",
            CommandKind::Reset => "reset",
            CommandKind::Set => "set",
            CommandKind::Now => "now",
            CommandKind::Exit => "exit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// A parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Reset,
    /// New origin, still unparsed (`YYYY-MM-DD HH:MM:SS`)
    Set(String),
    Now,
    Exit,
    /// `help` for the whole menu, `<command>-help` for one entry
    Help(Option<CommandKind>),
    /// Blank line
    Empty,
}

/// Errors from parsing or executing a console command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: '{0}'")]
    Unknown(String),

    #[error("No help for unknown command: '{0}'")]
    UnknownHelpTopic(String),

    #[error("'{command}' requires an argument (usage: {command} YYYY-MM-DD HH:MM:SS)")]
    MissingArgument { command: &'static str },

    #[error("'{command}' takes no arguments")]
    UnexpectedArgument { command: &'static str },

    #[error(transparent)]
    Clock(#[from] ClockError),
}

impl Command {
    /// Parse one line of input.
    ///
    /// `set` keeps everything after the keyword (whitespace collapsed) as the
    /// time text; the text itself is validated when the command runs.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }

        if let Some(topic) = line.strip_suffix("-help") {
            return CommandKind::from_name(topic)
                .map(|kind| Command::Help(Some(kind)))
                .ok_or_else(|| CommandError::UnknownHelpTopic(topic.to_string()));
        }

        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        if keyword == "help" {
            return match args.as_slice() {
                [] => Ok(Command::Help(None)),
                [topic] => CommandKind::from_name(topic)
                    .map(|kind| Command::Help(Some(kind)))
                    .ok_or_else(|| CommandError::UnknownHelpTopic(topic.to_string())),
                _ => Err(CommandError::Unknown(line.to_string())),
            };
        }

        let kind =
            CommandKind::from_name(keyword).ok_or_else(|| CommandError::Unknown(line.to_string()))?;

        match (kind, args.is_empty()) {
            (CommandKind::Set, true) => Err(CommandError::MissingArgument {
                command: kind.name(),
            }),
            (CommandKind::Set, false) => Ok(Command::Set(args.join(" "))),
            (_, false) => Err(CommandError::UnexpectedArgument {
                command: kind.name(),
            }),
            (CommandKind::Start, true) => Ok(Command::Start),
            (CommandKind::Stop, true) => Ok(Command::Stop),
            (CommandKind::Reset, true) => Ok(Command::Reset),
            (CommandKind::Now, true) => Ok(Command::Now),
            (CommandKind::Exit, true) => Ok(Command::Exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("start"), Ok(Command::Start));
        assert_eq!(Command::parse("  stop \n"), Ok(Command::Stop));
        assert_eq!(Command::parse("reset"), Ok(Command::Reset));
        assert_eq!(Command::parse("now"), Ok(Command::Now));
        assert_eq!(Command::parse("exit"), Ok(Command::Exit));
        assert_eq!(Command::parse(""), Ok(Command::Empty));
        assert_eq!(Command::parse("   "), Ok(Command::Empty));
    }

    #[test]
    fn test_parse_set_keeps_time_text() {
        assert_eq!(
            Command::parse("set 2030-05-20 12:00:00"),
            Ok(Command::Set("2030-05-20 12:00:00".to_string()))
        );
        assert_eq!(
            Command::parse("set   2030-05-20    12:00:00"),
            Ok(Command::Set("2030-05-20 12:00:00".to_string()))
        );
        assert_eq!(
            Command::parse("set bad-input"),
            Ok(Command::Set("bad-input".to_string()))
        );
    }

    #[test]
    fn test_parse_set_without_argument() {
        assert_eq!(
            Command::parse("set"),
            Err(CommandError::MissingArgument { command: "set" })
        );
    }

    #[test]
    fn test_parse_help_forms() {
        assert_eq!(Command::parse("help"), Ok(Command::Help(None)));
        assert_eq!(
            Command::parse("set-help"),
            Ok(Command::Help(Some(CommandKind::Set)))
        );
        assert_eq!(
            Command::parse("help now"),
            Ok(Command::Help(Some(CommandKind::Now)))
        );
        assert_eq!(
            Command::parse("jump-help"),
            Err(CommandError::UnknownHelpTopic("jump".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_extra_arguments() {
        assert_eq!(
            Command::parse("launch"),
            Err(CommandError::Unknown("launch".to_string()))
        );
        assert_eq!(
            Command::parse("start now"),
            Err(CommandError::UnexpectedArgument { command: "start" })
        );
    }

    #[test]
    fn test_command_kind_names_round_trip() {
        for kind in CommandKind::ALL {
            assert_eq!(CommandKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(CommandKind::from_name("help"), None);
    }
}
