//! Help - command menu and per-command usage lines

use crate::command::CommandKind;

pub const TITLE: &str = "Simulated time tool";
const RULE: &str = "-----------------------";

/// One-line meaning of a command
pub fn meaning(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Start => "start simulated time",
        CommandKind::Stop => "stop simulated time",
        CommandKind::Reset => "restart simulated time from the current real time",
        CommandKind::Set => "set the simulated start time (format: 2006-01-02 15:04:05)",
        CommandKind::Now => "show the current simulated time",
        CommandKind::Exit => "exit the program",
    }
}

/// Menu line for a command, with its argument placeholder when it takes one
pub fn usage(kind: CommandKind) -> String {
    match kind {
        CommandKind::Set => format!(
            " {} <YYYY-MM-DD HH:MM:SS> - {}",
            kind.name(),
            meaning(kind)
        ),
        _ => format!(" {} - {}", kind.name(), meaning(kind)),
    }
}

/// Full command list, as printed at start-up and by `help`
pub fn menu() -> String {
    let mut lines = vec!["Commands:".to_string()];
    lines.extend(CommandKind::ALL.into_iter().map(usage));
    lines.push(" help - show this list".to_string());
    lines.push(" <command>-help - show the meaning and usage of a command".to_string());
    lines.join("\n")
}

/// Start-up banner: title and the command list between rules
pub fn banner() -> String {
    format!("{TITLE}\n{RULE}\n{}\n{RULE}", menu())
}
