//! Console command parsing

use std::str::FromStr;

use crate::{error::CommandError, state::ChimeKind};

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `tick <text>`, `tock <text>` or `bong <text>`
    SetMessage(ChimeKind, String),
    /// `t`
    TogglePrint,
    /// `quit`
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse one input line. Surrounding whitespace is ignored; the value of a
    /// message command is everything after the first delimiter, inner spaces
    /// included.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        match line {
            "quit" => return Ok(Command::Quit),
            "t" => return Ok(Command::TogglePrint),
            _ => {}
        }

        let Some((name, value)) = line.split_once(char::is_whitespace) else {
            return Err(CommandError::Malformed(line.to_string()));
        };

        let kind = match name {
            "tick" => ChimeKind::Tick,
            "tock" => ChimeKind::Tock,
            "bong" => ChimeKind::Bong,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        Ok(Command::SetMessage(kind, value.to_string()))
    }
}
