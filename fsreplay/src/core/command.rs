//! Transcript instructions.

use crate::core::entry::Entry;
use crate::core::error::{Result, TranscriptError};

/// Prefix that marks a command line in the transcript.
pub const COMMAND_MARKER: char = '$';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `cd /`
    GoToRoot,
    /// `cd ..`
    GoToParent,
    /// `cd <name>`; never `/` or `..`.
    GoToChild { target: String },
    /// `ls`, with the output lines that followed it.
    List { entries: Vec<Entry> },
}

impl Command {
    /// Map a `cd` argument onto the matching navigation command.
    pub fn change_directory(argument: &str) -> Command {
        match argument {
            "/" => Command::GoToRoot,
            ".." => Command::GoToParent,
            other => Command::GoToChild {
                target: other.to_string(),
            },
        }
    }
}

/// Parse the text following the command marker (`cd a`, `ls`, ...).
pub fn parse_command(line: usize, text: &str) -> Result<Command> {
    let mut tokens = text.split_whitespace();
    let malformed = |reason: String| TranscriptError::MalformedCommand { line, reason };

    let keyword = tokens
        .next()
        .ok_or_else(|| malformed("missing command keyword".to_string()))?;
    let arguments: Vec<&str> = tokens.collect();

    match keyword {
        "cd" => match arguments.as_slice() {
            [argument] => Ok(Command::change_directory(argument)),
            [] => Err(malformed("cd requires a directory argument".to_string())),
            _ => Err(malformed(format!(
                "cd takes one argument, got {}",
                arguments.len()
            ))),
        },
        "ls" if arguments.is_empty() => Ok(Command::List {
            entries: Vec::new(),
        }),
        "ls" => Err(malformed("ls takes no arguments".to_string())),
        other => Err(malformed(format!("unknown command '{other}'"))),
    }
}
