//! Turns raw transcript lines into an ordered command sequence.

use tracing::debug;

use crate::core::command::{COMMAND_MARKER, Command, parse_command};
use crate::core::entry::parse_entry;
use crate::core::error::{Result, TranscriptError};

/// Parse an ordered transcript into commands.
///
/// Lines starting with `$` and whitespace open a new command; any other
/// non-blank line is listing output and is appended to the most recent `ls`.
/// Blank lines are skipped.
pub fn parse_transcript<I, S>(lines: I) -> Result<Vec<Command>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut commands: Vec<Command> = Vec::new();
    let mut entry_count = 0usize;

    for (index, raw) in lines.into_iter().enumerate() {
        let line = index + 1;
        let text = raw.as_ref().trim();
        if text.is_empty() {
            continue;
        }

        if let Some(rest) = text.strip_prefix(COMMAND_MARKER) {
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                return Err(TranscriptError::MalformedCommand {
                    line,
                    reason: format!("expected whitespace after '{COMMAND_MARKER}'"),
                });
            }
            commands.push(parse_command(line, rest)?);
            continue;
        }

        match commands.last_mut() {
            Some(Command::List { entries }) => {
                entries.push(parse_entry(line, text)?);
                entry_count += 1;
            }
            Some(_) => {
                return Err(TranscriptError::MalformedCommand {
                    line,
                    reason: "listing output after a command that produces none".to_string(),
                });
            }
            None => {
                return Err(TranscriptError::MalformedCommand {
                    line,
                    reason: "listing output before any command".to_string(),
                });
            }
        }
    }

    debug!(commands = commands.len(), entries = entry_count, "transcript parsed");
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::Entry;

    #[test]
    fn attaches_output_to_latest_listing() {
        let commands = parse_transcript(["$ cd /", "$ ls", "dir a", "10 b", "$ cd a"])
            .expect("parse");
        assert_eq!(
            commands,
            vec![
                Command::GoToRoot,
                Command::List {
                    entries: vec![
                        Entry::Directory {
                            name: "a".to_string()
                        },
                        Entry::File {
                            name: "b".to_string(),
                            size: 10
                        },
                    ]
                },
                Command::GoToChild {
                    target: "a".to_string()
                },
            ]
        );
    }

    #[test]
    fn output_before_any_command_is_malformed() {
        let err = parse_transcript(["dir a", "$ cd /"]).expect_err("no command");
        assert!(matches!(err, TranscriptError::MalformedCommand { line: 1, .. }));
    }

    #[test]
    fn output_after_cd_is_malformed() {
        let err = parse_transcript(["$ cd /", "10 b"]).expect_err("cd has no output");
        assert!(matches!(err, TranscriptError::MalformedCommand { line: 2, .. }));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let commands = parse_transcript(["", "$ cd /", "   ", "$ ls", ""]).expect("parse");
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn entry_errors_report_their_line() {
        let err = parse_transcript(["$ ls", "dir a", "12x b"]).expect_err("bad size");
        assert!(matches!(err, TranscriptError::MalformedEntry { line: 3, .. }));
    }

    #[test]
    fn empty_transcript_has_no_commands() {
        let lines: Vec<String> = Vec::new();
        assert!(parse_transcript(lines).expect("parse").is_empty());
    }

    #[test]
    fn marker_must_be_followed_by_whitespace() {
        let err = parse_transcript(["$ cd /", "$ls"]).expect_err("no space");
        assert!(matches!(err, TranscriptError::MalformedCommand { line: 2, .. }));
        let err = parse_transcript(["$cd a"]).expect_err("no space");
        assert!(matches!(err, TranscriptError::MalformedCommand { line: 1, .. }));
        assert!(parse_transcript(["$\tls"]).is_ok());
    }

    #[test]
    fn bare_marker_is_missing_its_keyword() {
        let err = parse_transcript(["$"]).expect_err("bare marker");
        assert!(matches!(err, TranscriptError::MalformedCommand { line: 1, .. }));
    }
}
