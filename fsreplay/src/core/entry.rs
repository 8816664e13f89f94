//! One line of `ls` output.

use crate::core::error::{Result, TranscriptError};

/// Marker that announces a subdirectory in listing output.
pub const DIRECTORY_MARKER: &str = "dir";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// `dir <name>`: informational only, the directory is created on `cd`.
    Directory { name: String },
    /// `<size> <name>`
    File { name: String, size: u64 },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Directory { name } | Entry::File { name, .. } => name.as_str(),
        }
    }
}

/// Parse a listing line. `line` is the 1-based transcript line number used in errors.
///
/// The name is everything after the first token, so names containing spaces survive.
pub fn parse_entry(line: usize, text: &str) -> Result<Entry> {
    let trimmed = text.trim();
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    let malformed = |reason: &str| TranscriptError::MalformedEntry {
        line,
        text: text.to_string(),
        reason: reason.to_string(),
    };

    if rest.is_empty() {
        return Err(malformed("missing name"));
    }

    if head == DIRECTORY_MARKER {
        return Ok(Entry::Directory {
            name: rest.to_string(),
        });
    }

    let size = head
        .parse::<u64>()
        .map_err(|_| malformed("size is not a non-negative integer"))?;
    Ok(Entry::File {
        name: rest.to_string(),
        size,
    })
}
