//! Failure conditions raised while parsing, replaying, or querying a transcript.
//!
//! Every variant is fatal. Nothing in `core` retries or downgrades these to
//! warnings; callers decide how to surface them.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscriptError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// Unknown keyword, bad arity, or listing output with no open `ls`.
    #[error("line {line}: malformed command: {reason}")]
    MalformedCommand { line: usize, reason: String },

    /// A listing line that is neither `dir <name>` nor `<size> <name>`.
    #[error("line {line}: malformed entry {text:?}: {reason}")]
    MalformedEntry {
        line: usize,
        text: String,
        reason: String,
    },

    /// `cd ..` issued while the cursor sits on the root.
    #[error("command {command}: cannot ascend above the root directory")]
    NoParentDirectory { command: usize },

    /// Wide enough to report a need past `u64::MAX` when `required` exceeds `capacity`.
    #[error("no directory is large enough to free {needed} bytes")]
    NoDirectoryLargeEnough { needed: u128 },

    /// File sizes under `path` add up past `u64::MAX`.
    #[error("total size under {path} does not fit in 64 bits")]
    SizeOverflow { path: String },
}

impl TranscriptError {
    /// True for errors caused by the transcript text itself rather than a query.
    pub fn is_malformed_transcript(&self) -> bool {
        matches!(
            self,
            TranscriptError::MalformedCommand { .. }
                | TranscriptError::MalformedEntry { .. }
                | TranscriptError::NoParentDirectory { .. }
                | TranscriptError::SizeOverflow { .. }
        )
    }
}
