//! Reading transcript lines from a file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Where a transcript comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptSource<'a> {
    Stdin,
    File(&'a Path),
}

impl<'a> TranscriptSource<'a> {
    /// `None` and `-` select stdin; anything else is a file path.
    pub fn from_arg(path: Option<&'a Path>) -> Self {
        match path {
            Some(path) if path.as_os_str() != "-" => TranscriptSource::File(path),
            _ => TranscriptSource::Stdin,
        }
    }
}

pub fn read_transcript(source: TranscriptSource<'_>) -> Result<Vec<String>> {
    match source {
        TranscriptSource::Stdin => {
            read_lines(io::stdin().lock()).context("read transcript from stdin")
        }
        TranscriptSource::File(path) => {
            let file =
                File::open(path).with_context(|| format!("open transcript {}", path.display()))?;
            let lines = read_lines(BufReader::new(file))
                .with_context(|| format!("read transcript {}", path.display()))?;
            debug!(path = %path.display(), lines = lines.len(), "transcript read");
            Ok(lines)
        }
    }
}

/// Collect every line from `reader`, without line terminators.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    Ok(lines)
}
