//! Read, parse and replay a transcript into a finished tree.

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::builder::build_tree;
use crate::core::parser::parse_transcript;
use crate::core::tree::DirectoryTree;
use crate::io::transcript::{TranscriptSource, read_transcript};

/// Parse `lines` and replay them into a fresh tree.
pub fn replay_lines<I, S>(lines: I) -> Result<DirectoryTree>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let commands = parse_transcript(lines).context("parse transcript")?;
    let tree = build_tree(&commands).context("replay transcript")?;
    debug!(directories = tree.directory_count(), "tree built");
    Ok(tree)
}

/// Load a transcript from `source` and replay it.
pub fn replay_source(source: TranscriptSource<'_>) -> Result<DirectoryTree> {
    let lines = read_transcript(source)?;
    replay_lines(&lines)
}
