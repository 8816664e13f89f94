//! Replays parsed commands against a single cursor to build the tree.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::core::command::Command;
use crate::core::entry::Entry;
use crate::core::error::{Result, TranscriptError};
use crate::core::tree::{DirId, DirectoryTree};

/// Replay `commands` against `tree`, starting with the cursor on its root.
///
/// Directories are created on the first `cd` into them, never on `dir`
/// announcements. A failed replay leaves the tree partially built.
pub fn replay(tree: &mut DirectoryTree, commands: &[Command]) -> Result<()> {
    let mut cursor = tree.root();
    let mut listed: HashSet<DirId> = HashSet::new();

    for (index, command) in commands.iter().enumerate() {
        cursor = match command {
            Command::GoToRoot => tree.root_of(cursor),
            Command::GoToParent => tree
                .parent(cursor)
                .ok_or(TranscriptError::NoParentDirectory { command: index + 1 })?,
            Command::GoToChild { target } => tree.ensure_child(cursor, target),
            Command::List { entries } => {
                if !listed.insert(cursor) {
                    warn!(path = %tree.path_of(cursor), "directory listed more than once");
                }
                for entry in entries {
                    match entry {
                        Entry::File { name, size } => tree.add_file(cursor, name, *size),
                        Entry::Directory { .. } => {
                            debug!(name = entry.name(), "subdirectory announced");
                        }
                    }
                }
                cursor
            }
        };
    }

    info!(
        directories = tree.directory_count(),
        files = tree.file_count(),
        "replay complete"
    );
    debug!(cursor = cursor.index(), "final cursor");
    Ok(())
}

/// Replay `commands` into a fresh tree.
pub fn build_tree(commands: &[Command]) -> Result<DirectoryTree> {
    let mut tree = DirectoryTree::new();
    replay(&mut tree, commands)?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_transcript;

    fn build(lines: &[&str]) -> Result<DirectoryTree> {
        build_tree(&parse_transcript(lines.iter().copied())?)
    }

    #[test]
    fn dir_announcement_does_not_create_directory() {
        let tree = build(&["$ cd /", "$ ls", "dir a", "10 b"]).expect("build");
        assert_eq!(tree.directory_count(), 1);
        assert_eq!(tree.get(tree.root()).files().len(), 1);
    }

    #[test]
    fn revisiting_a_directory_reuses_it() {
        let tree = build(&["$ cd x", "$ cd ..", "$ cd x"]).expect("build");
        assert_eq!(tree.get(tree.root()).children().len(), 1);
    }

    #[test]
    fn ascend_at_root_fails() {
        let err = build(&["$ cd /", "$ cd .."]).expect_err("no parent");
        assert_eq!(err, TranscriptError::NoParentDirectory { command: 2 });
    }

    #[test]
    fn cd_root_from_deep_directory_returns_to_root() {
        let tree = build(&["$ cd a", "$ cd b", "$ cd /", "$ ls", "7 top"]).expect("build");
        assert_eq!(tree.get(tree.root()).files()[0].name, "top");
    }

    #[test]
    fn relisting_appends_files() {
        let tree = build(&["$ ls", "1 f", "$ ls", "1 f"]).expect("build");
        assert_eq!(tree.get(tree.root()).files().len(), 2);
    }

    #[test]
    fn replay_extends_an_existing_tree() {
        let mut tree = DirectoryTree::new();
        let first = parse_transcript(["$ cd a", "$ ls", "3 x"]).expect("parse");
        let second = parse_transcript(["$ cd a", "$ ls", "4 y"]).expect("parse");
        replay(&mut tree, &first).expect("first replay");
        replay(&mut tree, &second).expect("second replay");
        let a = tree.child(tree.root(), "a").expect("a");
        assert_eq!(tree.get(a).files().len(), 2);
        assert_eq!(tree.directory_count(), 2);
    }
}
