//! Structural validation for `fsreplay check`.

use crate::core::error::Result;
use crate::core::invariants::validate_invariants;
use crate::core::query::size;
use crate::core::tree::DirectoryTree;

/// Structured check outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Tree is sound.
    Sound(CheckSummary),
    /// At least one invariant failed.
    Violations(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub directories: usize,
    pub files: usize,
    pub total_size: u64,
}

/// Validate tree shape and cross-check the recursive root size against a flat file sum.
///
/// Fails only when the recursive root size overflows.
pub fn check_tree(tree: &DirectoryTree) -> Result<CheckOutcome> {
    let mut errors = validate_invariants(tree);
    let total_size = size(tree, tree.root())?;
    match tree.total_file_size() {
        Some(flat) if flat == total_size => {}
        Some(flat) => errors.push(format!(
            "root size {} differs from flat file sum {}",
            total_size, flat
        )),
        None => errors.push("flat file sum exceeds u64".to_string()),
    }
    if !errors.is_empty() {
        return Ok(CheckOutcome::Violations(errors));
    }
    Ok(CheckOutcome::Sound(CheckSummary {
        directories: tree.directory_count(),
        files: tree.file_count(),
        total_size,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TranscriptError;
    use crate::test_support::{CANONICAL_TRANSCRIPT, build_from_str};

    #[test]
    fn canonical_tree_is_sound() {
        let tree = build_from_str(CANONICAL_TRANSCRIPT).expect("build");
        assert_eq!(
            check_tree(&tree).expect("check"),
            CheckOutcome::Sound(CheckSummary {
                directories: 4,
                files: 10,
                total_size: 48_381_165,
            })
        );
    }

    #[test]
    fn violations_are_collected() {
        let mut tree = DirectoryTree::new();
        let root = tree.root();
        let a = tree.ensure_child(root, "a");
        tree.dir_mut(root).children.push(a);
        tree.add_file(a, "x", 1);
        match check_tree(&tree).expect("check") {
            CheckOutcome::Violations(errors) => {
                assert!(errors.iter().any(|err| err.contains("duplicate sibling")));
                assert!(errors.iter().any(|err| err.contains("flat file sum")));
            }
            other => panic!("expected violations, got {other:?}"),
        }
    }

    #[test]
    fn overflowing_root_size_is_an_error() {
        let tree = build_from_str("$ ls\n18446744073709551615 a\n1 b\n").expect("build");
        let err = check_tree(&tree).expect_err("overflow");
        assert!(matches!(err, TranscriptError::SizeOverflow { .. }));
    }
}
