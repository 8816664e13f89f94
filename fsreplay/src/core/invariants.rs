//! Structural invariants of a directory tree.

use std::collections::HashSet;

use crate::core::tree::{DirId, DirectoryTree};

/// Check the tree shape:
/// - The root has no parent
/// - Sibling names are unique and match the name index
/// - Every child's `parent` points back at the directory listing it
/// - Every non-root directory is listed by exactly one parent
/// - Every directory is reachable from the root
pub fn validate_invariants(tree: &DirectoryTree) -> Vec<String> {
    let mut errors = Vec::new();
    let root = tree.root();

    if let Some(parent) = tree.parent(root) {
        errors.push(format!("root has parent #{}", parent.index()));
    }

    let mut owners: Vec<usize> = vec![0; tree.directory_count()];
    for id in tree.ids() {
        let dir = tree.get(id);
        let mut names = HashSet::new();
        for child in dir.children() {
            owners[child.index()] += 1;
            let child_dir = tree.get(*child);
            let path = tree.path_of(*child);
            if !names.insert(child_dir.name()) {
                errors.push(format!(
                    "{}: duplicate sibling name '{}'",
                    tree.path_of(id),
                    child_dir.name()
                ));
            }
            if child_dir.parent() != Some(id) {
                errors.push(format!("{}: parent link does not match owner", path));
            }
            if dir.child(child_dir.name()) != Some(*child) {
                errors.push(format!("{}: missing from parent name index", path));
            }
        }
        if dir.child_index.len() != dir.children().len() {
            errors.push(format!(
                "{}: name index has {} entries for {} children",
                tree.path_of(id),
                dir.child_index.len(),
                dir.children().len()
            ));
        }
    }

    for id in tree.ids().filter(|id| *id != root) {
        let count = owners[id.index()];
        if count != 1 {
            errors.push(format!(
                "directory #{} '{}' has {} owners",
                id.index(),
                tree.get(id).name(),
                count
            ));
        }
    }

    let reachable = reachable_from_root(tree);
    for id in tree.ids() {
        if !reachable.contains(&id) {
            errors.push(format!(
                "directory #{} '{}' is unreachable from root",
                id.index(),
                tree.get(id).name()
            ));
        }
    }

    errors
}

fn reachable_from_root(tree: &DirectoryTree) -> HashSet<DirId> {
    let mut seen = HashSet::new();
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        if seen.insert(id) {
            stack.extend(tree.get(id).children().iter().copied());
        }
    }
    seen
}
