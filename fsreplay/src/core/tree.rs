//! Arena-backed directory tree.
//!
//! Directories live in a single `Vec` owned by [`DirectoryTree`] and refer to
//! each other by [`DirId`]. A child is owned by the arena and listed by its
//! parent; `parent` is a back link only. Nodes are never removed, so a `DirId`
//! stays valid for the lifetime of the tree that issued it.

use std::collections::HashMap;

use tracing::debug;

/// Name given to the root directory.
pub const ROOT_NAME: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirId(usize);

impl DirId {
    pub const ROOT: DirId = DirId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct Directory {
    pub(crate) name: String,
    pub(crate) parent: Option<DirId>,
    pub(crate) children: Vec<DirId>,
    pub(crate) child_index: HashMap<String, DirId>,
    pub(crate) files: Vec<File>,
}

impl Directory {
    fn new(name: &str, parent: Option<DirId>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            child_index: HashMap::new(),
            files: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<DirId> {
        self.parent
    }

    /// Child directories in creation order.
    pub fn children(&self) -> &[DirId] {
        &self.children
    }

    /// Files in the order they were listed.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn child(&self, name: &str) -> Option<DirId> {
        self.child_index.get(name).copied()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryTree {
    dirs: Vec<Directory>,
}

impl Default for DirectoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryTree {
    /// A tree holding only an empty root.
    pub fn new() -> Self {
        Self {
            dirs: vec![Directory::new(ROOT_NAME, None)],
        }
    }

    pub fn root(&self) -> DirId {
        DirId::ROOT
    }

    /// Look up a directory by id.
    ///
    /// Ids are only valid for the tree that issued them; an id from another
    /// tree may point past the end of this arena and panic.
    pub fn get(&self, id: DirId) -> &Directory {
        &self.dirs[id.0]
    }

    pub fn directory_count(&self) -> usize {
        self.dirs.len()
    }

    pub fn file_count(&self) -> usize {
        self.dirs.iter().map(|dir| dir.files.len()).sum()
    }

    /// Every id in creation order.
    pub fn ids(&self) -> impl Iterator<Item = DirId> + '_ {
        (0..self.dirs.len()).map(DirId)
    }

    pub fn parent(&self, id: DirId) -> Option<DirId> {
        self.get(id).parent
    }

    /// Follow parent links until the node without a parent.
    pub fn root_of(&self, id: DirId) -> DirId {
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current
    }

    pub fn child(&self, id: DirId, name: &str) -> Option<DirId> {
        self.get(id).child(name)
    }

    /// Return the child `name` of `parent`, creating it on first use.
    pub fn ensure_child(&mut self, parent: DirId, name: &str) -> DirId {
        if let Some(existing) = self.child(parent, name) {
            return existing;
        }
        let id = DirId(self.dirs.len());
        self.dirs.push(Directory::new(name, Some(parent)));
        let owner = &mut self.dirs[parent.0];
        owner.children.push(id);
        owner.child_index.insert(name.to_string(), id);
        debug!(parent = parent.0, child = id.0, name, "directory created");
        id
    }

    /// Record a file in `dir`. Files are not deduplicated by name.
    pub fn add_file(&mut self, dir: DirId, name: &str, size: u64) {
        self.dirs[dir.0].files.push(File {
            name: name.to_string(),
            size,
        });
    }

    /// Absolute `/`-separated path of `id`, `/` for the root.
    pub fn path_of(&self, id: DirId) -> String {
        let mut segments = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            segments.push(self.get(current).name.as_str());
            current = parent;
        }
        if segments.is_empty() {
            return ROOT_NAME.to_string();
        }
        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    /// Flat sum of every file size in the tree, ignoring structure.
    ///
    /// `None` when the sum does not fit in a `u64`.
    pub fn total_file_size(&self) -> Option<u64> {
        self.dirs
            .iter()
            .flat_map(|dir| dir.files.iter())
            .try_fold(0u64, |total, file| total.checked_add(file.size))
    }

    #[cfg(test)]
    pub(crate) fn dir_mut(&mut self, id: DirId) -> &mut Directory {
        &mut self.dirs[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_only_root() {
        let tree = DirectoryTree::new();
        assert_eq!(tree.directory_count(), 1);
        assert_eq!(tree.get(tree.root()).name(), "/");
        assert_eq!(tree.parent(tree.root()), None);
    }

    #[test]
    fn ensure_child_is_idempotent() {
        let mut tree = DirectoryTree::new();
        let root = tree.root();
        let first = tree.ensure_child(root, "a");
        let second = tree.ensure_child(root, "a");
        assert_eq!(first, second);
        assert_eq!(tree.get(root).children().len(), 1);
        assert_eq!(tree.parent(first), Some(root));
    }

    #[test]
    fn same_name_under_different_parents_is_distinct() {
        let mut tree = DirectoryTree::new();
        let root = tree.root();
        let a = tree.ensure_child(root, "a");
        let nested = tree.ensure_child(a, "a");
        assert_ne!(a, nested);
        assert_eq!(tree.path_of(nested), "/a/a");
    }

    #[test]
    fn root_of_walks_to_the_top() {
        let mut tree = DirectoryTree::new();
        let a = tree.ensure_child(tree.root(), "a");
        let e = tree.ensure_child(a, "e");
        assert_eq!(tree.root_of(e), tree.root());
        assert_eq!(tree.path_of(e), "/a/e");
        assert_eq!(tree.path_of(tree.root()), "/");
    }

    #[test]
    fn files_are_appended_without_deduplication() {
        let mut tree = DirectoryTree::new();
        let root = tree.root();
        tree.add_file(root, "x", 5);
        tree.add_file(root, "x", 5);
        assert_eq!(tree.get(root).files().len(), 2);
        assert_eq!(tree.total_file_size(), Some(10));
        assert_eq!(tree.file_count(), 2);
    }

    #[test]
    fn total_file_size_reports_overflow() {
        let mut tree = DirectoryTree::new();
        let root = tree.root();
        tree.add_file(root, "big", u64::MAX);
        assert_eq!(tree.total_file_size(), Some(u64::MAX));
        tree.add_file(root, "one", 1);
        assert_eq!(tree.total_file_size(), None);
    }

    #[test]
    #[should_panic]
    fn ids_from_another_tree_are_rejected() {
        let mut bigger = DirectoryTree::new();
        let foreign = bigger.ensure_child(bigger.root(), "a");
        let smaller = DirectoryTree::new();
        let _ = smaller.get(foreign);
    }
}
