//! Read-only size queries over a finished tree.
//!
//! Sizes are derived on every call. Nothing is cached on the tree, so a tree
//! that grows between queries is always reported correctly. All additions are
//! checked: sizes that do not fit in a `u64` fail with
//! [`TranscriptError::SizeOverflow`].

use crate::core::error::{Result, TranscriptError};
use crate::core::tree::{DirId, DirectoryTree};

fn overflow(tree: &DirectoryTree, id: DirId) -> TranscriptError {
    TranscriptError::SizeOverflow {
        path: tree.path_of(id),
    }
}

fn checked_sum<I>(values: I) -> Option<u64>
where
    I: IntoIterator<Item = u64>,
{
    values
        .into_iter()
        .try_fold(0u64, |total, value| total.checked_add(value))
}

fn own_file_size(tree: &DirectoryTree, id: DirId) -> Result<u64> {
    checked_sum(tree.get(id).files().iter().map(|file| file.size))
        .ok_or_else(|| overflow(tree, id))
}

/// Recursive size of `id`: its files plus the sizes of all its subdirectories.
pub fn size(tree: &DirectoryTree, id: DirId) -> Result<u64> {
    let mut total = own_file_size(tree, id)?;
    for child in tree.get(id).children() {
        total = total
            .checked_add(size(tree, *child)?)
            .ok_or_else(|| overflow(tree, id))?;
    }
    Ok(total)
}

/// Sizes of every directory, indexed by [`DirId::index`].
///
/// Children are always created after their parent, so one reverse pass over
/// the arena folds each subtree into its parent.
pub fn directory_sizes(tree: &DirectoryTree) -> Result<Vec<u64>> {
    let mut sizes = tree
        .ids()
        .map(|id| own_file_size(tree, id))
        .collect::<Result<Vec<u64>>>()?;
    for id in tree.ids().collect::<Vec<_>>().into_iter().rev() {
        if let Some(parent) = tree.parent(id) {
            sizes[parent.index()] = sizes[parent.index()]
                .checked_add(sizes[id.index()])
                .ok_or_else(|| overflow(tree, parent))?;
        }
    }
    Ok(sizes)
}

/// Pre-order walk: root first, then each child's subtree in creation order.
pub fn all_directories(tree: &DirectoryTree) -> Vec<DirId> {
    let mut order = Vec::with_capacity(tree.directory_count());
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        order.push(id);
        stack.extend(tree.get(id).children().iter().rev().copied());
    }
    order
}

/// Sum of the sizes of every directory whose size is at most `limit`.
///
/// Nested qualifying directories are counted once each, so files may be
/// counted more than once. That double counting can overflow even when every
/// directory size fits; the error then names the root.
pub fn sum_of_directories_at_most(tree: &DirectoryTree, limit: u64) -> Result<u64> {
    let sizes = directory_sizes(tree)?;
    checked_sum(sizes.into_iter().filter(|size| *size <= limit))
        .ok_or_else(|| overflow(tree, tree.root()))
}

/// Bytes that must be deleted so that `required` bytes are free on a disk of
/// `capacity` bytes. Zero when enough space is already free.
///
/// Computed in `u128`: with `required > capacity` the need can pass `u64::MAX`.
pub fn need_to_free(tree: &DirectoryTree, capacity: u64, required: u64) -> Result<u128> {
    let used = size(tree, tree.root())?;
    Ok((u128::from(used) + u128::from(required)).saturating_sub(u128::from(capacity)))
}

/// Smallest directory whose deletion frees at least [`need_to_free`] bytes.
///
/// Ties go to the directory visited first in [`all_directories`] order.
pub fn smallest_directory_to_free_at_least(
    tree: &DirectoryTree,
    capacity: u64,
    required: u64,
) -> Result<DirId> {
    let needed = need_to_free(tree, capacity, required)?;
    let sizes = directory_sizes(tree)?;
    all_directories(tree)
        .into_iter()
        .filter(|id| u128::from(sizes[id.index()]) >= needed)
        .min_by_key(|id| sizes[id.index()])
        .ok_or(TranscriptError::NoDirectoryLargeEnough { needed })
}
