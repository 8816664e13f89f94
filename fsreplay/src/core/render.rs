//! Indented text rendering of a directory tree.

use crate::core::error::Result;
use crate::core::query::directory_sizes;
use crate::core::tree::{DirId, DirectoryTree};

const INDENT: &str = "  ";

/// Render the tree one node per line, subdirectories before files:
///
/// ```text
/// - / (dir, size=48381165)
///   - a (dir, size=94853)
///     - e (dir, size=584)
///       - i (file, size=584)
/// ```
///
/// Fails only when directory sizes overflow.
pub fn render_tree(tree: &DirectoryTree) -> Result<String> {
    let sizes = directory_sizes(tree)?;
    let mut out = String::new();
    render_dir(tree, &sizes, tree.root(), 0, &mut out);
    Ok(out)
}

fn render_dir(tree: &DirectoryTree, sizes: &[u64], id: DirId, depth: usize, out: &mut String) {
    let dir = tree.get(id);
    out.push_str(&format!(
        "{}- {} (dir, size={})\n",
        INDENT.repeat(depth),
        dir.name(),
        sizes[id.index()]
    ));
    for child in dir.children() {
        render_dir(tree, sizes, *child, depth + 1, out);
    }
    for file in dir.files() {
        out.push_str(&format!(
            "{}- {} (file, size={})\n",
            INDENT.repeat(depth + 1),
            file.name,
            file.size
        ));
    }
}
