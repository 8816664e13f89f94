//! Test-only helpers for building transcripts and trees.

use crate::core::builder::build_tree;
use crate::core::error::Result;
use crate::core::parser::parse_transcript;
use crate::core::tree::DirectoryTree;

/// Sample session with two top-level directories and one nested one.
pub const CANONICAL_TRANSCRIPT: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

/// Parse and replay a newline-separated transcript.
pub fn build_from_str(transcript: &str) -> Result<DirectoryTree> {
    build_tree(&parse_transcript(transcript.lines())?)
}

/// A directory to emit into a generated transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirSpec {
    pub name: String,
    pub files: Vec<(String, u64)>,
    pub children: Vec<DirSpec>,
}

impl DirSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            files: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_file(mut self, name: &str, size: u64) -> Self {
        self.files.push((name.to_string(), size));
        self
    }

    pub fn with_child(mut self, child: DirSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Sum of every file size below and including this directory.
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|(_, size)| size).sum::<u64>()
            + self.children.iter().map(DirSpec::total_size).sum::<u64>()
    }
}

/// Emit the transcript a depth-first `cd`/`ls` session over `root` would produce.
///
/// `root` stands for `/`; its own name is ignored.
pub fn transcript_for(root: &DirSpec) -> Vec<String> {
    let mut lines = vec!["$ cd /".to_string()];
    emit_dir(root, &mut lines);
    lines
}

fn emit_dir(dir: &DirSpec, lines: &mut Vec<String>) {
    lines.push("$ ls".to_string());
    for child in &dir.children {
        lines.push(format!("dir {}", child.name));
    }
    for (name, size) in &dir.files {
        lines.push(format!("{} {}", size, name));
    }
    for child in &dir.children {
        lines.push(format!("$ cd {}", child.name));
        emit_dir(child, lines);
        lines.push("$ cd ..".to_string());
    }
}
