//! Aggregate-size report for `fsreplay report`.

use serde::Serialize;

use crate::core::error::Result;
use crate::core::query::{
    need_to_free, size, smallest_directory_to_free_at_least, sum_of_directories_at_most,
};
use crate::core::tree::DirectoryTree;
use crate::io::config::QueryConfig;

/// Both query answers plus the inputs that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_size: u64,
    pub directories: usize,
    pub files: usize,
    pub limit: u64,
    pub sum_at_most_limit: u64,
    pub capacity: u64,
    pub required: u64,
    pub need_to_free: u128,
    pub smallest: SelectedDirectory,
}

/// Directory chosen for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedDirectory {
    pub path: String,
    pub size: u64,
}

/// Run both queries against a finished tree.
pub fn build_report(tree: &DirectoryTree, cfg: &QueryConfig) -> Result<Report> {
    let chosen = smallest_directory_to_free_at_least(tree, cfg.capacity, cfg.required)?;
    Ok(Report {
        total_size: size(tree, tree.root())?,
        directories: tree.directory_count(),
        files: tree.file_count(),
        limit: cfg.limit,
        sum_at_most_limit: sum_of_directories_at_most(tree, cfg.limit)?,
        capacity: cfg.capacity,
        required: cfg.required,
        need_to_free: need_to_free(tree, cfg.capacity, cfg.required)?,
        smallest: SelectedDirectory {
            path: tree.path_of(chosen),
            size: size(tree, chosen)?,
        },
    })
}

/// `report: key=value` lines, one fact group per line.
pub fn render_report(report: &Report) -> String {
    format!(
        "report: directories={} files={} total_size={}\n\
         report: limit={} sum_at_most_limit={}\n\
         report: capacity={} required={} need_to_free={}\n\
         report: smallest_path={} smallest_size={}\n",
        report.directories,
        report.files,
        report.total_size,
        report.limit,
        report.sum_at_most_limit,
        report.capacity,
        report.required,
        report.need_to_free,
        report.smallest.path,
        report.smallest.size,
    )
}
