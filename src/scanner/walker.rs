//! Full-tree file discovery with ignore pruning.

use crate::ignore::IgnoreSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk `root` top-down and collect every file that survives the ignore
/// rules.
///
/// Ignored directories are pruned before descent, so their contents are
/// never visited. Enumeration order is whatever the filesystem yields;
/// it is stable per run but not sorted.
pub fn collect_files(root: &Path, ignore: &IgnoreSet) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !ignore.is_ignored(e.path()))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .collect()
}
