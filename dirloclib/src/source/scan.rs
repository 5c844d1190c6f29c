//! Directory scanning and tree walking.
//!
//! The walker scans the root's own files, then every top-level
//! subdirectory recursively, producing one [`Record`] per directory (and
//! one per matched file when `show_files` is set).

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::data::counter::count_file;
use crate::data::stats::{GroupCounts, Record};
use crate::error::DirlocError;
use crate::options::{Depth, ScanConfig};
use crate::Result;

/// Label for a path relative to the scanned root.
///
/// The root itself is labeled `.`.
pub fn make_label(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.to_string_lossy().to_string(),
        Err(_) => path.to_string_lossy().to_string(),
    }
}

/// Keep every file and every directory whose name is not deny-listed.
///
/// The starting directory itself is always kept.
fn is_allowed(entry: &DirEntry, config: &ScanConfig) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let denied = config.is_denied(entry.file_name());
    if denied {
        debug!("skipping deny-listed directory {}", entry.path().display());
    }
    !denied
}

/// Scan one directory and aggregate line counts per extension group.
///
/// Returns the directory record first, followed by one record per matched
/// file when `config.show_files` is set. Labels are relative to `root`.
///
/// # Example
///
/// ```rust
/// use dirloclib::{scan_directory, Depth, ScanConfig};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.py"), "x = 1\n\ny = 2\nprint(x)\n").unwrap();
/// fs::write(dir.path().join("b.cc"), "int a;\nint b;\n").unwrap();
///
/// let config = ScanConfig::new();
/// let records = scan_directory(dir.path(), dir.path(), Depth::Immediate, &config).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].total().total, 6);
/// ```
pub fn scan_directory(
    root: &Path,
    dir: &Path,
    depth: Depth,
    config: &ScanConfig,
) -> Result<Vec<Record>> {
    debug!("scanning {} ({:?})", dir.display(), depth);

    let mut walker = WalkDir::new(dir).sort_by_file_name();
    if depth == Depth::Immediate {
        walker = walker.max_depth(1);
    }

    let group_count = config.group_count();
    let mut counts = GroupCounts::zeroed(group_count);
    let mut files = Vec::new();

    for entry in walker.into_iter().filter_entry(|e| is_allowed(e, config)) {
        let entry = entry?;
        let path = entry.path();

        if entry.depth() == 0 || !path.is_file() {
            continue;
        }

        let Some(group) = config.classify(path) else {
            continue;
        };

        let count = count_file(path);
        counts.add(group, count);

        if config.show_files {
            files.push(Record::file(
                make_label(path, root),
                path.to_path_buf(),
                group,
                count,
            ));
        }
    }

    let mut records = Vec::with_capacity(files.len() + 1);
    records.push(Record::directory(
        make_label(dir, root),
        dir.to_path_buf(),
        counts,
    ));
    records.extend(files);
    Ok(records)
}

/// Walk a tree and collect one record per top-level directory.
///
/// 1. The root's own files are scanned non-recursively.
/// 2. Every immediate subdirectory not on the deny-list is scanned
///    recursively.
///
/// Any failure to list a directory aborts the walk.
///
/// # Example
///
/// ```rust
/// use dirloclib::{walk_tree, ScanConfig};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir_all(dir.path().join("src/core")).unwrap();
/// fs::write(dir.path().join("src/core/a.cc"), "int a;\n").unwrap();
///
/// let records = walk_tree(dir.path(), &ScanConfig::new()).unwrap();
/// let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
/// assert_eq!(labels, [".", "src"]);
/// ```
pub fn walk_tree(root: impl AsRef<Path>, config: &ScanConfig) -> Result<Vec<Record>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(DirlocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(DirlocError::NotADirectory(root.to_path_buf()));
    }

    let mut records = scan_directory(root, root, Depth::Immediate, config)?;

    for sub_dir in top_level_dirs(root, config)? {
        records.extend(scan_directory(root, &sub_dir, Depth::Recursive, config)?);
    }

    Ok(records)
}

/// Immediate subdirectories of `root` that are not deny-listed, by name.
fn top_level_dirs(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();

        // Follows symlinks, so a link to a directory is scanned too.
        if !path.is_dir() {
            continue;
        }
        if config.is_denied(entry.file_name()) {
            debug!("skipping deny-listed directory {}", path.display());
            continue;
        }
        dirs.push(path.to_path_buf());
    }

    Ok(dirs)
}
