//! # dirloclib
//!
//! A line counter library that reports source size per directory, broken
//! down by groups of file extensions.
//!
//! ## Overview
//!
//! A scan walks a root directory and produces one record per top-level
//! directory:
//!
//! - the root's own files are counted non-recursively
//! - every immediate subdirectory is counted recursively
//! - deny-listed directories (`.git`, `out`, `third_party`, ...) are skipped
//!
//! Each record holds, per extension group, the number of non-empty lines
//! and the number of total lines. Optionally a record is emitted for every
//! matched file as well.
//!
//! ## Pipeline
//!
//! - [`source`]: extension groups, directory scanning, tree walking
//! - [`data`]: line counting, statistics types, totals
//! - [`output`]: table building and text rendering
//!
//! ## Example
//!
//! ```rust
//! use dirloclib::{
//!     walk_tree, LineCount, LineTable, ScanConfig, TableOptions, TableRenderer, Totals,
//! };
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.py"), "import os\n\nprint(os.sep)\n").unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(dir.path().join("src/main.cc"), "int main() {\n  return 0;\n}\n").unwrap();
//!
//! let config = ScanConfig::new();
//! let records = walk_tree(dir.path(), &config).unwrap();
//! let totals = Totals::from_records(config.group_count(), &records);
//! assert_eq!(totals.grand_total(), LineCount::new(5, 6));
//!
//! let table = LineTable::build(&config.groups, &records, &totals);
//! let text = TableRenderer::new(TableOptions::new()).render(&table);
//! assert!(text.contains("5/6"));
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    count_file, count_reader, try_count_file, GroupCounts, LineCount, Record, RecordKind, Totals,
};
pub use error::DirlocError;
pub use options::{Depth, ScanConfig, DEFAULT_DENY_LIST};
pub use output::{LineTable, RowKind, TableOptions, TableRenderer, TableRow};
pub use source::{default_groups, make_label, scan_directory, walk_tree, ExtensionGroup};

/// Result type for dirloclib operations
pub type Result<T> = std::result::Result<T, DirlocError>;
