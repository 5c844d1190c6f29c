//! Source discovery: find and classify files to count.
//!
//! This module handles the first stage of the pipeline - deciding which
//! files are counted and under which directory they are reported. It
//! provides:
//!
//! - **Extension groups**: map file extensions to report columns
//! - **Scanning**: aggregate one directory, immediately or recursively
//! - **Tree walking**: scan the root and each top-level subdirectory
//!
//! ## Example
//!
//! ```rust,ignore
//! use dirloclib::source::walk_tree;
//! use dirloclib::ScanConfig;
//!
//! let records = walk_tree(".", &ScanConfig::new().show_files(true))?;
//! ```

pub mod groups;
pub mod scan;

pub use groups::{default_groups, ExtensionGroup};
pub use scan::{make_label, scan_directory, walk_tree};
