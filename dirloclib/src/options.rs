//! Input options for scanning.
//!
//! [`ScanConfig`] is built once and handed to the scanner and walker by
//! reference. Nothing in the library reads configuration from global state.

use std::ffi::OsStr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DirlocError;
use crate::source::groups::{default_groups, ExtensionGroup};
use crate::Result;

/// Directory names skipped by default.
pub const DEFAULT_DENY_LIST: &[&str] = &[".git", ".vscode", "out", "third_party"];

/// How deep the directory scanner descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Depth {
    /// Only files directly inside the directory
    Immediate,
    /// Files at any depth below the directory
    #[default]
    Recursive,
}

/// Immutable scan configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Extension groups in column order
    pub groups: Vec<ExtensionGroup>,
    /// Directory names never entered
    pub deny_list: Vec<String>,
    /// Emit a record per matched file in addition to directory aggregates
    pub show_files: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            groups: default_groups(),
            deny_list: DEFAULT_DENY_LIST.iter().map(|s| s.to_string()).collect(),
            show_files: false,
        }
    }
}

impl ScanConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the extension groups.
    ///
    /// A file name may belong to at most one group: two groups sharing an
    /// extension, or one claiming a suffix of another's (`gz` and `tar.gz`),
    /// are rejected.
    pub fn groups(mut self, groups: Vec<ExtensionGroup>) -> Result<Self> {
        for (i, group) in groups.iter().enumerate() {
            for other in &groups[i + 1..] {
                if let Some((a, b)) = overlapping_extension(group, other) {
                    return Err(DirlocError::InvalidGroup {
                        id: other.id.clone(),
                        message: format!(
                            "extension '{b}' overlaps '{a}' of group '{}'",
                            group.id
                        ),
                    });
                }
            }
        }
        self.groups = groups;
        Ok(self)
    }

    /// Add a directory name to the deny-list.
    pub fn deny(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.deny_list.contains(&name) {
            self.deny_list.push(name);
        }
        self
    }

    /// Enable or disable per-file records.
    pub fn show_files(mut self, show: bool) -> Self {
        self.show_files = show;
        self
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Check if a directory name is deny-listed.
    pub fn is_denied(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|n| self.deny_list.iter().any(|d| d == n))
    }

    /// Index of the first group matching the file, if any.
    ///
    /// Groups set through [`ScanConfig::groups`] never overlap, so at most
    /// one group can match.
    pub fn classify(&self, path: &Path) -> Option<usize> {
        self.groups.iter().position(|g| g.matches_path(path))
    }
}

/// A pair of extensions from two groups that can match the same file name.
fn overlapping_extension<'a>(
    first: &'a ExtensionGroup,
    second: &'a ExtensionGroup,
) -> Option<(&'a str, &'a str)> {
    let suffix_of = |long: &str, short: &str| {
        long == short || long.strip_suffix(short).is_some_and(|rest| rest.ends_with('.'))
    };
    first.extensions.iter().find_map(|a| {
        second
            .extensions
            .iter()
            .find(|b| suffix_of(a, b) || suffix_of(b, a))
            .map(|b| (a.as_str(), b.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::new();

        assert_eq!(config.group_count(), 5);
        assert!(!config.show_files);
        assert!(config.is_denied(OsStr::new(".git")));
        assert!(config.is_denied(OsStr::new("third_party")));
        assert!(!config.is_denied(OsStr::new("src")));
    }

    #[test]
    fn test_deny_adds_once() {
        let config = ScanConfig::new().deny("build").deny("build").deny("out");

        assert!(config.is_denied(OsStr::new("build")));
        assert_eq!(config.deny_list.len(), DEFAULT_DENY_LIST.len() + 1);
    }

    #[test]
    fn test_classify() {
        let config = ScanConfig::new();

        assert_eq!(config.classify(Path::new("include/foo.h")), Some(0));
        assert_eq!(config.classify(Path::new("src/foo.cc")), Some(1));
        assert_eq!(config.classify(Path::new("tools/run.py")), Some(2));
        assert_eq!(config.classify(Path::new("BUILD.gn")), Some(3));
        assert_eq!(config.classify(Path::new("README.md")), Some(4));
        assert_eq!(config.classify(Path::new("main.rs")), None);
        assert_eq!(config.classify(Path::new("LICENSE")), None);
    }

    #[test]
    fn test_custom_groups() {
        let groups = vec![ExtensionGroup::new("rust", "Rust", &["rs"]).unwrap()];
        let config = ScanConfig::new().groups(groups).unwrap();

        assert_eq!(config.group_count(), 1);
        assert_eq!(config.classify(Path::new("main.rs")), Some(0));
        assert_eq!(config.classify(Path::new("main.cc")), None);
    }

    #[test]
    fn test_overlapping_groups_are_rejected() {
        let groups = vec![
            ExtensionGroup::new("gzip", "Gzip", &["gz"]).unwrap(),
            ExtensionGroup::new("tarball", "Tarballs", &["tar.gz"]).unwrap(),
        ];
        let err = ScanConfig::new().groups(groups).unwrap_err();
        assert!(matches!(err, DirlocError::InvalidGroup { ref id, .. } if id == "tarball"));

        let groups = vec![
            ExtensionGroup::new("c", "C", &["c", "h"]).unwrap(),
            ExtensionGroup::new("headers", "Headers", &["h"]).unwrap(),
        ];
        assert!(ScanConfig::new().groups(groups).is_err());
    }

    #[test]
    fn test_similar_extensions_do_not_overlap() {
        let groups = vec![
            ExtensionGroup::new("c", "C", &["c"]).unwrap(),
            ExtensionGroup::new("cc", "C++", &["cc"]).unwrap(),
            ExtensionGroup::new("objc", "Objective-C", &["m"]).unwrap(),
            ExtensionGroup::new("make", "Make", &["mm"]).unwrap(),
        ];
        let config = ScanConfig::new().groups(groups).unwrap();

        assert_eq!(config.classify(Path::new("a.c")), Some(0));
        assert_eq!(config.classify(Path::new("a.cc")), Some(1));
        assert_eq!(config.classify(Path::new("a.mm")), Some(3));
    }
}
