//! Extension groups: classify files into report columns.
//!
//! Each group owns a handful of extensions and compiles one `*.<ext>` glob
//! per extension. Matching is done on the file name only and is
//! case-sensitive, so `Notes.MD` is not an `md` file.

use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::error::DirlocError;
use crate::Result;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A named bucket of file extensions, reported as one column.
#[derive(Debug, Clone)]
pub struct ExtensionGroup {
    /// Stable identifier (used in JSON output)
    pub id: String,
    /// Column title
    pub title: String,
    /// Extensions without the leading dot
    pub extensions: Vec<String>,
    patterns: Vec<Pattern>,
}

impl ExtensionGroup {
    /// Create a group, compiling a glob pattern per extension.
    ///
    /// Extensions must be non-empty, must not start with a dot and must not
    /// contain a path separator.
    pub fn new(id: &str, title: &str, extensions: &[&str]) -> Result<Self> {
        if extensions.is_empty() {
            return Err(DirlocError::InvalidGroup {
                id: id.to_string(),
                message: "no extensions given".to_string(),
            });
        }

        let mut patterns = Vec::with_capacity(extensions.len());
        for ext in extensions {
            if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
                return Err(DirlocError::InvalidGroup {
                    id: id.to_string(),
                    message: format!("unusable extension '{ext}'"),
                });
            }
            let pattern = format!("*.{ext}");
            let compiled = Pattern::new(&pattern).map_err(|e| DirlocError::InvalidGlob {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            patterns.push(compiled);
        }

        Ok(Self {
            id: id.to_string(),
            title: title.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            patterns,
        })
    }

    /// Check whether a file name belongs to this group.
    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches_with(file_name, MATCH_OPTIONS))
    }

    /// Check a path by its final component.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.matches(n))
    }
}

/// The built-in groups, in column order.
///
/// # Panics
///
/// If a built-in extension is unusable.
pub fn default_groups() -> Vec<ExtensionGroup> {
    const DEFAULTS: &[(&str, &str, &[&str])] = &[
        ("c_headers", "C/C++ Headers", &["h", "hpp"]),
        ("c_code", "C/C++ Code", &["c", "cc", "cpp"]),
        ("python", "Python", &["py"]),
        ("gn", "GN", &["gn"]),
        ("extras", "Other", &["license", "txt", "md"]),
    ];

    DEFAULTS
        .iter()
        .map(|(id, title, exts)| {
            ExtensionGroup::new(id, title, exts).expect("built-in extension groups are valid")
        })
        .collect()
}
