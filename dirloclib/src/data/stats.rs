//! Core data structures for line statistics.
//!
//! Counting produces three layers of data:
//!
//! - [`LineCount`]: the `(non_empty, total)` pair measured for one file
//! - [`GroupCounts`]: one `LineCount` per extension group, in group order
//! - [`Record`]: a labeled row, either a directory aggregate or a single file
//!
//! Records are tagged with [`RecordKind`] so that consumers never have to
//! guess whether a row is a file or a directory from the shape of its counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Non-empty and total line counts.
///
/// `non_empty` never exceeds `total` for counts produced by the counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCount {
    /// Lines holding at least one non-whitespace character
    pub non_empty: u64,
    /// All lines, blank or not
    pub total: u64,
}

impl LineCount {
    /// Create a new count.
    pub fn new(non_empty: u64, total: u64) -> Self {
        Self { non_empty, total }
    }

    /// Number of whitespace-only lines.
    pub fn blank(&self) -> u64 {
        self.total.saturating_sub(self.non_empty)
    }

    pub fn is_zero(&self) -> bool {
        self.total == 0
    }
}

impl Add for LineCount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            non_empty: self.non_empty + other.non_empty,
            total: self.total + other.total,
        }
    }
}

impl AddAssign for LineCount {
    fn add_assign(&mut self, other: Self) {
        self.non_empty += other.non_empty;
        self.total += other.total;
    }
}

impl Sum for LineCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a LineCount> for LineCount {
    fn sum<I: Iterator<Item = &'a LineCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for LineCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.non_empty, self.total)
    }
}

/// One [`LineCount`] per extension group, indexed by group position.
///
/// The derived total is never stored; it is always recomputed from the
/// group entries so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCounts {
    counts: Vec<LineCount>,
}

impl GroupCounts {
    /// All-zero counts for `group_count` groups.
    pub fn zeroed(group_count: usize) -> Self {
        Self {
            counts: vec![LineCount::default(); group_count],
        }
    }

    /// Counts for a single file: zero everywhere except `group`.
    pub fn single(group_count: usize, group: usize, count: LineCount) -> Self {
        let mut counts = Self::zeroed(group_count);
        counts.add(group, count);
        counts
    }

    /// Add a file's count into one group.
    ///
    /// # Panics
    ///
    /// Panics if `group` is out of range for these counts.
    pub fn add(&mut self, group: usize, count: LineCount) {
        self.counts[group] += count;
    }

    /// Count for the group at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<LineCount> {
        self.counts.get(index).copied()
    }

    /// Number of groups these counts cover.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Per-group counts in group order.
    pub fn iter(&self) -> impl Iterator<Item = &LineCount> + '_ {
        self.counts.iter()
    }

    /// Element-wise sum across all groups.
    pub fn total(&self) -> LineCount {
        self.counts.iter().sum()
    }
}

impl AddAssign<&GroupCounts> for GroupCounts {
    fn add_assign(&mut self, other: &GroupCounts) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += *theirs;
        }
    }
}

/// What a [`Record`] describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordKind {
    /// Aggregate over every matched file in a directory
    Directory { counts: GroupCounts },
    /// One matched file, counted in exactly one group
    File { group: usize, count: LineCount },
}

/// A labeled row of line statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Path relative to the scanned root (`.` for the root itself)
    pub label: String,
    /// Path on disk
    pub path: PathBuf,
    #[serde(flatten)]
    pub kind: RecordKind,
}

impl Record {
    /// Create a directory aggregate record.
    pub fn directory(label: impl Into<String>, path: PathBuf, counts: GroupCounts) -> Self {
        Self {
            label: label.into(),
            path,
            kind: RecordKind::Directory { counts },
        }
    }

    /// Create a single-file record.
    pub fn file(label: impl Into<String>, path: PathBuf, group: usize, count: LineCount) -> Self {
        Self {
            label: label.into(),
            path,
            kind: RecordKind::File { group, count },
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, RecordKind::Directory { .. })
    }

    /// Total over every group for this record.
    pub fn total(&self) -> LineCount {
        match &self.kind {
            RecordKind::Directory { counts } => counts.total(),
            RecordKind::File { count, .. } => *count,
        }
    }

    /// Expand the record into one entry per group.
    ///
    /// File records get zeros in every group but their own.
    pub fn group_counts(&self, group_count: usize) -> GroupCounts {
        match &self.kind {
            RecordKind::Directory { counts } => counts.clone(),
            RecordKind::File { group, count } => GroupCounts::single(group_count, *group, *count),
        }
    }
}
