//! Grand totals across scanned directories.

use serde::{Deserialize, Serialize};

use super::stats::{GroupCounts, LineCount, Record, RecordKind};

/// Per-group sums over every directory record of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub counts: GroupCounts,
}

impl Totals {
    /// Sum the directory records.
    ///
    /// File records are skipped: the directory aggregate that contains a
    /// file already includes its lines.
    pub fn from_records<'a>(
        group_count: usize,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> Self {
        let mut counts = GroupCounts::zeroed(group_count);
        for record in records {
            if let RecordKind::Directory { counts: dir } = &record.kind {
                counts += dir;
            }
        }
        Self { counts }
    }

    /// Sum across every group.
    pub fn grand_total(&self) -> LineCount {
        self.counts.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn dir(label: &str, entries: &[(usize, u64, u64)]) -> Record {
        let mut counts = GroupCounts::zeroed(3);
        for &(group, non_empty, total) in entries {
            counts.add(group, LineCount::new(non_empty, total));
        }
        Record::directory(label, PathBuf::from(label), counts)
    }

    #[test]
    fn test_totals_sum_directories() {
        let records = vec![
            dir(".", &[(0, 1, 2)]),
            dir("src", &[(0, 10, 12), (1, 5, 5)]),
            dir("tools", &[(2, 7, 9)]),
        ];
        let totals = Totals::from_records(3, &records);

        assert_eq!(totals.counts.get(0), Some(LineCount::new(11, 14)));
        assert_eq!(totals.counts.get(1), Some(LineCount::new(5, 5)));
        assert_eq!(totals.counts.get(2), Some(LineCount::new(7, 9)));
        assert_eq!(totals.grand_total(), LineCount::new(23, 28));
    }

    #[test]
    fn test_totals_skip_file_records() {
        let records = vec![
            dir("src", &[(1, 5, 6)]),
            Record::file("src/a.cc", PathBuf::from("src/a.cc"), 1, LineCount::new(5, 6)),
        ];
        let totals = Totals::from_records(3, &records);

        assert_eq!(totals.grand_total(), LineCount::new(5, 6));
    }

    #[test]
    fn test_totals_are_order_independent() {
        let mut records = vec![
            dir("a", &[(0, 1, 1)]),
            dir("b", &[(1, 2, 3)]),
            dir("c", &[(0, 4, 4), (2, 8, 9)]),
        ];
        let forward = Totals::from_records(3, &records);
        records.reverse();
        let backward = Totals::from_records(3, &records);
        records.swap(0, 1);
        let shuffled = Totals::from_records(3, &records);

        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_totals_of_nothing() {
        let totals = Totals::from_records(4, std::iter::empty());
        assert_eq!(totals.counts.len(), 4);
        assert_eq!(totals.grand_total(), LineCount::default());
    }
}
