//! Data collection: count files and aggregate statistics.
//!
//! This module handles the second stage of the pipeline - reading files and
//! turning them into line statistics. It provides:
//!
//! - **Counting**: tolerant per-file line counter (`count_file`)
//! - **Statistics**: core data structures (`LineCount`, `GroupCounts`, `Record`)
//! - **Totals**: grand totals over directory records (`Totals`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use dirloclib::data::count_file;
//!
//! let count = count_file("src/main.cc");
//! println!("{} non-empty of {} lines", count.non_empty, count.total);
//! ```

pub mod counter;
pub mod stats;
pub mod totals;

pub use counter::{count_file, count_reader, try_count_file, LineCounter};
pub use stats::{GroupCounts, LineCount, Record, RecordKind};
pub use totals::Totals;
