//! Output formatting: present records as tables.
//!
//! This module handles the final stage of the pipeline - turning records
//! and totals into something a person (or a script) can read. It provides:
//!
//! - **LineTable**: table-ready data with headers, rows, and a footer
//! - **TableRenderer**: fixed-width text with periodic headers and colors
//!
//! `LineTable` serializes directly to JSON; the renderer only formats.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dirloclib::output::{LineTable, TableOptions, TableRenderer};
//!
//! let table = LineTable::build(&config.groups, &records, &totals);
//! print!("{}", TableRenderer::new(TableOptions::new()).render(&table));
//! ```

pub mod table;

pub use table::{LineTable, RowKind, TableOptions, TableRenderer, TableRow};
