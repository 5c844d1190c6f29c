//! Table-ready data structures and text rendering.
//!
//! The data flow is:
//! 1. Records and totals (from the walker and aggregator)
//! 2. [`LineTable`] (one row per record, plus a footer)
//! 3. Text (via [`TableRenderer`]) or JSON (by serializing the table)
//!
//! `LineTable` holds numbers, not strings; formatting into
//! `<non_empty>/<total>` cells and coloring happen in the renderer.

use console::Style;
use serde::{Deserialize, Serialize};

use crate::data::stats::{LineCount, Record, RecordKind};
use crate::data::totals::Totals;
use crate::source::groups::ExtensionGroup;

/// Header of the label column.
pub const LABEL_HEADER: &str = "directory";
/// Label of the footer row.
pub const TOTALS_LABEL: &str = "totals";
/// Header of the last column.
pub const TOTAL_HEADER: &str = "total";

/// What a table row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Directory,
    File,
    Totals,
}

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Relative path, or "totals" for the footer
    pub label: String,
    pub kind: RowKind,
    /// One count per extension group, in column order
    pub cells: Vec<LineCount>,
    /// Sum of `cells`
    pub total: LineCount,
}

impl TableRow {
    fn from_record(record: &Record, group_count: usize) -> Self {
        let counts = record.group_counts(group_count);
        let kind = match record.kind {
            RecordKind::Directory { .. } => RowKind::Directory,
            RecordKind::File { .. } => RowKind::File,
        };
        Self {
            label: record.label.clone(),
            kind,
            cells: counts.iter().copied().collect(),
            total: counts.total(),
        }
    }

    fn from_totals(totals: &Totals) -> Self {
        Self {
            label: TOTALS_LABEL.to_string(),
            kind: RowKind::Totals,
            cells: totals.counts.iter().copied().collect(),
            total: totals.grand_total(),
        }
    }
}

/// Table-ready line count data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTable {
    /// Column headers: [label header, group titles..., total]
    pub headers: Vec<String>,
    /// Group identifiers, aligned with the group columns
    pub group_ids: Vec<String>,
    /// Data rows, in record order
    pub rows: Vec<TableRow>,
    /// Totals row
    pub footer: TableRow,
}

impl LineTable {
    /// Build a table from walker records and their totals.
    pub fn build(groups: &[ExtensionGroup], records: &[Record], totals: &Totals) -> Self {
        let mut headers = Vec::with_capacity(groups.len() + 2);
        headers.push(LABEL_HEADER.to_string());
        headers.extend(groups.iter().map(|g| g.title.clone()));
        headers.push(TOTAL_HEADER.to_string());

        LineTable {
            headers,
            group_ids: groups.iter().map(|g| g.id.clone()).collect(),
            rows: records
                .iter()
                .map(|r| TableRow::from_record(r, groups.len()))
                .collect(),
            footer: TableRow::from_totals(totals),
        }
    }
}

/// Options for text rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Reprint the header every this many rows
    pub header_every: usize,
    /// Skip a repeated header when this many rows or fewer remain
    pub header_tail: usize,
    /// Files with more total lines than this are highlighted
    pub large_file_threshold: u64,
    /// Width of every count column
    pub cell_width: usize,
    /// Extra width added to the longest label
    pub label_padding: usize,
    /// Emit ANSI colors
    pub colored: bool,
    /// Print the legend banner above the table
    pub banner: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            header_every: 60,
            header_tail: 15,
            large_file_threshold: 1000,
            cell_width: 18,
            label_padding: 2,
            colored: false,
            banner: true,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the large-file threshold.
    pub fn large_file_threshold(mut self, lines: u64) -> Self {
        self.large_file_threshold = lines;
        self
    }

    /// Enable or disable colors.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Enable or disable the banner.
    pub fn banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Set how often the header repeats.
    pub fn header_every(mut self, rows: usize) -> Self {
        self.header_every = rows.max(1);
        self
    }
}

/// Renders a [`LineTable`] as fixed-width, pipe-delimited text.
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    options: TableOptions,
}

impl TableRenderer {
    pub fn new(options: TableOptions) -> Self {
        Self { options }
    }

    /// Render the banner (if enabled) and the table.
    pub fn render(&self, table: &LineTable) -> String {
        let mut out = String::new();
        if self.options.banner {
            out.push_str(&self.banner());
        }

        let label_width = self.label_width(table);
        let header = self.format_line(label_width, &table.headers[0], table.headers[1..].iter());
        let rule_len = header.chars().count();

        let row_count = table.rows.len();
        let header_every = self.options.header_every.max(1);
        let mut printed_header = false;
        for (i, row) in table.rows.iter().enumerate() {
            if i % header_every == 0
                && (!printed_header || row_count - i > self.options.header_tail)
            {
                self.push_header(&mut out, &header, rule_len);
                printed_header = true;
            }
            let line = self.format_row(label_width, row);
            out.push_str(&self.paint(&line, self.row_style(row)));
            out.push('\n');
        }
        if !printed_header {
            self.push_header(&mut out, &header, rule_len);
        }

        let footer = self.format_row(label_width, &table.footer);
        let rule = "=".repeat(footer.chars().count());
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&self.paint(&footer, Some(emphasis_style())));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out
    }

    fn banner(&self) -> String {
        format!(
            "Line Total Utility.\n\
             Each entry is <non-empty lines>/<total lines>\n\
             Blue lines are directories. Red lines are files over {} lines long.\n\n",
            self.options.large_file_threshold
        )
    }

    fn label_width(&self, table: &LineTable) -> usize {
        table
            .rows
            .iter()
            .map(|r| r.label.as_str())
            .chain([table.headers[0].as_str(), table.footer.label.as_str()])
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            + self.options.label_padding
    }

    fn push_header(&self, out: &mut String, header: &str, rule_len: usize) {
        let rule = "-".repeat(rule_len);
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&self.paint(header, Some(emphasis_style())));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }

    fn format_row(&self, label_width: usize, row: &TableRow) -> String {
        let cells: Vec<String> = row
            .cells
            .iter()
            .chain(std::iter::once(&row.total))
            .map(LineCount::to_string)
            .collect();
        self.format_line(label_width, &row.label, cells.iter())
    }

    fn format_line<'a>(
        &self,
        label_width: usize,
        label: &str,
        cells: impl Iterator<Item = &'a String>,
    ) -> String {
        let mut line = format!("{:>width$}", label, width = label_width);
        for cell in cells {
            line.push('|');
            line.push_str(&format!("{:>width$}", cell, width = self.options.cell_width));
        }
        line
    }

    fn row_style(&self, row: &TableRow) -> Option<Style> {
        match row.kind {
            RowKind::Directory => Some(Style::new().blue().bright()),
            RowKind::File if row.total.total > self.options.large_file_threshold => {
                Some(Style::new().red().bright())
            }
            RowKind::File => None,
            RowKind::Totals => Some(emphasis_style()),
        }
    }

    fn paint(&self, line: &str, style: Option<Style>) -> String {
        match style {
            Some(style) if self.options.colored => {
                style.force_styling(true).apply_to(line).to_string()
            }
            _ => line.to_string(),
        }
    }
}

fn emphasis_style() -> Style {
    Style::new().green().bright()
}
