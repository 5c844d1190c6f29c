//! # dirloc
//!
//! A CLI tool that prints line counts per directory, grouped by file
//! extension.
//!
//! ## Overview
//!
//! dirloc is built on top of dirloclib. It scans the files directly in the
//! given directory, then each top-level subdirectory recursively, and prints
//! one row per directory with `<non-empty lines>/<total lines>` for every
//! extension group.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory
//! dirloc
//!
//! # Count another checkout
//! dirloc ~/src/engine
//!
//! # Also list every counted file (red when over the threshold)
//! dirloc --show-files ~/src/engine
//!
//! # Machine-readable output
//! dirloc ~/src/engine --output json
//! ```
//!
//! Warnings about unreadable files go to stderr; set `RUST_LOG=debug` to see
//! which directories are scanned and skipped.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use dirloclib::{walk_tree, LineTable, ScanConfig, TableOptions, TableRenderer, Totals};
use log::debug;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("dirloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Line counts per directory, grouped by file extension")
        .arg(
            Arg::new("path")
                .value_name("DIRECTORY")
                .value_parser(value_parser!(PathBuf))
                .help("Directory to analyze (defaults to current directory)"),
        )
        .arg(
            Arg::new("show-files")
                .long("show-files")
                .action(ArgAction::SetTrue)
                .requires("path")
                .help("Show a row for every counted file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_parser(value_parser!(u64))
                .default_value("1000")
                .help("Highlight files with more total lines than this"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip directories with this name (can be specified multiple times)"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored output"),
        )
}

/// Build the scan configuration from matches
fn build_config(matches: &ArgMatches) -> ScanConfig {
    let mut config = ScanConfig::new().show_files(matches.get_flag("show-files"));

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for name in excludes {
            config = config.deny(name.as_str());
        }
    }

    config
}

/// Resolve the directory to scan
fn resolve_root(matches: &ArgMatches) -> anyhow::Result<PathBuf> {
    match matches.get_one::<PathBuf>("path") {
        Some(path) => Ok(std::fs::canonicalize(path).unwrap_or_else(|_| path.clone())),
        None => std::env::current_dir().context("cannot determine the current directory"),
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let root = resolve_root(matches)?;
    let config = build_config(matches);

    let records = walk_tree(&root, &config)?;
    let totals = Totals::from_records(config.group_count(), &records);
    debug!(
        "{} records under {}, {} lines",
        records.len(),
        root.display(),
        totals.grand_total().total
    );

    let table = LineTable::build(&config.groups, &records, &totals);

    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");

    if output == "json" {
        let mut value = serde_json::to_value(&table)?;
        value["root"] = serde_json::json!(root.display().to_string());
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    let threshold = matches.get_one::<u64>("threshold").copied().unwrap_or(1000);
    let colored = !matches.get_flag("no-color") && console::colors_enabled();
    let options = TableOptions::new()
        .large_file_threshold(threshold)
        .colored(colored);

    Ok(TableRenderer::new(options).render(&table))
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logger();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()) {
                // A closed pipe (e.g. `dirloc | head`) is not worth reporting.
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
