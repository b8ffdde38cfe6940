// src/lib.rs
pub mod args;
pub mod config;
pub mod presentation;

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::ScanConfig;
use crate::presentation::ConsoleReporter;
pub use sloc_engine::stats::ScanSummary;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print the header, scan, and print the total to `out`.
///
/// Nothing after the per-file lines is written when the scan fails.
///
/// # Errors
/// Fatal scan errors and write failures on `out`.
pub fn run<W: Write>(config: &ScanConfig, mut out: W) -> Result<ScanSummary> {
    presentation::print_header(&mut out, config)?;

    let mut reporter = ConsoleReporter::new(&mut out);
    let summary = sloc_engine::run(config, &mut reporter)
        .with_context(|| format!("scan of {} aborted", config.root.display()))?;

    presentation::print_total(&mut out, &summary)?;
    out.flush()?;
    Ok(summary)
}
