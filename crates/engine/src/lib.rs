// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod matcher;
pub mod processor;
pub mod report;
pub mod stats;

use log::debug;

use crate::config::ScanConfig;
use crate::error::{CountError, EngineError, Result};
use crate::matcher::FileMatcher;
use crate::report::ScanReporter;
use crate::stats::ScanSummary;

/// Walk `config.root`, count every matching file and return the totals.
///
/// Files are processed one at a time in traversal order, and each one is
/// reported to `reporter` before the next is opened.
///
/// # Errors
/// Traversal failures, I/O failures on a matched file, and reporter write
/// failures end the scan. Files that are not valid UTF-8 are reported via
/// [`ScanReporter::on_skipped`] and contribute 0 lines.
pub fn run<R: ScanReporter + ?Sized>(config: &ScanConfig, reporter: &mut R) -> Result<ScanSummary> {
    let matcher = FileMatcher::new(config.filters.as_slice());
    if matcher.is_empty() {
        debug!("no filter tokens given; no file will be counted");
    }

    filesystem::walk_files(&config.root)?
        .filter(|entry| match entry {
            Ok(path) if !matcher.matches_path(path) => {
                debug!("not counted: {}", path.display());
                false
            }
            _ => true,
        })
        .try_fold(ScanSummary::default(), |summary, entry| {
            let path = entry?;
            match processor::count_lines(&path) {
                Ok(lines) => {
                    reporter.on_counted(&path, lines)?;
                    Ok(summary.with_counted(lines))
                }
                Err(err @ CountError::Decode { .. }) => {
                    debug!("{err}");
                    reporter.on_skipped(&path)?;
                    Ok(summary.with_skipped())
                }
                Err(CountError::Io { path, source }) => Err(EngineError::FileRead { path, source }),
            }
        })
}
