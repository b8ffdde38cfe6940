// src/presentation.rs
use sloc_engine::config::ScanConfig;
use sloc_engine::report::ScanReporter;
use sloc_engine::stats::ScanSummary;
use std::io::{self, Write};
use std::path::Path;

/// `Searching for types: rs py in directory tree ./.`
pub fn print_header<W: Write>(out: &mut W, config: &ScanConfig) -> io::Result<()> {
    write!(out, "Searching for types: ")?;
    for token in &config.filters {
        write!(out, "{token} ")?;
    }
    writeln!(out, "in directory tree {}.", config.root.display())
}

pub fn print_total<W: Write>(out: &mut W, summary: &ScanSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "TOTAL: Counted {} lines of code.", summary.total_lines)
}

/// Writes one line per processed file as the scan goes.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScanReporter for ConsoleReporter<W> {
    fn on_counted(&mut self, path: &Path, lines: u64) -> io::Result<()> {
        writeln!(self.out, "Counted {lines} lines in file {}.", path.display())
    }

    fn on_skipped(&mut self, path: &Path) -> io::Result<()> {
        writeln!(
            self.out,
            "Warning: did not process file: {} as valid Unicode text.",
            path.display()
        )
    }
}
