use std::io;
use std::path::Path;

/// Receives per-file events while a scan runs, in traversal order.
pub trait ScanReporter {
    fn on_counted(&mut self, path: &Path, lines: u64) -> io::Result<()>;

    /// Called for a matched file that is not valid UTF-8 text.
    fn on_skipped(&mut self, path: &Path) -> io::Result<()>;
}

/// Reporter that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ScanReporter for NullReporter {
    fn on_counted(&mut self, _path: &Path, _lines: u64) -> io::Result<()> {
        Ok(())
    }

    fn on_skipped(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}
