/// Result of one scan, produced by folding over the matched files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub total_lines: u64,
    pub counted_files: usize,
    /// Files that matched but were not valid UTF-8 text.
    pub skipped_files: usize,
}

impl ScanSummary {
    #[must_use]
    pub fn with_counted(self, lines: u64) -> Self {
        Self {
            total_lines: self.total_lines.saturating_add(lines),
            counted_files: self.counted_files + 1,
            ..self
        }
    }

    #[must_use]
    pub fn with_skipped(self) -> Self {
        Self {
            skipped_files: self.skipped_files + 1,
            ..self
        }
    }
}
