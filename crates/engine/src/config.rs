use derive_builder::Builder;
use std::path::PathBuf;

/// Root used when no `-d` is given.
pub const DEFAULT_ROOT: &str = "./";

/// Filter token that matches every file.
pub const MATCH_ALL: &str = "all";

/// Immutable scan configuration, built once from the command line through
/// [`ScanConfigBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ScanConfig {
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,
    /// Extension tokens without the leading dot, in command-line order.
    #[builder(default)]
    pub filters: Vec<String>,
}
