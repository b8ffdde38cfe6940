// src/config.rs
use crate::args::Args;
pub use sloc_engine::config::{ScanConfig, ScanConfigBuilder, ScanConfigBuilderError};

impl TryFrom<Args> for ScanConfig {
    type Error = ScanConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ScanConfigBuilder::default()
            .root(args.dir)
            .filters(args.types)
            .build()
    }
}
