// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use sloc_engine::config::DEFAULT_ROOT;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "sloc",
    version = crate::VERSION,
    about = "Count lines in files matching the given extensions, recursively",
    args_override_self = true
)]
pub struct Args {
    /// Root of the directory tree to scan
    #[arg(short = 'd', value_name = "DIR", default_value = DEFAULT_ROOT, value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Extensions to count, without the dot (e.g. `rs py`); `all` counts every file
    #[arg(value_name = "TYPE")]
    pub types: Vec<String>,
}
