// src/main.rs
use clap::Parser;
use log::debug;
use sloc::args::Args;
use sloc::config::ScanConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args = Args::parse();
    let config = match ScanConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!("{config:?}");

    match sloc::run(&config, std::io::stdout().lock()) {
        Ok(summary) => {
            debug!(
                "{} files counted, {} skipped",
                summary.counted_files, summary.skipped_files
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
