// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use version_stamp::{app, cli::Args};

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(false)
        .try_init();

    let args = Args::parse();
    match app::run(args) {
        Ok(outcome) => {
            debug!("stamped {} with checksum {}", outcome.output_path.display(), outcome.checksum.digest);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
