// src/main.rs
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

use datename::{Args, run};

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version print to stdout; usage errors exit with 1, not clap's 2.
            let printed = err.print();
            return if err.use_stderr() || printed.is_err() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    fmt()
        .with_env_filter(EnvFilter::new(args.log_level()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
