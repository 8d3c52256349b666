#![doc = include_str!("../README.md")]

mod cmd;
mod config;
mod error;
mod paths;
mod resolve;
mod workspace;

use {
    crate::cmd::NewProblemCmd,
    std::process::ExitCode,
    tracing_subscriber::EnvFilter,
};

fn main() -> ExitCode {
    // Warnings only unless `RUST_LOG` asks for more; stdout is reserved for
    // progress messages.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cmd = NewProblemCmd::from_env();
    match cmd.run() {
        Ok(path) => {
            println!("New problem workspace created at {path:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Whole cause chain on a single line.
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
