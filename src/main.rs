//! yaml2env: convert Spring configuration YAML files into `.env` entries.
//!
//! This is the main entry point for the `yaml2env` CLI. It parses arguments,
//! runs the conversion, and maps errors to exit codes.

mod cli;
mod convert;
pub mod env_set;
pub mod error;
pub mod exit_codes;
pub mod flatten;
mod logging;
pub mod source;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            return ExitCode::from(code as u8);
        }
    };
    logging::init(cli.verbose);

    match convert::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
