//! Interactive employee management over stdin/stdout.

use std::io;
use std::process::ExitCode;

use env_logger::Env;
use log::error;

use employeedb::common::config::{DEFAULT_LOG_FILTER, LOG_ENV};
use employeedb::shell::Shell;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_LOG_FILTER)).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("shell aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
