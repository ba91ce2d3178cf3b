use std::process::ExitCode;

use crate::cli::run;

pub mod cli;
pub mod domain;
pub mod report;
pub mod scan;
pub mod tags;
pub mod validate;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
