use clap::Parser;
use std::{io, path::PathBuf, process::ExitCode};

use crate::report::{self, ScanOutcome};
use crate::tags::FileTagReader;

#[derive(Parser)]
#[command(name = "tagaudit")]
#[command(version)]
#[command(
    about = "Analyze MP3 and FLAC files in a directory for bad or missing metadata tags."
)]
pub struct Cli {
    /// The path to the directory containing your music files.
    pub directory: PathBuf,
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = report::run(&cli.directory, &FileTagReader, &mut out)?;
    match outcome {
        ScanOutcome::NotADirectory => Ok(ExitCode::FAILURE),
        ScanOutcome::NoFiles | ScanOutcome::Completed(_) => Ok(ExitCode::SUCCESS),
    }
}
