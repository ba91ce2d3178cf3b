//! Drives a scan and prints the per-file report

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    domain::audio::AudioFile,
    scan::find_audio_files,
    tags::{TagError, TagReader},
    validate::{Issue, validate},
};

/// Issues found in one file, keyed by its path relative to the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIssues {
    pub relative_path: PathBuf,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub total_files_scanned: usize,
    /// Only files with at least one issue, in discovery order
    pub files: Vec<FileIssues>,
}

impl ScanResult {
    pub fn files_with_issues(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    NotADirectory,
    NoFiles,
    Completed(ScanResult),
}

/// Reads and checks one file. Read failures become that file's only issue.
pub fn analyze_file<R: TagReader>(reader: &R, file: &AudioFile) -> Vec<Issue> {
    match reader.read_tags(file) {
        Ok(tags) => {
            log::debug!(
                "{} ({}): {} tags",
                file.path.display(),
                file.kind,
                tags.len()
            );
            validate(&tags)
        }
        Err(TagError::NoTagHeader) => {
            vec!["File does not contain any ID3 metadata tags.".to_string()]
        }
        Err(TagError::Unreadable(message)) => {
            vec![format!("Could not process file. Error: {message}")]
        }
    }
}

/// Scans `root`, writing the report to `out` as each file is checked
pub fn run<R: TagReader, W: Write>(
    root: &Path,
    reader: &R,
    out: &mut W,
) -> io::Result<ScanOutcome> {
    if !root.is_dir() {
        writeln!(out, "Error: Directory not found at '{}'", root.display())?;
        return Ok(ScanOutcome::NotADirectory);
    }

    writeln!(
        out,
        "Scanning for MP3 and FLAC files in '{}'...\n",
        root.display()
    )?;

    let audio_files = find_audio_files(root);
    if audio_files.is_empty() {
        writeln!(out, "No MP3 or FLAC files found.")?;
        return Ok(ScanOutcome::NoFiles);
    }

    let mut result = ScanResult {
        total_files_scanned: audio_files.len(),
        files: Vec::new(),
    };

    for file in &audio_files {
        let issues = analyze_file(reader, file);
        if issues.is_empty() {
            continue;
        }
        log::debug!("{}: {} issues", file.path.display(), issues.len());

        let relative_path = file
            .path
            .strip_prefix(root)
            .unwrap_or(&file.path)
            .to_path_buf();

        writeln!(out, "--- ISSUES FOUND in: {} ---", relative_path.display())?;
        for issue in &issues {
            writeln!(out, "  - {issue}")?;
        }
        writeln!(out)?;

        result.files.push(FileIssues {
            relative_path,
            issues,
        });
    }

    log::info!(
        "scanned {} files, {} with issues",
        result.total_files_scanned,
        result.files_with_issues()
    );

    writeln!(out, "--- Analysis Complete ---")?;
    writeln!(out, "Total files scanned: {}", result.total_files_scanned)?;
    writeln!(out, "Files with issues:   {}", result.files_with_issues())?;
    writeln!(out, "-------------------------")?;

    Ok(ScanOutcome::Completed(result))
}
