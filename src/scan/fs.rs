//! Module to find audio files in the file system

use walkdir::WalkDir;

use std::path::Path;

use crate::domain::audio::AudioFile;

/// Recursively finds all MP3 and FLAC files under `root`, sorted by path.
///
/// Entries that can't be read (permissions, vanished files) are logged and skipped.
pub fn find_audio_files(root: &Path) -> Vec<AudioFile> {
    let root_str = root.to_string_lossy();

    let mut files = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(e) => Some(e),
            Err(err) => {
                log::warn!("error while scanning dir {root_str}, skipping an entry: {err}");
                None
            }
        })
        // symlinks count as files (dangling ones too, so they get reported as
        // unreadable); symlinked directories are not descended
        .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && !e.path().is_dir()))
        .filter_map(|e| AudioFile::from_path(e.path()))
        .collect::<Vec<_>>();

    // walkdir sorts siblings only; make the full order lexicographic by path
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}
