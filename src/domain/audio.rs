use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Container format of an audio file, inferred from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioKind {
    Mp3,
    Flac,
}

impl AudioKind {
    /// Case-insensitive extension lookup. Returns `None` for anything that is not mp3 or flac.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "mp3" => Some(Self::Mp3),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }
}

impl Display for AudioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioKind::Mp3 => write!(f, "MP3"),
            AudioKind::Flac => write!(f, "FLAC"),
        }
    }
}

/// A discovered audio file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    pub path: PathBuf,
    pub kind: AudioKind,
}

impl AudioFile {
    pub fn from_path<P: AsRef<Path>>(p: P) -> Option<Self> {
        let path = p.as_ref();
        AudioKind::from_path(path).map(|kind| Self {
            path: path.to_path_buf(),
            kind,
        })
    }
}
