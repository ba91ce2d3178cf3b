use thiserror::Error;

/// Why a file's tags could not be read
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagError {
    /// The file carries no tag container at all
    #[error("no tag header present")]
    NoTagHeader,

    /// Any other parse or I/O failure
    #[error("{0}")]
    Unreadable(String),
}

impl From<std::io::Error> for TagError {
    fn from(err: std::io::Error) -> Self {
        Self::Unreadable(err.to_string())
    }
}

impl From<id3::Error> for TagError {
    fn from(err: id3::Error) -> Self {
        match err.kind {
            id3::ErrorKind::NoTag => Self::NoTagHeader,
            _ => Self::Unreadable(err.to_string()),
        }
    }
}

impl From<metaflac::Error> for TagError {
    fn from(err: metaflac::Error) -> Self {
        Self::Unreadable(err.to_string())
    }
}
