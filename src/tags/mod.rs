//! Reading tags out of audio files

use crate::domain::{
    audio::{AudioFile, AudioKind},
    tags::TagMap,
};

pub mod error;
mod flac;
mod mpeg;

pub use error::TagError;

/// Anything that can turn an audio file into a [`TagMap`]
pub trait TagReader {
    fn read_tags(&self, file: &AudioFile) -> Result<TagMap, TagError>;
}

/// Reads tags straight from disk: ID3v2 for MP3, Vorbis comments for FLAC
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTagReader;

impl TagReader for FileTagReader {
    fn read_tags(&self, file: &AudioFile) -> Result<TagMap, TagError> {
        match file.kind {
            AudioKind::Mp3 => mpeg::read_tags(&file.path),
            AudioKind::Flac => flac::read_tags(&file.path),
        }
    }
}
