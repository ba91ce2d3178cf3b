mod fs;

pub use fs::find_audio_files;
