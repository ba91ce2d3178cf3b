pub mod audio;
pub mod tags;
