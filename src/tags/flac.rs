//! Vorbis comments of FLAC files

use std::path::Path;

use crate::{domain::tags::TagMap, tags::TagError};

pub(super) fn read_tags(path: &Path) -> Result<TagMap, TagError> {
    let tag = metaflac::Tag::read_from_path(path)?;

    // A stream without a comment block is still a readable, untagged file
    let Some(comments) = tag.vorbis_comments() else {
        return Ok(TagMap::new());
    };

    // Comment keys come back unordered; sort them so reports are stable
    let mut keys: Vec<_> = comments.comments.keys().collect();
    keys.sort_by_key(|key| (key.to_lowercase(), key.to_string()));

    let mut map = TagMap::new();
    for key in keys {
        for value in &comments.comments[key] {
            map.insert(key, value.as_str());
        }
    }
    Ok(map)
}
