//! ID3v2 tags of MP3 files

use std::path::Path;

use id3::{Tag, frame::Content};

use crate::{domain::tags::TagMap, tags::TagError};

/// ID3v2 text frames exposed to the checks, under their friendly names
const TEXT_FRAMES: &[(&str, &str)] = &[
    ("TALB", "album"),
    ("TBPM", "bpm"),
    ("TCMP", "compilation"),
    ("TCOM", "composer"),
    ("TCOP", "copyright"),
    ("TENC", "encodedby"),
    ("TEXT", "lyricist"),
    ("TLEN", "length"),
    ("TMED", "media"),
    ("TMOO", "mood"),
    ("TIT1", "grouping"),
    ("TIT2", "title"),
    ("TIT3", "version"),
    ("TPE1", "artist"),
    ("TPE2", "albumartist"),
    ("TPE3", "conductor"),
    ("TPE4", "arranger"),
    ("TPOS", "discnumber"),
    ("TPUB", "organization"),
    ("TRCK", "tracknumber"),
    ("TOLY", "author"),
    ("TSOA", "albumsort"),
    ("TSOC", "composersort"),
    ("TSOP", "artistsort"),
    ("TSOT", "titlesort"),
    ("TSRC", "isrc"),
    ("TSST", "discsubtitle"),
    ("TLAN", "language"),
    ("TCON", "genre"),
    ("TDRC", "date"),
    ("TYER", "date"),
    ("TDOR", "originaldate"),
];

/// TXXX descriptions (matched exactly) exposed as their own keys
const USER_TEXT_FRAMES: &[(&str, &str)] = &[
    ("MusicBrainz Artist Id", "musicbrainz_artistid"),
    ("MusicBrainz Album Id", "musicbrainz_albumid"),
    ("MusicBrainz Album Artist Id", "musicbrainz_albumartistid"),
    ("MusicBrainz TRM Id", "musicbrainz_trmid"),
    ("MusicIP PUID", "musicip_puid"),
    ("MusicMagic Fingerprint", "musicip_fingerprint"),
    ("MusicBrainz Album Status", "musicbrainz_albumstatus"),
    ("MusicBrainz Album Type", "musicbrainz_albumtype"),
    ("MusicBrainz Album Release Country", "releasecountry"),
    ("MusicBrainz Disc Id", "musicbrainz_discid"),
    ("ASIN", "asin"),
    ("ALBUMARTISTSORT", "albumartistsort"),
    ("PERFORMER", "performer"),
    ("BARCODE", "barcode"),
    ("CATALOGNUMBER", "catalognumber"),
    ("MusicBrainz Release Track Id", "musicbrainz_releasetrackid"),
    ("MusicBrainz Release Group Id", "musicbrainz_releasegroupid"),
    ("MusicBrainz Work Id", "musicbrainz_workid"),
    ("Acoustid Fingerprint", "acoustid_fingerprint"),
    ("Acoustid Id", "acoustid_id"),
];

const MUSICBRAINZ_UFID_OWNER: &str = "http://musicbrainz.org";

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, name)| *name)
}

fn friendly_name(frame_id: &str) -> Option<&'static str> {
    lookup(TEXT_FRAMES, frame_id)
}

pub(super) fn read_tags(path: &Path) -> Result<TagMap, TagError> {
    tags_from(path, Tag::read_from_path(path))
}

/// Frames that failed to parse are dropped; whatever parsed is still checked
fn tags_from(path: &Path, result: id3::Result<Tag>) -> Result<TagMap, TagError> {
    match result {
        Ok(tag) => Ok(tag_map(&tag)),
        Err(mut err) => match err.partial_tag.take() {
            Some(tag) => {
                log::warn!("{}: partially readable ID3 tag: {err}", path.display());
                Ok(tag_map(&tag))
            }
            None => Err(err.into()),
        },
    }
}

/// v2.4 separates multiple values with NUL
fn values(text: &str) -> impl Iterator<Item = &str> {
    text.trim_end_matches('\0').split('\0')
}

fn tag_map(tag: &Tag) -> TagMap {
    let mut map = TagMap::new();

    for frame in tag.frames() {
        match (frame.id(), frame.content()) {
            (id, Content::Text(text)) => {
                if let Some(name) = friendly_name(id) {
                    values(text).for_each(|value| map.insert(name, value));
                }
            }
            ("TXXX", Content::ExtendedText(extended)) => {
                if let Some(name) = lookup(USER_TEXT_FRAMES, &extended.description) {
                    values(&extended.value).for_each(|value| map.insert(name, value));
                }
            }
            ("WOAR", Content::Link(url)) => map.insert("website", url.as_str()),
            ("TMCL", Content::InvolvedPeopleList(people)) => {
                for item in &people.items {
                    let key = format!("performer:{}", item.involvement);
                    map.insert(&key, item.involvee.as_str());
                }
            }
            ("UFID", Content::UniqueFileIdentifier(ufid))
                if ufid.owner_identifier == MUSICBRAINZ_UFID_OWNER =>
            {
                map.insert(
                    "musicbrainz_trackid",
                    String::from_utf8_lossy(&ufid.identifier),
                );
            }
            _ => {}
        }
    }

    map
}
