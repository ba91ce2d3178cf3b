//! Metadata quality checks over a single file's tags

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::tags::TagMap;

/// One reportable metadata defect
pub type Issue = String;

/// Tags every file is expected to carry, in reporting order
pub const ESSENTIAL_TAGS: &[&str] = &["artist", "title", "album"];

/// Placeholder substrings (lowercase) that mark a tag as generic
const GENERIC_PATTERNS: &[(&str, &[&str])] = &[
    ("artist", &["unknown artist"]),
    ("album", &["unknown album"]),
    ("title", &["untitled"]),
];

const NUMBER_TAGS: &[&str] = &["tracknumber", "discnumber"];
const ZERO_NUMBERS: &[&str] = &["0", "0/0"];

static GENERIC_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^track\s*\d+").expect("generic title pattern is valid")
});

/// Runs every check against `tags` and returns the issues in check order.
///
/// Checks are independent: none suppresses another.
pub fn validate(tags: &TagMap) -> Vec<Issue> {
    let mut issues = Vec::new();
    missing_essential(tags, &mut issues);
    generic_placeholders(tags, &mut issues);
    generic_title(tags, &mut issues);
    surrounding_whitespace(tags, &mut issues);
    zero_numbers(tags, &mut issues);
    issues
}

fn missing_essential(tags: &TagMap, issues: &mut Vec<Issue>) {
    for tag in ESSENTIAL_TAGS {
        let blank = tags.first(tag).is_none_or(|value| value.trim().is_empty());
        if blank {
            issues.push(format!("Missing tag: '{tag}'"));
        }
    }
}

fn generic_placeholders(tags: &TagMap, issues: &mut Vec<Issue>) {
    for (tag, patterns) in GENERIC_PATTERNS {
        let Some(value) = tags.first(tag) else {
            continue;
        };
        let lowered = value.to_lowercase();
        for pattern in *patterns {
            if lowered.contains(pattern) {
                issues.push(format!("Generic tag found: '{tag}: {value}'"));
            }
        }
    }
}

fn generic_title(tags: &TagMap, issues: &mut Vec<Issue>) {
    if let Some(title) = tags.first("title") {
        let title = title.trim();
        if GENERIC_TITLE.is_match(title) {
            issues.push(format!("Generic title found: '{title}'"));
        }
    }
}

fn surrounding_whitespace(tags: &TagMap, issues: &mut Vec<Issue>) {
    for (tag, values) in tags.iter() {
        if let Some(value) = values.first()
            && value.trim() != value
        {
            issues.push(format!("Tag '{tag}' has leading or trailing whitespace."));
        }
    }
}

fn zero_numbers(tags: &TagMap, issues: &mut Vec<Issue>) {
    for tag in NUMBER_TAGS {
        if let Some(value) = tags.first(tag)
            && ZERO_NUMBERS.contains(&value)
        {
            issues.push(format!("Tag '{tag}' is zero ('{value}')"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> TagMap {
        pairs.iter().copied().collect()
    }

    fn valid() -> Vec<(&'static str, &'static str)> {
        vec![("artist", "Artist"), ("title", "Song"), ("album", "Album")]
    }

    #[test]
    fn clean_tags_have_no_issues() {
        assert!(validate(&tags(&valid())).is_empty());
    }

    #[test]
    fn empty_map_misses_every_essential_tag() {
        assert_eq!(
            validate(&TagMap::new()),
            vec![
                "Missing tag: 'artist'",
                "Missing tag: 'title'",
                "Missing tag: 'album'",
            ]
        );
    }

    #[test]
    fn blank_essential_tag_is_missing() {
        let issues = validate(&tags(&[("artist", "Artist"), ("title", "Song"), ("album", "")]));
        assert_eq!(issues, vec!["Missing tag: 'album'"]);
    }

    #[test]
    fn whitespace_only_tag_is_missing_and_padded() {
        let issues = validate(&tags(&[("artist", "   "), ("title", "Song"), ("album", "Album")]));
        assert_eq!(
            issues,
            vec![
                "Missing tag: 'artist'",
                "Tag 'artist' has leading or trailing whitespace.",
            ]
        );
    }

    #[test]
    fn placeholder_and_numbered_title_are_reported_in_order() {
        let issues = validate(&tags(&[
            ("artist", "Unknown Artist"),
            ("title", "Track 01"),
            ("album", "Legit Album"),
        ]));
        assert_eq!(
            issues,
            vec![
                "Generic tag found: 'artist: Unknown Artist'",
                "Generic title found: 'Track 01'",
            ]
        );
    }

    #[test]
    fn placeholder_matches_substring_case_insensitively() {
        let issues = validate(&tags(&[
            ("artist", "Artist"),
            ("title", "My UNTITLED demo"),
            ("album", "The Unknown Album Sessions"),
        ]));
        assert_eq!(
            issues,
            vec![
                "Generic tag found: 'album: The Unknown Album Sessions'",
                "Generic tag found: 'title: My UNTITLED demo'",
            ]
        );
    }

    #[test]
    fn missing_tag_is_never_also_a_placeholder() {
        let issues = validate(&tags(&[("title", "Song"), ("album", "Album")]));
        assert_eq!(issues, vec!["Missing tag: 'artist'"]);
    }

    #[test]
    fn numbered_titles_are_generic() {
        for title in ["Track 01", "track2", "TRACK 007", "  Track 5 (remix)"] {
            let issues = validate(&tags(&[("artist", "A"), ("title", title), ("album", "B")]));
            assert!(
                issues.contains(&format!("Generic title found: '{}'", title.trim())),
                "{title:?} should be generic, got {issues:?}"
            );
        }
    }

    #[test]
    fn titles_not_starting_with_track_number_are_fine() {
        for title in ["Track", "Tracks 1", "The Track 1", "Backtrack 3"] {
            let issues = validate(&tags(&[("artist", "A"), ("title", title), ("album", "B")]));
            assert!(issues.is_empty(), "{title:?} gave {issues:?}");
        }
    }

    #[test]
    fn whitespace_is_checked_on_every_tag() {
        let mut pairs = valid();
        pairs.push(("comment", " hi "));
        pairs.push(("genre", "Rock\n"));

        assert_eq!(
            validate(&tags(&pairs)),
            vec![
                "Tag 'comment' has leading or trailing whitespace.",
                "Tag 'genre' has leading or trailing whitespace.",
            ]
        );
    }

    #[test]
    fn only_first_value_is_inspected() {
        let mut map = tags(&valid());
        map.insert("artist", " second ");

        assert!(validate(&map).is_empty());
    }

    #[test]
    fn zero_numbers_use_exact_match() {
        for (value, expected) in [("0", true), ("0/0", true), ("0/1", false), ("00", false)] {
            let mut pairs = valid();
            pairs.push(("tracknumber", value));
            let issues = validate(&tags(&pairs));

            assert_eq!(!issues.is_empty(), expected, "tracknumber {value:?}");
        }
    }

    #[test]
    fn zero_track_with_valid_disc() {
        let mut pairs = valid();
        pairs.push(("tracknumber", "0"));
        pairs.push(("discnumber", "1/2"));

        assert_eq!(validate(&tags(&pairs)), vec!["Tag 'tracknumber' is zero ('0')"]);
    }

    #[test]
    fn zero_disc_is_reported() {
        let mut pairs = valid();
        pairs.push(("discnumber", "0/0"));

        assert_eq!(validate(&tags(&pairs)), vec!["Tag 'discnumber' is zero ('0/0')"]);
    }

    #[test]
    fn validation_is_repeatable() {
        let map = tags(&[("artist", " Unknown Artist"), ("title", "track9"), ("tracknumber", "0")]);
        assert_eq!(validate(&map), validate(&map));
    }
}
