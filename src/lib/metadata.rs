use crate::error::{OrganizeError, Result};
use crate::utils;
use lofty::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Textual stand-in some taggers write instead of leaving a field empty
const NULL_PLACEHOLDER: &str = "None";

/// Artist and album exactly as the tag reader found them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTags {
    pub artist: Option<String>,
    pub album: Option<String>,
}

/// Artist and album after sentinel substitution, ready to be used as directory names
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    pub artist: String,
    pub album: String,
}

/// Resolved tags for every music file of a run
pub type TagMap = FxHashMap<PathBuf, Tag>;

/// Source of artist/album values for a file
pub trait TagReader {
    fn read_tags(&self, path: &Path) -> Result<RawTags>;
}

impl<F> TagReader for F
where
    F: Fn(&Path) -> Result<RawTags>,
{
    fn read_tags(&self, path: &Path) -> Result<RawTags> {
        self(path)
    }
}

/// Reads tags with lofty, preferring the primary tag of the container
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> Result<RawTags> {
        let tagged_file = lofty::read_from_path(path).map_err(|e| OrganizeError::TagRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let Some(tag) = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
        else {
            // Untagged files are organized under the sentinels
            return Ok(RawTags::default());
        };

        Ok(RawTags {
            artist: tag.artist().map(|a| a.to_string()),
            album: tag.album().map(|a| a.to_string()),
        })
    }
}

fn normalize(raw: Option<&str>, sentinel: &str) -> String {
    let value = match raw.map(str::trim) {
        Some(value) if !value.is_empty() && !value.eq_ignore_ascii_case(NULL_PLACEHOLDER) => value,
        _ => return sentinel.to_string(),
    };

    let cleaned = utils::sanitize_component(value);
    if cleaned.is_empty() {
        sentinel.to_string()
    } else {
        cleaned
    }
}

pub fn normalize_artist(raw: Option<&str>) -> String {
    normalize(raw, UNKNOWN_ARTIST)
}

pub fn normalize_album(raw: Option<&str>) -> String {
    normalize(raw, UNKNOWN_ALBUM)
}

impl From<RawTags> for Tag {
    fn from(raw: RawTags) -> Self {
        Tag {
            artist: normalize_artist(raw.artist.as_deref()),
            album: normalize_album(raw.album.as_deref()),
        }
    }
}

/// Read every file's tags once.
/// A file that cannot be read stops the run: it could not be placed anyway.
pub fn resolve_tags(files: &[PathBuf], reader: &dyn TagReader) -> Result<TagMap> {
    let mut tags = TagMap::default();

    for file_path in files {
        let tag = Tag::from(reader.read_tags(file_path)?);
        debug!(
            "Resolved {} -> {} / {}",
            file_path.display(),
            tag.artist,
            tag.album
        );
        tags.insert(file_path.clone(), tag);
    }

    Ok(tags)
}

/// Every artist name appearing in `tags`, once
pub fn distinct_artists(tags: &TagMap) -> BTreeSet<String> {
    tags.values().map(|tag| tag.artist.clone()).collect()
}
