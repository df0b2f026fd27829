use crate::audio;
use crate::error::{OrganizeError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn get_default_music_dir() -> String {
    std::env::var("XDG_MUSIC_DIR").unwrap_or_else(|_| "~/Music".to_string())
}

/// Make a single directory name out of a tag value.
/// Anything that would split the value into several path components, or that
/// common filesystems refuse, becomes `_`.
pub fn sanitize_component(name: &str) -> String {
    let cleaned = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string();

    match cleaned.as_str() {
        "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}

/// Turn user input into the directory to organize.
/// `~` is expanded, relative paths are anchored at the current directory, and
/// a path that is not a directory is replaced by its parent.
pub fn resolve_base_dir(input: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(input.trim()).into_owned();
    let path = Path::new(&expanded);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    if absolute.is_dir() {
        return Ok(absolute);
    }

    Ok(absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(absolute))
}

/// List the music files sitting directly inside `base_dir`.
/// Subdirectories are not entered. The result is sorted and free of duplicates.
pub fn list_music_files(base_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut music_files = BTreeSet::new();

    for entry in WalkDir::new(base_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| OrganizeError::Scan {
            path: base_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && audio::is_audio_file(path) {
            music_files.insert(path.to_path_buf());
        }
    }

    Ok(music_files.into_iter().collect())
}
