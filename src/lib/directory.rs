//! Directory operations for the Artist/Album layout.
//! Planning is kept apart from creation so dry runs can share it.

use crate::error::{OrganizeError, Result};
use crate::metadata::{Tag, TagMap};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Folder created next to the artist folders on every run
pub const UNKNOWN_ARTISTS_FOLDER: &str = "Unknown Artists";

/// Whether the "Unknown Artists" folder is part of the artist-level plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownArtistsFolder {
    /// Always create it, even if every file has a known artist
    #[default]
    Always,
    Never,
}

/// What happened to one directory of a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirOutcome {
    Created,
    AlreadyExisted,
    /// Dry run, nothing touched
    Planned,
    Failed(String),
}

/// Outcome of creating a deduplicated set of directories
#[derive(Debug, Default)]
pub struct DirectoryReport {
    pub outcomes: BTreeMap<PathBuf, DirOutcome>,
}

impl DirectoryReport {
    /// Every path the planner tried to create
    pub fn attempted(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn created(&self) -> usize {
        self.count(|outcome| matches!(outcome, DirOutcome::Created))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, DirOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&DirOutcome) -> bool) -> usize {
        self.outcomes.values().filter(|&o| predicate(o)).count()
    }
}

/// Create `path` and any missing parents.
/// An existing directory counts as success; anything else is reported, not raised.
pub fn create_dir_idempotent(path: &Path) -> DirOutcome {
    if path.is_dir() {
        return DirOutcome::AlreadyExisted;
    }

    match fs::create_dir_all(path) {
        Ok(()) => DirOutcome::Created,
        Err(e) => DirOutcome::Failed(e.to_string()),
    }
}

/// Create every directory in `paths`, logging failures and carrying on
pub fn create_directories(paths: BTreeSet<PathBuf>, dry_run: bool) -> DirectoryReport {
    let mut report = DirectoryReport::default();

    for path in paths {
        let outcome = if dry_run {
            info!("Would create directory: {}", path.display());
            DirOutcome::Planned
        } else {
            create_dir_idempotent(&path)
        };

        match &outcome {
            DirOutcome::Created => debug!("Created directory: {}", path.display()),
            DirOutcome::AlreadyExisted => debug!("Directory already exists: {}", path.display()),
            DirOutcome::Failed(reason) => {
                warn!("Failed to create directory '{}': {}", path.display(), reason)
            }
            DirOutcome::Planned => {}
        }

        report.outcomes.insert(path, outcome);
    }

    report
}

/// `<base>/<artist>` for every artist, plus the "Unknown Artists" folder when enabled
pub fn plan_artist_dirs(
    base_dir: &Path,
    artists: &BTreeSet<String>,
    unknown_artists_folder: UnknownArtistsFolder,
) -> BTreeSet<PathBuf> {
    let mut paths: BTreeSet<PathBuf> = artists.iter().map(|a| base_dir.join(a)).collect();

    if unknown_artists_folder == UnknownArtistsFolder::Always {
        paths.insert(base_dir.join(UNKNOWN_ARTISTS_FOLDER));
    }

    paths
}

/// The album directory a file belongs in: `<dir of file>/<artist>/<album>`
pub fn album_dir_for(file_path: &Path, tag: &Tag) -> Result<PathBuf> {
    let parent = file_path
        .parent()
        .ok_or_else(|| OrganizeError::InvalidPath(file_path.to_path_buf()))?;

    Ok(parent.join(&tag.artist).join(&tag.album))
}

/// Album directories needed by `tags`, once each
pub fn plan_album_dirs(tags: &TagMap) -> Result<BTreeSet<PathBuf>> {
    tags.iter()
        .map(|(file_path, tag)| album_dir_for(file_path, tag))
        .collect()
}

pub fn create_artist_directories(
    base_dir: &Path,
    artists: &BTreeSet<String>,
    unknown_artists_folder: UnknownArtistsFolder,
    dry_run: bool,
) -> DirectoryReport {
    create_directories(
        plan_artist_dirs(base_dir, artists, unknown_artists_folder),
        dry_run,
    )
}

pub fn create_album_directories(tags: &TagMap, dry_run: bool) -> Result<DirectoryReport> {
    Ok(create_directories(plan_album_dirs(tags)?, dry_run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{UNKNOWN_ALBUM, UNKNOWN_ARTIST};
    use anyhow::Result;
    use tempfile::TempDir;

    fn tag(artist: &str, album: &str) -> Tag {
        Tag {
            artist: artist.to_string(),
            album: album.to_string(),
        }
    }

    fn artists(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_create_dir_idempotent() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let album_path = temp_dir.path().join("Test Artist").join("Test Album");

        assert_eq!(create_dir_idempotent(&album_path), DirOutcome::Created);
        assert!(album_path.is_dir());
        assert_eq!(create_dir_idempotent(&album_path), DirOutcome::AlreadyExisted);

        Ok(())
    }

    #[test]
    fn test_create_dir_reports_failure() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let blocker = temp_dir.path().join("Radiohead");
        fs::write(&blocker, b"not a directory")?;

        let outcome = create_dir_idempotent(&blocker.join("OK Computer"));
        assert!(matches!(outcome, DirOutcome::Failed(_)));

        Ok(())
    }

    #[test]
    fn test_plan_artist_dirs_includes_unknown_artists() {
        let base = Path::new("/music");
        let planned = plan_artist_dirs(base, &artists(&["Radiohead"]), UnknownArtistsFolder::Always);

        let expected: BTreeSet<PathBuf> = [base.join("Radiohead"), base.join("Unknown Artists")]
            .into_iter()
            .collect();
        assert_eq!(planned, expected);

        let planned = plan_artist_dirs(base, &artists(&["Radiohead"]), UnknownArtistsFolder::Never);
        assert_eq!(planned, BTreeSet::from([base.join("Radiohead")]));
    }

    #[test]
    fn test_create_artist_directories_twice() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let base = temp_dir.path();
        let names = artists(&["Queen", "Radiohead"]);

        let first = create_artist_directories(base, &names, UnknownArtistsFolder::Always, false);
        assert_eq!(first.len(), 3);
        assert_eq!(first.created(), 3);

        let second = create_artist_directories(base, &names, UnknownArtistsFolder::Always, false);
        assert_eq!(second.len(), 3);
        assert_eq!(second.created(), 0);
        assert_eq!(second.failed(), 0);
        assert!(second
            .outcomes
            .values()
            .all(|o| *o == DirOutcome::AlreadyExisted));

        let mut on_disk: Vec<_> = fs::read_dir(base)?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        on_disk.sort();
        assert_eq!(on_disk, vec!["Queen", "Radiohead", "Unknown Artists"]);

        Ok(())
    }

    #[test]
    fn test_create_artist_directories_continues_after_failure() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let base = temp_dir.path();
        fs::write(base.join("Blocked"), b"a file, not a folder")?;

        let report = create_artist_directories(
            base,
            &artists(&["Blocked"]),
            UnknownArtistsFolder::Always,
            false,
        );

        assert_eq!(report.failed(), 1);
        assert_eq!(report.created(), 1);
        assert!(base.join(UNKNOWN_ARTISTS_FOLDER).is_dir());

        Ok(())
    }

    #[test]
    fn test_plan_album_dirs_shares_artist() {
        let mut tags = TagMap::default();
        tags.insert(PathBuf::from("/music/q1.mp3"), tag("Queen", "Jazz"));
        tags.insert(PathBuf::from("/music/q2.mp3"), tag("Queen", "Innuendo"));
        tags.insert(PathBuf::from("/music/q3.mp3"), tag("Queen", "Jazz"));

        let planned = plan_album_dirs(&tags).unwrap();
        let expected: BTreeSet<PathBuf> = [
            PathBuf::from("/music/Queen/Innuendo"),
            PathBuf::from("/music/Queen/Jazz"),
        ]
        .into_iter()
        .collect();
        assert_eq!(planned, expected);
    }

    #[test]
    fn test_plan_album_dirs_only_uses_unknown_album_when_needed() {
        let mut tags = TagMap::default();
        tags.insert(PathBuf::from("/music/a.mp3"), tag("Radiohead", "OK Computer"));

        let planned = plan_album_dirs(&tags).unwrap();
        assert!(planned.iter().all(|p| !p.ends_with(UNKNOWN_ALBUM)));

        tags.insert(PathBuf::from("/music/b.mp3"), tag(UNKNOWN_ARTIST, UNKNOWN_ALBUM));
        let planned = plan_album_dirs(&tags).unwrap();
        assert!(planned.contains(&PathBuf::from("/music/Unknown Artist/Unknown Album")));
    }

    #[test]
    fn test_create_album_directories_dry_run() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut tags = TagMap::default();
        tags.insert(temp_dir.path().join("q1.mp3"), tag("Queen", "Jazz"));

        let report = create_album_directories(&tags, true)?;

        assert_eq!(report.len(), 1);
        assert!(report.outcomes.values().all(|o| *o == DirOutcome::Planned));
        assert!(!temp_dir.path().join("Queen").exists());

        Ok(())
    }
}
