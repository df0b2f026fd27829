//! End-to-end organizing run.
//!
//! `run` is a straight line: resolve the base directory, enumerate music files,
//! read their tags once, create artist folders, create album folders, move the
//! files. Any stage that comes back empty ends the run with an [`AbortReason`]
//! before anything further is touched. Errors are not retried and nothing is
//! rolled back. The base directory is assumed not to change under us while a
//! run is in progress.

use crate::directory::{self, UnknownArtistsFolder};
use crate::error::Result;
use crate::metadata::{self, TagReader};
use crate::progress::ProgressMessage;
use crate::relocate;
use crate::utils;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizeOptions {
    /// Plan and log only, change nothing on disk
    pub dry_run: bool,
    pub unknown_artists_folder: UnknownArtistsFolder,
}

/// Why a run stopped early without touching any music file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    NoMusicFiles,
    NoArtists,
    NoArtistDirectories,
    NoAlbumDirectories,
}

impl AbortReason {
    pub fn message(&self) -> &'static str {
        match self {
            AbortReason::NoMusicFiles => "No music files found.",
            AbortReason::NoArtists => "No artists found.",
            AbortReason::NoArtistDirectories => "No artist folders to create; files not moved.",
            AbortReason::NoAlbumDirectories => "No albums found; files not moved.",
        }
    }

    /// Process exit status, distinct per reason
    pub fn exit_code(&self) -> u8 {
        match self {
            AbortReason::NoMusicFiles => 2,
            AbortReason::NoArtists => 3,
            AbortReason::NoArtistDirectories => 4,
            AbortReason::NoAlbumDirectories => 5,
        }
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub base_dir: PathBuf,
    pub music_files: usize,
    pub artists: usize,
    pub artist_dirs: usize,
    pub album_dirs: usize,
    pub files_moved: usize,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunSummary),
    Aborted(AbortReason),
}

/// Organize the music files found in `input` (a directory, or a file inside one).
pub fn run(input: &str, options: &OrganizeOptions, reader: &dyn TagReader) -> Result<RunOutcome> {
    info!("{}", ProgressMessage::Starting.format());

    let base_dir = utils::resolve_base_dir(input)?;
    info!(
        "{}",
        ProgressMessage::ResolvedDirectory {
            path: base_dir.display().to_string()
        }
        .format()
    );

    let music_files = utils::list_music_files(&base_dir)?;
    if music_files.is_empty() {
        return Ok(RunOutcome::Aborted(AbortReason::NoMusicFiles));
    }
    info!(
        "{}",
        ProgressMessage::MusicFilesFound {
            count: music_files.len()
        }
        .format()
    );

    let tags = metadata::resolve_tags(&music_files, reader)?;
    let artists = metadata::distinct_artists(&tags);
    if artists.is_empty() {
        return Ok(RunOutcome::Aborted(AbortReason::NoArtists));
    }
    info!(
        "{}",
        ProgressMessage::ArtistsFound {
            count: artists.len()
        }
        .format()
    );

    let artist_report = directory::create_artist_directories(
        &base_dir,
        &artists,
        options.unknown_artists_folder,
        options.dry_run,
    );
    if artist_report.is_empty() {
        return Ok(RunOutcome::Aborted(AbortReason::NoArtistDirectories));
    }
    info!(
        "{}",
        ProgressMessage::ArtistFoldersReady {
            planned: artist_report.len(),
            created: artist_report.created(),
            failed: artist_report.failed(),
        }
        .format()
    );

    let album_report = directory::create_album_directories(&tags, options.dry_run)?;
    if album_report.is_empty() {
        return Ok(RunOutcome::Aborted(AbortReason::NoAlbumDirectories));
    }
    info!(
        "{}",
        ProgressMessage::AlbumsFound {
            planned: album_report.len(),
            created: album_report.created(),
            failed: album_report.failed(),
        }
        .format()
    );

    let relocations = relocate::plan_relocations(&tags)?;
    let files_moved = relocate::relocate_all(&relocations, options.dry_run)?;
    info!(
        "{}",
        ProgressMessage::FilesMoved {
            count: files_moved,
            dry_run: options.dry_run
        }
        .format()
    );

    Ok(RunOutcome::Completed(RunSummary {
        base_dir,
        music_files: music_files.len(),
        artists: artists.len(),
        artist_dirs: artist_report.len(),
        album_dirs: album_report.len(),
        files_moved,
        dry_run: options.dry_run,
    }))
}
