use crate::directory;
use crate::error::{OrganizeError, Result};
use crate::metadata::TagMap;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// A planned move of one music file into its album directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Destination for every file in `tags`, ordered by source path
pub fn plan_relocations(tags: &TagMap) -> Result<Vec<Relocation>> {
    let mut relocations = tags
        .iter()
        .map(|(file_path, tag)| -> Result<Relocation> {
            let file_name = file_path
                .file_name()
                .ok_or_else(|| OrganizeError::InvalidPath(file_path.clone()))?;
            let destination = directory::album_dir_for(file_path, tag)?.join(file_name);

            Ok(Relocation {
                source: file_path.clone(),
                destination,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    relocations.sort_by(|a, b| a.source.cmp(&b.source));
    Ok(relocations)
}

/// Fail with [`OrganizeError::Collision`] if anything, even a dangling symlink,
/// already occupies the destination
pub fn check_collision(relocation: &Relocation) -> Result<()> {
    // symlink_metadata does not follow links, unlike Path::exists
    if fs::symlink_metadata(&relocation.destination).is_ok() {
        return Err(OrganizeError::Collision {
            source_path: relocation.source.clone(),
            destination: relocation.destination.clone(),
        });
    }

    Ok(())
}

/// Move a single file.
/// Never overwrites: an existing destination is a [`OrganizeError::Collision`].
pub fn relocate(relocation: &Relocation) -> Result<()> {
    let Relocation {
        source,
        destination,
    } = relocation;

    // rename(2) replaces existing entries silently, so check first
    check_collision(relocation)?;

    match destination.parent() {
        Some(parent) if parent.is_dir() => {}
        Some(parent) => return Err(OrganizeError::MissingParent(parent.to_path_buf())),
        None => return Err(OrganizeError::InvalidPath(destination.clone())),
    }

    fs::rename(source, destination).map_err(|e| OrganizeError::Move {
        source_path: source.clone(),
        destination: destination.clone(),
        source: e,
    })?;

    info!("Moved: {} -> {}", source.display(), destination.display());
    Ok(())
}

/// Move files in order, stopping at the first failure.
/// A dry run moves nothing but still stops on the first collision.
/// Returns how many files were moved (or would be, for a dry run).
pub fn relocate_all(relocations: &[Relocation], dry_run: bool) -> Result<usize> {
    if dry_run {
        for relocation in relocations {
            check_collision(relocation)?;
            info!(
                "Would move: {} -> {}",
                relocation.source.display(),
                relocation.destination.display()
            );
        }
        return Ok(relocations.len());
    }

    for relocation in relocations {
        relocate(relocation)?;
    }

    Ok(relocations.len())
}
