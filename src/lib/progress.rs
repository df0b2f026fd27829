/// Progress reporting for the organizing pipeline
/// One message per stage, so every run reads the same on the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressMessage {
    /// Run start
    Starting,
    /// Base directory resolved
    ResolvedDirectory { path: String },
    /// Music file enumeration completion
    MusicFilesFound { count: usize },
    /// Distinct artists resolved from tags
    ArtistsFound { count: usize },
    /// Artist-level directories processed
    ArtistFoldersReady { planned: usize, created: usize, failed: usize },
    /// Album-level directories processed
    AlbumsFound { planned: usize, created: usize, failed: usize },
    /// Relocation completion
    FilesMoved { count: usize, dry_run: bool },
}

impl ProgressMessage {
    /// Format the message for console display
    pub fn format(&self) -> String {
        match self {
            ProgressMessage::Starting => "Starting: Music Classification".to_string(),
            ProgressMessage::ResolvedDirectory { path } => {
                format!("Organizing music directory: {}", path)
            }
            ProgressMessage::MusicFilesFound { count } => {
                format!("Music files found: {}", count)
            }
            ProgressMessage::ArtistsFound { count } => format!("Artists found: {}", count),
            ProgressMessage::ArtistFoldersReady { planned, created, failed } => format!(
                "Artist folders: {} planned, {} created, {} failed",
                planned, created, failed
            ),
            ProgressMessage::AlbumsFound { planned, created, failed } => format!(
                "Albums found: {} ({} folders created, {} failed)",
                planned, created, failed
            ),
            ProgressMessage::FilesMoved { count, dry_run } => {
                if *dry_run {
                    format!("Dry run: {} files would be moved, nothing was changed", count)
                } else {
                    format!("Organized tree: {} files moved", count)
                }
            }
        }
    }
}
