use std::path::Path;

/// Extensions the tag reader is wired up for.
/// Only the ID3-tagged MP3 container is organized; other formats are left alone.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3"];

/// Check if a file path has a supported audio extension
pub fn is_audio_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    AUDIO_EXTENSIONS
        .iter()
        .any(|&supported_ext| supported_ext == ext)
}
