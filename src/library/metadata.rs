use std::path::Path;

/// Metadata supplied for a file during import.
///
/// `title` is optional: when `None`, the import falls back to the filename
/// without its extension.
#[derive(Debug, Clone)]
pub struct SongMetadata {
    pub title: Option<String>,
    pub artist: String,
    pub album: String,
    /// `mm:ss` text, see [`Song::duration_secs`](super::Song::duration_secs).
    pub duration: String,
}

/// Source of song metadata for imported files.
///
/// The import path stays free of any hardcoded values; swapping in a real
/// tag reader means implementing this trait, nothing else changes.
pub trait MetadataProvider {
    fn metadata(&self, path: &Path) -> SongMetadata;
}

/// Fixed placeholder metadata. No file is opened, no tags are read.
pub struct PlaceholderMetadata;

impl MetadataProvider for PlaceholderMetadata {
    fn metadata(&self, _path: &Path) -> SongMetadata {
        SongMetadata {
            title: None,
            artist: "Unknown Artist".to_string(),
            album: "Unknown Album".to_string(),
            duration: "0:00".to_string(),
        }
    }
}
