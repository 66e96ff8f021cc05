use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::metadata::MetadataProvider;
use super::model::{Playlist, Song};

/// Failure while importing a folder. Propagated to the caller; the view
/// decides how (or whether) to surface it.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no such directory: {0}")]
    NotFound(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read directory entry: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Build the list of `.ext` suffixes to match against entry names.
/// Matching is case-sensitive, so the configured values are used verbatim.
fn audio_suffixes(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .map(|e| format!(".{e}"))
        .collect()
}

impl Playlist {
    /// Append a song for every immediate entry of `dir` whose name ends
    /// with one of the configured audio suffixes.
    ///
    /// Entries are matched by name only (no recursion, no per-entry stat),
    /// in whatever order the filesystem lists them. Artist, album and
    /// duration come from `provider`; the title is the provider's, or the
    /// entry name without its extension. Returns how many songs were added.
    pub fn add_songs_from_folder(
        &mut self,
        dir: &Path,
        provider: &dyn MetadataProvider,
        settings: &LibrarySettings,
    ) -> Result<usize, ImportError> {
        if !dir.exists() {
            return Err(ImportError::NotFound(dir.to_path_buf()));
        }
        if !dir.is_dir() {
            return Err(ImportError::NotADirectory(dir.to_path_buf()));
        }

        let suffixes = audio_suffixes(settings);
        let mut added = 0;

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !suffixes.iter().any(|s| name.ends_with(s.as_str())) {
                continue;
            }

            let default_title = Path::new(name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(name)
                .to_string();

            let path = entry.into_path();
            let meta = provider.metadata(&path);
            self.add_song(Song {
                title: meta.title.unwrap_or(default_title),
                artist: meta.artist,
                album: meta.album,
                duration: meta.duration,
                path,
            });
            added += 1;
        }

        Ok(added)
    }
}
