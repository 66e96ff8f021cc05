use std::path::PathBuf;

/// One track reference. Immutable once constructed; owned by the
/// `Playlist` that contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Track length as `mm:ss` text. This is the authoritative length for
    /// progress purposes; nothing re-derives it from the audio data.
    pub duration: String,
    pub path: PathBuf,
}

impl Song {
    /// Parse the `mm:ss` duration text into whole seconds.
    ///
    /// Returns `None` for anything that is not exactly `minutes:seconds`
    /// with both halves numeric; callers treat that like an unknown length.
    pub fn duration_secs(&self) -> Option<u64> {
        let (mins, secs) = self.duration.split_once(':')?;
        let mins: u64 = mins.parse().ok()?;
        let secs: u64 = secs.parse().ok()?;
        Some(mins * 60 + secs)
    }
}

/// Ordered collection of songs; insertion order is playback order.
///
/// Append-only: there is no delete or reorder, and duplicates are
/// allowed.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub name: String,
    pub songs: Vec<Song>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: Vec::new(),
        }
    }

    /// Append a song at the end of the sequence.
    pub fn add_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }
}
