use std::fmt;

/// Outcome of a user-initiated player operation.
///
/// The `Display` text is what the status box renders, so the wording here
/// is part of the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Playback of a song began.
    NowPlaying { title: String, artist: String },
    /// No playlist is loaded, or the loaded one is empty.
    NoPlaylist,
    /// The backend could not open or decode the selected file.
    LoadFailed(String),
    /// Pause was requested while nothing is playing.
    NotPlaying,
    Paused,
    Resumed,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NowPlaying { title, artist } => write!(f, "{title} - {artist}"),
            Self::NoPlaylist => write!(f, "No playlist loaded"),
            Self::LoadFailed(reason) => write!(f, "Error: {reason}"),
            Self::NotPlaying => write!(f, "Not playing"),
            Self::Paused => write!(f, "Paused"),
            Self::Resumed => write!(f, "Resumed"),
        }
    }
}
