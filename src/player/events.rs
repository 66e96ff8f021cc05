/// Progress snapshot for the playing song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackProgress {
    /// Index of the playing song in the playlist.
    pub index: usize,
    /// Completed percentage, `0..=100`.
    pub percent: u8,
    /// Elapsed time as `M:SS`.
    pub elapsed: String,
    /// Time left as `-M:SS`, saturating at `-0:00`.
    pub remaining: String,
}

/// Notification pushed to subscribers as playback state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A song began playing, whether started by the user or by auto-advance.
    SongStarted {
        index: usize,
        title: String,
        artist: String,
    },
    /// Periodic progress while a song plays.
    Progress(PlaybackProgress),
    Paused,
    Resumed,
    Stopped,
}
