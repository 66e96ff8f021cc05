//! Command and shared-state types for the audio worker thread.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::output::AudioError;

/// Commands serviced by the audio worker thread.
#[derive(Debug)]
pub(super) enum AudioCmd {
    /// Replace the current song with the file at `path`. The outcome of
    /// opening and decoding it is reported back over `reply`.
    Load {
        path: PathBuf,
        reply: Sender<Result<(), AudioError>>,
    },
    /// Start playback of the loaded song.
    Play,
    /// Pause playback, keeping the position.
    Pause,
    /// Resume playback from the paused position.
    Unpause,
    /// Stop playback and unload the current song.
    Stop,
    /// Stop playback and exit the worker thread.
    Quit,
}

/// Pause-aware playback position, shared between the worker (writer)
/// and position readers.
#[derive(Debug, Clone)]
pub(super) struct PositionInfo {
    /// Whether a song is currently loaded.
    pub loaded: bool,
    /// When the current play segment started. `None` while paused or stopped.
    pub started_at: Option<Instant>,
    /// Elapsed time accumulated over previous play segments.
    pub accumulated: Duration,
}

impl Default for PositionInfo {
    fn default() -> Self {
        Self {
            loaded: false,
            started_at: None,
            accumulated: Duration::ZERO,
        }
    }
}

impl PositionInfo {
    /// Elapsed playback time of the loaded song, `None` when nothing is loaded.
    pub fn elapsed(&self) -> Option<Duration> {
        if !self.loaded {
            return None;
        }
        let running = self.started_at.map_or(Duration::ZERO, |st| st.elapsed());
        Some(self.accumulated + running)
    }
}

pub(super) type PositionHandle = Arc<Mutex<PositionInfo>>;
