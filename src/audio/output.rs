use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Failure reported by an audio backend.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("audio output is unavailable")]
    Disconnected,
}

/// Contract between the player and whatever produces sound.
///
/// A backend holds at most one loaded song. `load` replaces it (stopping
/// any current playback first), the transport methods act on it, and
/// `position` reports pause-aware elapsed time for it. Every method must
/// return rather than panic; a backend without a working device simply
/// fails each `load`.
pub trait AudioOutput {
    /// Replace the current song with the file at `path`, stopped and
    /// ready to play from the start.
    fn load(&mut self, path: &Path) -> Result<(), AudioError>;

    /// Start or restart playback of the loaded song.
    fn play(&mut self);

    /// Pause playback, keeping the current position.
    fn pause(&mut self);

    /// Resume playback from the paused position.
    fn unpause(&mut self);

    /// Stop playback and unload the current song.
    fn stop(&mut self);

    /// Elapsed playback time of the loaded song, `None` when nothing is
    /// loaded. Does not advance while paused.
    fn position(&self) -> Option<Duration>;

    /// Release the output device. Called once, on application exit.
    fn shutdown(&mut self) {}
}
