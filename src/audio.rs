//! Audio playback facility.
//!
//! Playback is delegated to a worker thread that owns the `rodio` output
//! stream and the current `Sink`, serviced over an mpsc channel. The rest
//! of the application talks to it through the [`AudioOutput`] trait, so
//! the player logic never touches the device directly.

mod backend;
mod output;
mod sink;
mod thread;
mod types;

pub use backend::RodioAudio;
pub use output::{AudioError, AudioOutput};
