//! Sequential playback engine.
//!
//! [`Player`] drives one song at a time out of a [`crate::library::Playlist`],
//! delegating sound to an [`crate::audio::AudioOutput`] backend. Operations
//! return [`PlayerStatus`] values for the status box, and state changes are
//! broadcast as [`PlayerEvent`]s to subscribers.

mod engine;
mod events;
mod progress;
mod status;

pub use engine::Player;
pub use events::{PlaybackProgress, PlayerEvent};
pub use status::PlayerStatus;

#[cfg(test)]
mod tests;
