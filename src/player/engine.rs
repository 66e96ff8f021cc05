use std::sync::mpsc::{self, Receiver, Sender};

use crate::audio::AudioOutput;
use crate::library::{Playlist, Song};

use super::events::{PlaybackProgress, PlayerEvent};
use super::progress::{format_mmss, format_remaining, percent_complete};
use super::status::PlayerStatus;

/// Sequential playback engine.
///
/// Owns the playlist and the audio backend. All mutation happens on the
/// caller's thread; interested parties subscribe for [`PlayerEvent`]s and
/// receive them on their own channel.
pub struct Player {
    audio: Box<dyn AudioOutput>,
    playlist: Option<Playlist>,
    current_index: usize,
    is_playing: bool,
    is_paused: bool,
    subscribers: Vec<Sender<PlayerEvent>>,
}

impl Player {
    pub fn new(audio: Box<dyn AudioOutput>) -> Self {
        Self {
            audio,
            playlist: None,
            current_index: 0,
            is_playing: false,
            is_paused: false,
            subscribers: Vec::new(),
        }
    }

    /// Replace the playlist.
    ///
    /// Playback state and the current index are left alone on purpose: a
    /// song that is already sounding keeps sounding, and the index is
    /// re-validated on the next play.
    pub fn load_playlist(&mut self, playlist: Playlist) {
        self.playlist = Some(playlist);
    }

    pub fn playlist(&self) -> Option<&Playlist> {
        self.playlist.as_ref()
    }

    /// Mutable access to the playlist, for imports that extend it in place.
    pub fn playlist_mut(&mut self) -> Option<&mut Playlist> {
        self.playlist.as_mut()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// The song the engine is pointed at, when the index is in range of a
    /// loaded playlist.
    pub fn current_song(&self) -> Option<&Song> {
        self.playlist
            .as_ref()
            .and_then(|p| p.get(self.current_index))
    }

    /// Open a channel that receives every future [`PlayerEvent`].
    pub fn subscribe(&mut self) -> Receiver<PlayerEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Receivers that hung up are dropped here, on the next emit.
    fn emit(&mut self, event: PlayerEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Start the current song from the top, even when it is already
    /// sounding. An index that fell out of range is reset to 0 first.
    pub fn play(&mut self) -> PlayerStatus {
        let Some(len) = self.playlist_len() else {
            return PlayerStatus::NoPlaylist;
        };
        if self.current_index >= len {
            self.current_index = 0;
        }
        let Some(song) = self.current_song() else {
            return PlayerStatus::NoPlaylist;
        };

        let path = song.path.clone();
        let title = song.title.clone();
        let artist = song.artist.clone();

        match self.audio.load(&path) {
            Ok(()) => {
                self.audio.play();
                self.is_playing = true;
                self.is_paused = false;
                self.emit(PlayerEvent::SongStarted {
                    index: self.current_index,
                    title: title.clone(),
                    artist: artist.clone(),
                });
                PlayerStatus::NowPlaying { title, artist }
            }
            Err(e) => {
                self.is_playing = false;
                self.is_paused = false;
                PlayerStatus::LoadFailed(e.to_string())
            }
        }
    }

    /// Jump to `index` and play it (the select-song command).
    pub fn play_index(&mut self, index: usize) -> PlayerStatus {
        self.current_index = index;
        self.play()
    }

    /// Toggle pause. Only meaningful while a song is playing.
    pub fn pause(&mut self) -> PlayerStatus {
        if !self.is_playing {
            return PlayerStatus::NotPlaying;
        }

        if self.is_paused {
            self.audio.unpause();
            self.is_paused = false;
            self.emit(PlayerEvent::Resumed);
            PlayerStatus::Resumed
        } else {
            self.audio.pause();
            self.is_paused = true;
            self.emit(PlayerEvent::Paused);
            PlayerStatus::Paused
        }
    }

    /// Stop playback. Idempotent; safe to call while idle.
    pub fn stop(&mut self) {
        self.audio.stop();
        self.is_playing = false;
        self.is_paused = false;
        self.emit(PlayerEvent::Stopped);
    }

    /// Advance to the next song, wrapping at the end, and play it.
    /// Navigation attempts playback even from idle.
    pub fn next_song(&mut self) -> PlayerStatus {
        let Some(len) = self.playlist_len() else {
            return PlayerStatus::NoPlaylist;
        };
        self.current_index = (self.current_index + 1) % len;
        self.play()
    }

    /// Step back to the previous song, wrapping at the start, and play it.
    pub fn previous_song(&mut self) -> PlayerStatus {
        let Some(len) = self.playlist_len() else {
            return PlayerStatus::NoPlaylist;
        };
        self.current_index = (self.current_index % len + len - 1) % len;
        self.play()
    }

    fn playlist_len(&self) -> Option<usize> {
        self.playlist.as_ref().map(|p| p.len()).filter(|&l| l > 0)
    }

    /// Derive a progress snapshot for the sounding song and notify
    /// subscribers. Once the song is effectively over (>= 99%), advances
    /// to the next one; that advance is the only auto-advance trigger.
    ///
    /// Returns `None` while idle or paused, when the backend has nothing
    /// loaded, and when the song's length is unknown or zero.
    pub fn poll_progress(&mut self) -> Option<PlaybackProgress> {
        if !self.is_playing || self.is_paused {
            return None;
        }
        let offset = self.audio.position()?;
        let duration_secs = self.current_song().and_then(|s| s.duration_secs())?;
        if duration_secs == 0 {
            return None;
        }

        let progress = PlaybackProgress {
            index: self.current_index,
            percent: percent_complete(offset, duration_secs),
            elapsed: format_mmss(offset),
            remaining: format_remaining(offset, duration_secs),
        };
        self.emit(PlayerEvent::Progress(progress.clone()));

        if progress.percent >= 99 {
            self.next_song();
        }

        Some(progress)
    }

    /// Stop the backend and release the audio device. Called once on exit.
    pub fn shutdown(&mut self) {
        self.audio.shutdown();
        self.is_playing = false;
        self.is_paused = false;
    }
}
