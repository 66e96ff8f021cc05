use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::audio::{AudioError, AudioOutput};
use crate::library::{Playlist, Song};

use super::{Player, PlayerEvent, PlayerStatus};

#[derive(Default)]
struct FakeState {
    loaded: Option<PathBuf>,
    position: Option<Duration>,
    fail_loads: bool,
    calls: Vec<&'static str>,
}

/// Backend double: records calls, fails loads on request and reports a
/// scripted position.
#[derive(Clone, Default)]
struct FakeAudio(Arc<Mutex<FakeState>>);

impl FakeAudio {
    fn new() -> Self {
        Self::default()
    }

    fn set_position(&self, pos: Duration) {
        self.0.lock().unwrap().position = Some(pos);
    }

    fn fail_loads(&self, fail: bool) {
        self.0.lock().unwrap().fail_loads = fail;
    }

    fn loaded(&self) -> Option<PathBuf> {
        self.0.lock().unwrap().loaded.clone()
    }

    fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().calls.clone()
    }
}

impl AudioOutput for FakeAudio {
    fn load(&mut self, path: &Path) -> Result<(), AudioError> {
        let mut st = self.0.lock().unwrap();
        st.calls.push("load");
        if st.fail_loads {
            st.loaded = None;
            st.position = None;
            return Err(AudioError::Disconnected);
        }
        st.loaded = Some(path.to_path_buf());
        st.position = Some(Duration::ZERO);
        Ok(())
    }

    fn play(&mut self) {
        self.0.lock().unwrap().calls.push("play");
    }

    fn pause(&mut self) {
        self.0.lock().unwrap().calls.push("pause");
    }

    fn unpause(&mut self) {
        self.0.lock().unwrap().calls.push("unpause");
    }

    fn stop(&mut self) {
        let mut st = self.0.lock().unwrap();
        st.calls.push("stop");
        st.loaded = None;
        st.position = None;
    }

    fn position(&self) -> Option<Duration> {
        self.0.lock().unwrap().position
    }
}

fn song(title: &str, artist: &str, duration: &str) -> Song {
    Song {
        title: title.to_string(),
        artist: artist.to_string(),
        album: "Unknown Album".to_string(),
        duration: duration.to_string(),
        path: PathBuf::from(format!("/music/{title}.mp3")),
    }
}

fn three_songs() -> Playlist {
    let mut playlist = Playlist::new("test");
    playlist.add_song(song("Alpha", "Ana", "1:00"));
    playlist.add_song(song("Beta", "Bob", "0:30"));
    playlist.add_song(song("Gamma", "Gus", "2:00"));
    playlist
}

fn player_with(playlist: Playlist) -> (Player, FakeAudio) {
    let fake = FakeAudio::new();
    let mut player = Player::new(Box::new(fake.clone()));
    player.load_playlist(playlist);
    (player, fake)
}

fn drain(rx: &std::sync::mpsc::Receiver<PlayerEvent>) -> Vec<PlayerEvent> {
    rx.try_iter().collect()
}

#[test]
fn play_without_a_playlist_reports_no_playlist() {
    let fake = FakeAudio::new();
    let mut player = Player::new(Box::new(fake.clone()));

    let status = player.play();
    assert_eq!(status, PlayerStatus::NoPlaylist);
    assert_eq!(status.to_string(), "No playlist loaded");
    assert!(fake.calls().is_empty());
    assert!(!player.is_playing());
}

#[test]
fn play_with_an_empty_playlist_reports_no_playlist() {
    let (mut player, fake) = player_with(Playlist::new("empty"));
    assert_eq!(player.play(), PlayerStatus::NoPlaylist);
    assert!(fake.calls().is_empty());
}

#[test]
fn play_starts_the_current_song() {
    let (mut player, fake) = player_with(three_songs());

    let status = player.play();
    assert_eq!(status.to_string(), "Alpha - Ana");
    assert_eq!(fake.loaded(), Some(PathBuf::from("/music/Alpha.mp3")));
    assert_eq!(fake.calls(), vec!["load", "play"]);
    assert!(player.is_playing());
    assert!(!player.is_paused());
}

#[test]
fn play_restarts_the_song_when_already_playing() {
    let (mut player, fake) = player_with(three_songs());
    player.play();
    player.play();
    assert_eq!(fake.calls(), vec!["load", "play", "load", "play"]);
    assert_eq!(player.current_index(), 0);
}

#[test]
fn play_resets_an_out_of_range_index_to_the_start() {
    let (mut player, _fake) = player_with(three_songs());

    let status = player.play_index(42);
    assert_eq!(player.current_index(), 0);
    assert_eq!(status.to_string(), "Alpha - Ana");
}

#[test]
fn navigation_recovers_from_a_stale_index() {
    let (mut player, _fake) = player_with(three_songs());
    player.play_index(2);

    let mut shorter = Playlist::new("shorter");
    shorter.add_song(song("Solo", "Sam", "1:00"));
    shorter.add_song(song("Duo", "Dot", "1:00"));
    player.load_playlist(shorter);

    // Index 2 is stale for the two-song list; the wrap math lands in range.
    player.next_song();
    assert_eq!(player.current_index(), 1);
    player.previous_song();
    assert_eq!(player.current_index(), 0);
}

#[test]
fn play_index_selects_that_song() {
    let (mut player, fake) = player_with(three_songs());

    let status = player.play_index(2);
    assert_eq!(status.to_string(), "Gamma - Gus");
    assert_eq!(player.current_index(), 2);
    assert_eq!(fake.loaded(), Some(PathBuf::from("/music/Gamma.mp3")));
}

#[test]
fn next_and_previous_wrap_around() {
    let (mut player, _fake) = player_with(three_songs());
    player.play();

    player.next_song();
    assert_eq!(player.current_index(), 1);
    player.next_song();
    assert_eq!(player.current_index(), 2);
    player.next_song();
    assert_eq!(player.current_index(), 0);

    player.previous_song();
    assert_eq!(player.current_index(), 2);
}

#[test]
fn previous_then_next_returns_to_the_same_song() {
    let (mut player, _fake) = player_with(three_songs());
    player.play_index(1);
    player.previous_song();
    player.next_song();
    assert_eq!(player.current_index(), 1);
}

#[test]
fn navigation_without_a_playlist_reports_no_playlist() {
    let fake = FakeAudio::new();
    let mut player = Player::new(Box::new(fake.clone()));

    assert_eq!(player.next_song(), PlayerStatus::NoPlaylist);
    assert_eq!(player.previous_song(), PlayerStatus::NoPlaylist);
    assert!(fake.calls().is_empty());
}

#[test]
fn navigation_attempts_playback_even_from_idle() {
    let (mut player, fake) = player_with(three_songs());

    let status = player.next_song();
    assert_eq!(status.to_string(), "Beta - Bob");
    assert_eq!(player.current_index(), 1);
    assert!(player.is_playing());
    assert_eq!(fake.calls(), vec!["load", "play"]);
}

#[test]
fn pause_requires_something_playing() {
    let (mut player, fake) = player_with(three_songs());

    let status = player.pause();
    assert_eq!(status, PlayerStatus::NotPlaying);
    assert_eq!(status.to_string(), "Not playing");
    assert!(fake.calls().is_empty());
}

#[test]
fn pause_toggles_between_paused_and_resumed() {
    let (mut player, fake) = player_with(three_songs());
    player.play();

    assert_eq!(player.pause(), PlayerStatus::Paused);
    assert!(player.is_paused());

    assert_eq!(player.pause(), PlayerStatus::Resumed);
    assert!(!player.is_paused());
    assert!(player.is_playing());

    assert_eq!(fake.calls(), vec!["load", "play", "pause", "unpause"]);
}

#[test]
fn stop_is_idempotent() {
    let (mut player, _fake) = player_with(three_songs());
    player.play();

    player.stop();
    assert!(!player.is_playing());
    assert!(!player.is_paused());

    player.stop();
    assert!(!player.is_playing());
}

#[test]
fn failed_load_leaves_the_player_recoverable() {
    let (mut player, fake) = player_with(three_songs());
    fake.fail_loads(true);

    let status = player.play();
    assert!(matches!(status, PlayerStatus::LoadFailed(_)));
    assert!(status.to_string().starts_with("Error: "));
    assert!(!player.is_playing());

    fake.fail_loads(false);
    let status = player.play_index(1);
    assert_eq!(status.to_string(), "Beta - Bob");
    assert!(player.is_playing());
}

#[test]
fn load_playlist_keeps_playback_and_index() {
    let (mut player, _fake) = player_with(three_songs());
    player.play_index(1);

    let mut other = Playlist::new("other");
    other.add_song(song("Delta", "Dee", "3:00"));
    other.add_song(song("Echo", "Ed", "3:00"));
    player.load_playlist(other);

    assert!(player.is_playing());
    assert_eq!(player.current_index(), 1);
    assert_eq!(player.current_song().map(|s| s.title.as_str()), Some("Echo"));
}

#[test]
fn subscribers_see_the_lifecycle_events() {
    let (mut player, _fake) = player_with(three_songs());
    let rx = player.subscribe();

    player.play();
    player.pause();
    player.pause();
    player.stop();

    let events = drain(&rx);
    assert_eq!(events.len(), 4);
    assert!(matches!(
        &events[0],
        PlayerEvent::SongStarted { index: 0, title, .. } if title == "Alpha"
    ));
    assert_eq!(events[1], PlayerEvent::Paused);
    assert_eq!(events[2], PlayerEvent::Resumed);
    assert_eq!(events[3], PlayerEvent::Stopped);
}

#[test]
fn a_dropped_subscriber_does_not_break_emits() {
    let (mut player, _fake) = player_with(three_songs());
    let rx = player.subscribe();
    drop(rx);

    let status = player.play();
    assert_eq!(status.to_string(), "Alpha - Ana");
}

#[test]
fn poll_progress_reports_percent_and_times() {
    let (mut player, fake) = player_with(three_songs());
    let rx = player.subscribe();
    player.play();
    let _ = drain(&rx);

    fake.set_position(Duration::from_secs(30));
    let progress = player.poll_progress().unwrap();
    assert_eq!(progress.index, 0);
    assert_eq!(progress.percent, 50);
    assert_eq!(progress.elapsed, "0:30");
    assert_eq!(progress.remaining, "-0:30");

    let events = drain(&rx);
    assert_eq!(events, vec![PlayerEvent::Progress(progress)]);
}

#[test]
fn poll_progress_is_quiet_while_idle_or_paused() {
    let (mut player, fake) = player_with(three_songs());
    let rx = player.subscribe();

    assert_eq!(player.poll_progress(), None);

    player.play();
    player.pause();
    let _ = drain(&rx);
    fake.set_position(Duration::from_secs(10));
    assert_eq!(player.poll_progress(), None);
    assert!(drain(&rx).is_empty());
}

#[test]
fn poll_progress_skips_songs_of_unknown_length() {
    let mut playlist = Playlist::new("test");
    playlist.add_song(song("Placeholder", "Nobody", "0:00"));
    let (mut player, fake) = player_with(playlist);
    player.play();

    fake.set_position(Duration::from_secs(5));
    assert_eq!(player.poll_progress(), None);
    assert_eq!(player.current_index(), 0);
}

#[test]
fn poll_progress_advances_once_near_the_end() {
    let (mut player, fake) = player_with(three_songs());
    let rx = player.subscribe();
    player.play();
    let _ = drain(&rx);

    fake.set_position(Duration::from_millis(59_500));
    let progress = player.poll_progress().unwrap();
    assert_eq!(progress.index, 0);
    assert_eq!(progress.percent, 99);

    assert_eq!(player.current_index(), 1);
    assert_eq!(fake.loaded(), Some(PathBuf::from("/music/Beta.mp3")));

    let started: Vec<_> = drain(&rx)
        .into_iter()
        .filter(|e| matches!(e, PlayerEvent::SongStarted { .. }))
        .collect();
    assert_eq!(started.len(), 1);
    assert!(matches!(
        &started[0],
        PlayerEvent::SongStarted { index: 1, title, .. } if title == "Beta"
    ));
}

#[test]
fn overshot_position_caps_percent_and_still_advances() {
    let (mut player, fake) = player_with(three_songs());
    player.play();

    fake.set_position(Duration::from_secs(90));
    let progress = player.poll_progress().unwrap();
    assert_eq!(progress.percent, 100);
    assert_eq!(progress.remaining, "-0:00");
    assert_eq!(player.current_index(), 1);
}
