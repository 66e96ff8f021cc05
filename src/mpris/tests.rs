use super::*;
use std::path::PathBuf;
use std::sync::mpsc;

fn make_song() -> Song {
    Song {
        title: "Test Title".to_string(),
        artist: "Test Artist".to_string(),
        album: "Test Album".to_string(),
        duration: "3:27".to_string(),
        path: PathBuf::from("/tmp/music/test.mp3"),
    }
}

#[test]
fn set_song_metadata_sets_and_clears_shared_state() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (notify_tx, _notify_rx) = mpsc::channel::<()>();
    let handle = MprisHandle {
        state: state.clone(),
        notify: notify_tx,
    };

    let song = make_song();
    handle.set_song_metadata(Some(7), Some(&song));

    {
        let s = state.lock().unwrap();
        assert_eq!(s.title.as_deref(), Some("Test Title"));
        assert_eq!(s.artist, vec!["Test Artist".to_string()]);
        assert_eq!(s.album.as_deref(), Some("Test Album"));
        assert!(s.url.as_deref().unwrap().contains("/tmp/music/test.mp3"));
        assert_eq!(s.length_micros, Some(207_000_000));
        assert_eq!(
            s.track_id.as_ref().map(|p| p.as_str()),
            Some("/org/mpris/MediaPlayer2/track/7")
        );
    }

    handle.set_song_metadata(None, None);
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title, None);
        assert!(s.artist.is_empty());
        assert_eq!(s.album, None);
        assert_eq!(s.url, None);
        assert_eq!(s.length_micros, None);
        assert!(s.track_id.is_none());
    }
}

#[test]
fn placeholder_duration_publishes_no_length() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (notify_tx, _notify_rx) = mpsc::channel::<()>();
    let handle = MprisHandle {
        state: state.clone(),
        notify: notify_tx,
    };

    let mut song = make_song();
    song.duration = "live".to_string();
    handle.set_song_metadata(Some(0), Some(&song));

    let s = state.lock().unwrap();
    assert_eq!(s.length_micros, None);
}

#[test]
fn playback_status_uses_the_mpris_vocabulary() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };

    {
        let mut s = state.lock().unwrap();
        s.playback = PlaybackState::Stopped;
    }
    assert_eq!(iface.playback_status(), "Stopped");

    {
        let mut s = state.lock().unwrap();
        s.playback = PlaybackState::Playing;
    }
    assert_eq!(iface.playback_status(), "Playing");

    {
        let mut s = state.lock().unwrap();
        s.playback = PlaybackState::Paused;
    }
    assert_eq!(iface.playback_status(), "Paused");
}

#[test]
fn metadata_includes_expected_keys_when_present() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };

    assert!(iface.metadata().is_empty());

    {
        let mut s = state.lock().unwrap();
        s.title = Some("Title".to_string());
        s.artist = vec!["Artist".to_string()];
        s.album = Some("Album".to_string());
        s.url = Some("file:///tmp/test.mp3".to_string());
        s.length_micros = Some(42);
        s.track_id =
            OwnedObjectPath::try_from("/org/mpris/MediaPlayer2/track/1".to_string()).ok();
    }

    let map = iface.metadata();
    for key in [
        "mpris:trackid",
        "xesam:title",
        "xesam:artist",
        "xesam:album",
        "xesam:url",
        "mpris:length",
    ] {
        assert!(map.contains_key(key), "missing key: {key}");
    }
}
