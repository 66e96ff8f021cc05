use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, mpsc};
use std::time::Duration;

use async_io::{Timer, block_on};
use zbus::object_server::InterfaceRef;
use zbus::{Connection, interface};
use zvariant::{OwnedObjectPath, OwnedValue, Value};

use crate::app::PlaybackState;
use crate::library::Song;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Prev,
}

#[derive(Debug, Default)]
struct SharedState {
    playback: PlaybackState,
    title: Option<String>,
    artist: Vec<String>,
    album: Option<String>,
    url: Option<String>,
    length_micros: Option<u64>,
    track_id: Option<OwnedObjectPath>,
}

/// Handle used by the runtime to push player state into the D-Bus service.
pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
    /// Wakes the service task so it can emit PropertiesChanged.
    notify: Sender<()>,
}

impl MprisHandle {
    pub fn set_playback(&self, playback: PlaybackState) {
        if let Ok(mut s) = self.state.lock() {
            s.playback = playback;
        }
        let _ = self.notify.send(());
    }

    /// Publish the song at `index` as the current track, or clear the
    /// metadata when nothing is current.
    pub fn set_song_metadata(&self, index: Option<usize>, song: Option<&Song>) {
        if let Ok(mut s) = self.state.lock() {
            match (index, song) {
                (Some(i), Some(song)) => {
                    s.title = Some(song.title.clone());
                    s.artist = vec![song.artist.clone()];
                    s.album = Some(song.album.clone());
                    s.url = Some(format!("file://{}", song.path.display()));
                    s.length_micros = song.duration_secs().map(|secs| secs * 1_000_000);
                    s.track_id =
                        OwnedObjectPath::try_from(format!("/org/mpris/MediaPlayer2/track/{i}"))
                            .ok();
                }
                _ => {
                    s.title = None;
                    s.artist = Vec::new();
                    s.album = None;
                    s.url = None;
                    s.length_micros = None;
                    s.track_id = None;
                }
            }
        }
        let _ = self.notify.send(());
    }
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for TUI.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "harmony"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

fn insert_value(map: &mut HashMap<String, OwnedValue>, key: &str, value: Value<'_>) {
    if let Ok(v) = OwnedValue::try_from(value) {
        map.insert(key.to_string(), v);
    }
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Stop);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Stopped";
        };
        match s.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        }
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };

        if let Some(tid) = &s.track_id {
            insert_value(&mut map, "mpris:trackid", Value::from(tid.clone().into_inner()));
        }
        if let Some(title) = &s.title {
            insert_value(&mut map, "xesam:title", Value::from(title.clone()));
        }
        if !s.artist.is_empty() {
            insert_value(&mut map, "xesam:artist", Value::from(s.artist.clone()));
        }
        if let Some(album) = &s.album {
            insert_value(&mut map, "xesam:album", Value::from(album.clone()));
        }
        if let Some(url) = &s.url {
            insert_value(&mut map, "xesam:url", Value::from(url.clone()));
        }
        if let Some(len) = s.length_micros {
            insert_value(&mut map, "mpris:length", Value::from(len as i64));
        }

        map
    }
}

/// Emit PropertiesChanged for the properties the runtime pushes.
async fn emit_changes(iface_ref: &InterfaceRef<PlayerIface>) {
    let iface = iface_ref.get().await;
    let emitter = iface_ref.signal_emitter();
    let _ = iface.playback_status_changed(emitter).await;
    let _ = iface.metadata_changed(emitter).await;
}

pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (notify_tx, notify_rx) = mpsc::channel::<()>();

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(serve(tx, state_for_thread, notify_rx));
    });

    MprisHandle {
        state,
        notify: notify_tx,
    }
}

async fn serve(tx: Sender<ControlCmd>, state: Arc<Mutex<SharedState>>, notify_rx: Receiver<()>) {
    let path = "/org/mpris/MediaPlayer2";

    let connection = match Connection::session().await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("MPRIS: failed to connect to session bus: {e}");
            return;
        }
    };

    if let Err(e) = connection.request_name("org.mpris.MediaPlayer2.harmony").await {
        eprintln!("MPRIS: failed to acquire name: {e}");
        return;
    }

    let object_server = connection.object_server();

    if let Err(e) = object_server.at(path, RootIface { tx: tx.clone() }).await {
        eprintln!("MPRIS: failed to register root iface: {e}");
        return;
    }

    if let Err(e) = object_server.at(path, PlayerIface { tx, state }).await {
        eprintln!("MPRIS: failed to register player iface: {e}");
        return;
    }

    let iface_ref = match object_server.interface::<_, PlayerIface>(path).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("MPRIS: failed to look up player iface: {e}");
            return;
        }
    };

    // Keep the service alive; wake periodically to flush queued updates
    // into PropertiesChanged signals.
    loop {
        Timer::after(Duration::from_millis(250)).await;

        let mut dirty = false;
        while notify_rx.try_recv().is_ok() {
            dirty = true;
        }
        if dirty {
            emit_changes(&iface_ref).await;
        }
    }
}

#[cfg(test)]
mod tests;
