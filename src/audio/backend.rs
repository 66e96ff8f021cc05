use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use super::output::{AudioError, AudioOutput};
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PositionHandle, PositionInfo};

/// [`AudioOutput`] backed by a `rodio` worker thread.
///
/// The worker owns the output stream and the current sink; this handle
/// owns the command channel, the shared position and the join handle.
pub struct RodioAudio {
    tx: Sender<AudioCmd>,
    position: PositionHandle,
    join: Option<JoinHandle<()>>,
}

impl RodioAudio {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let position: PositionHandle = Arc::new(Mutex::new(PositionInfo::default()));
        let join = spawn_audio_thread(rx, position.clone());

        Self {
            tx,
            position,
            join: Some(join),
        }
    }

    /// Fire-and-forget commands. A dead worker makes these no-ops.
    fn send(&self, cmd: AudioCmd) {
        let _ = self.tx.send(cmd);
    }
}

impl Default for RodioAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for RodioAudio {
    fn load(&mut self, path: &Path) -> Result<(), AudioError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx
            .send(AudioCmd::Load {
                path: path.to_path_buf(),
                reply: reply_tx,
            })
            .map_err(|_| AudioError::Disconnected)?;
        reply_rx.recv().map_err(|_| AudioError::Disconnected)?
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn unpause(&mut self) {
        self.send(AudioCmd::Unpause);
    }

    fn stop(&mut self) {
        self.send(AudioCmd::Stop);
    }

    fn position(&self) -> Option<Duration> {
        self.position.lock().ok().and_then(|pos| pos.elapsed())
    }

    fn shutdown(&mut self) {
        let _ = self.tx.send(AudioCmd::Quit);

        if let Some(handle) = self.join.take() {
            let _ = handle.join();
        }
    }
}
