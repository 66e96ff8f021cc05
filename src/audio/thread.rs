use std::sync::mpsc::Receiver;
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStreamBuilder, Sink};

use super::sink::create_sink;
use super::types::{AudioCmd, PositionHandle, PositionInfo};

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    position: PositionHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let Ok(mut stream) = OutputStreamBuilder::open_default_stream() else {
            // No output device. Returning drops `rx`, so every later command
            // surfaces to callers as `AudioError::Disconnected`.
            return;
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;

        while let Ok(cmd) = rx.recv() {
            match cmd {
                AudioCmd::Load { path, reply } => {
                    // The current song stops before the new file is touched,
                    // so a failed load leaves silence rather than the old song.
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    match create_sink(&stream, &path) {
                        Ok(new_sink) => {
                            sink = Some(new_sink);
                            if let Ok(mut pos) = position.lock() {
                                pos.loaded = true;
                                pos.started_at = None;
                                pos.accumulated = Duration::ZERO;
                            }
                            let _ = reply.send(Ok(()));
                        }
                        Err(e) => {
                            if let Ok(mut pos) = position.lock() {
                                *pos = PositionInfo::default();
                            }
                            let _ = reply.send(Err(e));
                        }
                    }
                }

                AudioCmd::Play | AudioCmd::Unpause => {
                    if let Some(ref s) = sink {
                        s.play();
                        if let Ok(mut pos) = position.lock() {
                            if pos.loaded && pos.started_at.is_none() {
                                pos.started_at = Some(Instant::now());
                            }
                        }
                    }
                }

                AudioCmd::Pause => {
                    if let Some(ref s) = sink {
                        s.pause();
                        if let Ok(mut pos) = position.lock() {
                            if let Some(st) = pos.started_at.take() {
                                pos.accumulated += st.elapsed();
                            }
                        }
                    }
                }

                AudioCmd::Stop => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    if let Ok(mut pos) = position.lock() {
                        *pos = PositionInfo::default();
                    }
                }

                AudioCmd::Quit => {
                    if let Some(s) = sink.take() {
                        s.stop();
                    }
                    if let Ok(mut pos) = position.lock() {
                        *pos = PositionInfo::default();
                    }
                    break;
                }
            }
        }
    })
}
