//! Utilities for creating `rodio` sinks from audio files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink`, reporting failures instead of panicking.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use super::output::AudioError;

/// Open and decode the file at `path`, returning a paused `Sink` ready to
/// play it from the start.
pub(super) fn create_sink(handle: &OutputStream, path: &Path) -> Result<Sink, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
