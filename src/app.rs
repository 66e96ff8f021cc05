//! Application module: exposes the view-model used by the TUI and runtime.
//!
//! The `App` struct in `app::model` holds what the screen shows: sidebar
//! entries, cursors, the latest status line and the playback snapshot
//! built from player events.

mod model;

pub use model::*;
