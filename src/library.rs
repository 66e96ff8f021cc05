//! Playlist and song model plus folder import.
//!
//! `Song` and `Playlist` live in `library::model`; the folder import and
//! the metadata seam it relies on live in `library::import` and
//! `library::metadata`.

mod import;
mod metadata;
mod model;

pub use import::ImportError;
pub use metadata::{MetadataProvider, PlaceholderMetadata, SongMetadata};
pub use model::{Playlist, Song};
