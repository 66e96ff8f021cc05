use serde::Deserialize;

/// Everything `config.toml` can set, with working defaults for all of it.
///
/// Sources, weakest first: the defaults below, then the TOML file at
/// `$XDG_CONFIG_HOME/harmony/config.toml` (`~/.config` fallback), then
/// `HARMONY__`-prefixed environment variables with `__` separating the
/// section from the key.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playlist: PlaylistSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            playlist: PlaylistSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Folder imported at startup when no folder is given on the command line.
    pub music_dir: Option<String>,
    /// Entry-name suffixes to treat as audio (case-sensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            music_dir: None,
            extensions: vec!["wav".into(), "mp3".into(), "ogg".into(), "flac".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Name of the playlist the app starts with.
    pub name: String,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            name: "My Playlist".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Interval between progress polls while playing (milliseconds).
    pub progress_tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Harmony Player ~ ".to_string(),
            progress_tick_ms: 100,
        }
    }
}
