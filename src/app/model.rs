//! View-model types: `App`, `SidebarEntry`, `Focus` and `PlaybackState`.
//!
//! `App` never talks to the audio device or the filesystem; it digests
//! [`PlayerEvent`]s and user edits into whatever the next draw needs.

use crate::player::{PlaybackProgress, PlayerEvent};

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Which pane owns the navigation keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Songs,
}

/// An entry in the albums sidebar.
///
/// Only `AddFolder` does anything when activated; the rest are shelf
/// labels. Imported folders are inserted just before `AddFolder`, which
/// stays last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarEntry {
    AllSongs,
    RecentlyAdded,
    Favorites,
    Folder(String),
    AddFolder,
}

impl SidebarEntry {
    pub fn label(&self) -> &str {
        match self {
            Self::AllSongs => "All Songs",
            Self::RecentlyAdded => "Recently Added",
            Self::Favorites => "Favorites",
            Self::Folder(name) => name,
            Self::AddFolder => "+ Add Folder",
        }
    }
}

/// The main application model.
pub struct App {
    pub sidebar: Vec<SidebarEntry>,
    pub sidebar_selected: usize,
    /// Cursor in the song list.
    pub selected: usize,
    pub focus: Focus,
    pub playback: PlaybackState,
    /// Title and artist of the last song that started.
    pub now_playing: Option<(String, String)>,
    pub progress: Option<PlaybackProgress>,
    /// Latest operation status, rendered verbatim in the status box.
    pub status_line: Option<String>,
    /// Text being typed into the add-folder prompt, while it is open.
    pub input: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            sidebar: vec![
                SidebarEntry::AllSongs,
                SidebarEntry::RecentlyAdded,
                SidebarEntry::Favorites,
                SidebarEntry::AddFolder,
            ],
            sidebar_selected: 0,
            selected: 0,
            focus: Focus::Songs,
            playback: PlaybackState::Stopped,
            now_playing: None,
            progress: None,
            status_line: None,
            input: None,
        }
    }

    /// Record the outcome of an operation for the status box.
    pub fn set_status(&mut self, status: String) {
        self.status_line = Some(status);
    }

    /// Fold a player notification into the view state. The cursor follows
    /// whichever song starts, user- or auto-initiated.
    pub fn apply_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::SongStarted {
                index,
                title,
                artist,
            } => {
                self.playback = PlaybackState::Playing;
                self.now_playing = Some((title, artist));
                self.progress = None;
                self.selected = index;
            }
            PlayerEvent::Progress(p) => self.progress = Some(p),
            PlayerEvent::Paused => self.playback = PlaybackState::Paused,
            PlayerEvent::Resumed => self.playback = PlaybackState::Playing,
            PlayerEvent::Stopped => {
                self.playback = PlaybackState::Stopped;
                self.progress = None;
            }
        }
    }

    /// Reconcile with the engine's flags. Load failures produce no event,
    /// so this catches playback dropping out between events.
    pub fn sync_playback(&mut self, is_playing: bool, is_paused: bool) {
        self.playback = if !is_playing {
            PlaybackState::Stopped
        } else if is_paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        };
        if self.playback == PlaybackState::Stopped {
            self.progress = None;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Songs,
            Focus::Songs => Focus::Sidebar,
        };
    }

    pub fn selected_sidebar_entry(&self) -> Option<&SidebarEntry> {
        self.sidebar.get(self.sidebar_selected)
    }

    /// Insert a folder entry just before the trailing `AddFolder`.
    pub fn add_folder_entry(&mut self, name: String) {
        let at = self.sidebar.len().saturating_sub(1);
        self.sidebar.insert(at, SidebarEntry::Folder(name));
    }

    /// Move the focused cursor down one row, stopping at the end.
    pub fn move_down(&mut self, songs_len: usize) {
        match self.focus {
            Focus::Songs => {
                if self.selected + 1 < songs_len {
                    self.selected += 1;
                }
            }
            Focus::Sidebar => {
                if self.sidebar_selected + 1 < self.sidebar.len() {
                    self.sidebar_selected += 1;
                }
            }
        }
    }

    /// Move the focused cursor up one row, stopping at the top.
    pub fn move_up(&mut self) {
        match self.focus {
            Focus::Songs => self.selected = self.selected.saturating_sub(1),
            Focus::Sidebar => self.sidebar_selected = self.sidebar_selected.saturating_sub(1),
        }
    }

    pub fn jump_top(&mut self) {
        match self.focus {
            Focus::Songs => self.selected = 0,
            Focus::Sidebar => self.sidebar_selected = 0,
        }
    }

    pub fn jump_bottom(&mut self, songs_len: usize) {
        match self.focus {
            Focus::Songs => self.selected = songs_len.saturating_sub(1),
            Focus::Sidebar => self.sidebar_selected = self.sidebar.len().saturating_sub(1),
        }
    }

    /// Keep the song cursor inside the list after the playlist changed.
    pub fn clamp_selection(&mut self, songs_len: usize) {
        if songs_len == 0 {
            self.selected = 0;
        } else if self.selected >= songs_len {
            self.selected = songs_len - 1;
        }
    }

    pub fn is_prompting(&self) -> bool {
        self.input.is_some()
    }

    pub fn open_folder_prompt(&mut self) {
        self.input = Some(String::new());
    }

    pub fn cancel_folder_prompt(&mut self) {
        self.input = None;
    }

    pub fn push_input_char(&mut self, c: char) {
        if let Some(input) = self.input.as_mut() {
            input.push(c);
        }
    }

    pub fn pop_input_char(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.pop();
        }
    }

    /// Close the prompt, handing its text to the caller.
    pub fn take_folder_input(&mut self) -> Option<String> {
        self.input.take()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
