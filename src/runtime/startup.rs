use std::path::Path;

use crate::app::App;
use crate::config::Settings;
use crate::library::{PlaceholderMetadata, Playlist};
use crate::player::Player;

/// Build the starting playlist and hand it to the player.
///
/// The command-line folder wins over the configured `library.music_dir`;
/// with neither, the player starts with an empty playlist. Import results
/// land in the status line, same as for a folder added at runtime.
pub fn load_initial_playlist(
    player: &mut Player,
    app: &mut App,
    arg_dir: Option<String>,
    settings: &Settings,
) {
    let mut playlist = Playlist::new(settings.playlist.name.clone());

    if let Some(dir) = arg_dir.or_else(|| settings.library.music_dir.clone()) {
        match playlist.add_songs_from_folder(
            Path::new(&dir),
            &PlaceholderMetadata,
            &settings.library,
        ) {
            Ok(added) => {
                app.add_folder_entry(folder_label(&dir));
                app.set_status(format!("Added {added} songs"));
            }
            Err(e) => app.set_status(format!("Error: {e}")),
        }
    }

    player.load_playlist(playlist);
}

/// Import a folder typed into the prompt, extending the live playlist.
/// Blank input is ignored so an accidental Enter does nothing.
pub fn import_folder(player: &mut Player, app: &mut App, settings: &Settings, raw: &str) {
    let dir = raw.trim();
    if dir.is_empty() {
        return;
    }

    let Some(playlist) = player.playlist_mut() else {
        app.set_status("No playlist loaded".to_string());
        return;
    };
    match playlist.add_songs_from_folder(
        Path::new(dir),
        &PlaceholderMetadata,
        &settings.library,
    ) {
        Ok(added) => {
            app.add_folder_entry(folder_label(dir));
            app.set_status(format!("Added {added} songs"));
        }
        Err(e) => app.set_status(format!("Error: {e}")),
    }
}

/// Sidebar label for an imported folder: its final path component.
fn folder_label(dir: &str) -> String {
    Path::new(dir)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(dir)
        .to_string()
}
