use crate::app::{App, PlaybackState};
use crate::mpris::MprisHandle;
use crate::player::Player;

/// Push the player's current song and playback state out to MPRIS.
///
/// While stopped the metadata is cleared rather than left pointing at the
/// last song.
pub fn update_mpris(mpris: &MprisHandle, app: &App, player: &Player) {
    let song = if app.playback == PlaybackState::Stopped {
        None
    } else {
        player.current_song()
    };
    let index = song.map(|_| player.current_index());
    mpris.set_song_metadata(index, song);
    mpris.set_playback(app.playback);
}
