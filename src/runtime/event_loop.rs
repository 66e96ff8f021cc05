use std::io::Stdout;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::{App, Focus, PlaybackState, SidebarEntry};
use crate::config::Settings;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{Player, PlayerEvent};
use crate::runtime::mpris_sync::update_mpris;
use crate::runtime::startup;
use crate::ui;

/// State the event loop carries across iterations.
pub struct EventLoopState {
    /// A lone `g` was pressed; the next `g` jumps to the top.
    pending_gg: bool,
    last_tick: Instant,
    /// Snapshot of what was last pushed to MPRIS, so PropertiesChanged
    /// only fires when something actually changed.
    last_mpris_index: Option<usize>,
    last_mpris_playback: PlaybackState,
}

impl EventLoopState {
    pub fn new(app: &App) -> Self {
        Self {
            pending_gg: false,
            last_tick: Instant::now(),
            last_mpris_index: None,
            last_mpris_playback: app.playback,
        }
    }
}

/// Drive the player until the user quits.
///
/// Each pass polls playback progress on the configured cadence, folds
/// engine events into the view, redraws, then handles MPRIS commands and
/// key presses. Input polling uses a short timeout so progress keeps
/// moving while the keyboard is idle.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &Settings,
    app: &mut App,
    player: &mut Player,
    events: &Receiver<PlayerEvent>,
    mpris: &MprisHandle,
    control_tx: &Sender<ControlCmd>,
    control_rx: &Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.ui.progress_tick_ms);

    loop {
        // Auto-advance near the end of a song happens inside this poll.
        if state.last_tick.elapsed() >= tick {
            player.poll_progress();
            state.last_tick = Instant::now();
        }

        while let Ok(ev) = events.try_recv() {
            app.apply_event(ev);
        }
        app.sync_playback(player.is_playing(), player.is_paused());

        let songs_len = player.playlist().map(|p| p.len()).unwrap_or(0);
        app.clamp_selection(songs_len);

        let mpris_index =
            (app.playback != PlaybackState::Stopped).then(|| player.current_index());
        if mpris_index != state.last_mpris_index || app.playback != state.last_mpris_playback {
            update_mpris(mpris, app, player);
            state.last_mpris_index = mpris_index;
            state.last_mpris_playback = app.playback;
        }

        terminal.draw(|frame| ui::draw(frame, app, player.playlist(), &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app, player) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player, control_tx, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one remote command. Returns `true` when the loop should exit.
fn handle_control_cmd(cmd: ControlCmd, app: &mut App, player: &mut Player) -> bool {
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            // MPRIS Play resumes a paused song instead of restarting it.
            let status = if player.is_paused() {
                player.pause()
            } else {
                player.play()
            };
            app.set_status(status.to_string());
        }
        ControlCmd::Pause => {
            if player.is_playing() && !player.is_paused() {
                let status = player.pause();
                app.set_status(status.to_string());
            }
        }
        ControlCmd::PlayPause => {
            let status = if player.is_playing() {
                player.pause()
            } else {
                player.play()
            };
            app.set_status(status.to_string());
        }
        ControlCmd::Stop => player.stop(),
        ControlCmd::Next => {
            let status = player.next_song();
            app.set_status(status.to_string());
        }
        ControlCmd::Prev => {
            let status = player.previous_song();
            app.set_status(status.to_string());
        }
    }
    false
}

/// Handle one key press. Returns `true` when the user asked to quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &Settings,
    app: &mut App,
    player: &mut Player,
    control_tx: &Sender<ControlCmd>,
    state: &mut EventLoopState,
) -> bool {
    // The folder prompt captures everything while it is open.
    if app.is_prompting() {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => app.cancel_folder_prompt(),
            KeyCode::Backspace => app.pop_input_char(),
            KeyCode::Enter => {
                if let Some(dir) = app.take_folder_input() {
                    startup::import_folder(player, app, settings, &dir);
                }
            }
            KeyCode::Char(c) if !c.is_control() => app.push_input_char(c),
            _ => {}
        }
        return false;
    }

    let songs_len = player.playlist().map(|p| p.len()).unwrap_or(0);

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => {
            state.pending_gg = false;
            app.toggle_focus();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.move_down(songs_len);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.move_up();
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.jump_top();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.jump_bottom(songs_len);
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            match app.focus {
                Focus::Songs => {
                    let status = player.play_index(app.selected);
                    app.set_status(status.to_string());
                }
                Focus::Sidebar => {
                    // Shelf entries are labels for now; only the add
                    // button reacts.
                    if app.selected_sidebar_entry() == Some(&SidebarEntry::AddFolder) {
                        app.open_folder_prompt();
                    }
                }
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            state.pending_gg = false;
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('l') => {
            state.pending_gg = false;
            let _ = control_tx.send(ControlCmd::Next);
        }
        KeyCode::Char('h') => {
            state.pending_gg = false;
            let _ = control_tx.send(ControlCmd::Prev);
        }
        KeyCode::Char('x') => {
            state.pending_gg = false;
            let _ = control_tx.send(ControlCmd::Stop);
        }
        KeyCode::Char('a') => {
            state.pending_gg = false;
            app.open_folder_prompt();
        }
        KeyCode::Char(_) => state.pending_gg = false,
        _ => {}
    }

    false
}
