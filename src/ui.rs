//! Terminal rendering.
//!
//! One `draw` entry point rebuilds the whole screen each frame from the
//! [`App`](crate::app::App) view-model: header, albums sidebar, song list
//! with playback info, status box and the controls footer.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, Focus, PlaybackState};
use crate::config::UiSettings;
use crate::library::{Playlist, Song};

/// Render the controls help text for the footer.
fn controls_text() -> String {
    [
        ("j/k", "up/down"),
        ("gg/G", "top/bottom"),
        ("tab", "switch pane"),
        ("enter", "play"),
        ("space/p", "play/pause"),
        ("h/l", "prev/next"),
        ("x", "stop"),
        ("a", "add folder"),
        ("q", "quit"),
    ]
    .iter()
    .map(|(k, v)| format!("[{k}] {v}"))
    .collect::<Vec<String>>()
    .join(" | ")
}

/// One row of the song list.
fn song_row(song: &Song) -> String {
    format!("{} - {} ({})", song.title, song.artist, song.duration)
}

fn pane_highlight(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// Slice of the song list to render, keeping the cursor centered once the
/// list outgrows the pane. Returns the visible range and where the cursor
/// sits inside it. Items outside the range are never turned into rows.
fn visible_window(total: usize, height: usize, cursor: usize) -> (Range<usize>, usize) {
    if height == 0 || total <= height {
        return (0..total, cursor);
    }
    let start = cursor.saturating_sub(height / 2).min(total - height);
    (start..start + height, cursor - start)
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, playlist: Option<&Playlist>, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" harmony ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Body: sidebar on the left, song list and playback info on the right.
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(chunks[1]);

    let songs: &[Song] = playlist.map(|p| p.songs.as_slice()).unwrap_or(&[]);
    draw_sidebar(frame, app, songs.len(), body[0]);
    draw_song_pane(frame, app, playlist, songs, body[1]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        if let Some(input) = &app.input {
            parts.push(format!("Add folder: {input}"));
        }
        if let Some(status) = &app.status_line {
            parts.push(status.clone());
        }
        parts.push(
            match app.playback {
                PlaybackState::Playing => "Playing",
                PlaybackState::Paused => "Paused",
                PlaybackState::Stopped => "Stopped",
            }
            .to_string(),
        );

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[2]);

    // Controls footer
    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

/// Albums sidebar with the song-count stat underneath.
fn draw_sidebar(frame: &mut Frame, app: &App, song_count: usize, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = app
        .sidebar
        .iter()
        .map(|e| ListItem::new(e.label().to_string()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" albums "))
        .highlight_style(pane_highlight(app.focus == Focus::Sidebar))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    state.select(Some(app.sidebar_selected));
    frame.render_stateful_widget(list, rows[0], &mut state);

    let stat = Paragraph::new(format!(" {song_count} songs")).alignment(Alignment::Left);
    frame.render_widget(stat, rows[1]);
}

/// Song list plus the now-playing, progress and time rows.
fn draw_song_pane(
    frame: &mut Frame,
    app: &App,
    playlist: Option<&Playlist>,
    songs: &[Song],
    area: Rect,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let total = songs.len();
    let cursor = app.selected.min(total.saturating_sub(1));
    let (window, cursor_in_window) = visible_window(total, rows[0].height as usize, cursor);

    let visible_items: Vec<ListItem> = songs[window]
        .iter()
        .map(|s| ListItem::new(song_row(s)))
        .collect();

    let title = playlist
        .map(|p| format!(" {} ", p.name))
        .unwrap_or_else(|| " songs ".to_string());
    let list = List::new(visible_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(pane_highlight(app.focus == Focus::Songs))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if total > 0 {
        state.select(Some(cursor_in_window));
    }
    frame.render_stateful_widget(list, rows[0], &mut state);

    // Now playing
    let now_text = match &app.now_playing {
        Some((title, artist)) => format!("{title} - {artist}"),
        None => "No song selected".to_string(),
    };
    let now = Paragraph::new(now_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" now playing ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(now, rows[1]);

    // Progress gauge and the elapsed/remaining row under it.
    let percent = app.progress.as_ref().map(|p| p.percent).unwrap_or(0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .ratio(f64::from(percent) / 100.0)
        .label(format!("{percent}%"));
    frame.render_widget(gauge, rows[2]);

    let times = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    let (elapsed, remaining) = match &app.progress {
        Some(p) => (p.elapsed.as_str(), p.remaining.as_str()),
        None => ("0:00", "-0:00"),
    };
    frame.render_widget(
        Paragraph::new(format!(" {elapsed}")).alignment(Alignment::Left),
        times[0],
    );
    frame.render_widget(
        Paragraph::new(format!("{remaining} ")).alignment(Alignment::Right),
        times[1],
    );
}
