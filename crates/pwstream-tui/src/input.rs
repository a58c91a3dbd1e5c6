//! Key handling for the stream view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pwstream::format::group_thousands;
use pwstream::shared::{SharedWindow, jump, lookup, signal_proximity, with_window};

use crate::app::{ActivePane, App, InputMode};

/// Rows moved by PageUp/PageDown.
const PAGE_ROWS: usize = 20;

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App, state: &SharedWindow) {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(key, app, state),
        InputMode::Search | InputMode::Jump => handle_prompt_key(key, app, state),
    }
}

fn handle_normal_key(key: KeyEvent, app: &mut App, state: &SharedWindow) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char(',') => {
            app.show_logs = !app.show_logs;
            app.active_pane = if app.show_logs {
                ActivePane::Log
            } else {
                ActivePane::Stream
            };
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if app.show_logs {
                app.active_pane = match app.active_pane {
                    ActivePane::Log => ActivePane::Stream,
                    ActivePane::Stream => ActivePane::Log,
                };
            }
        }
        KeyCode::Char('/') => open_prompt(app, InputMode::Search),
        KeyCode::Char('g') => open_prompt(app, InputMode::Jump),
        KeyCode::Down | KeyCode::Char('j') => scroll(app, state, 1),
        KeyCode::Up | KeyCode::Char('k') => scroll(app, state, -1),
        KeyCode::PageDown => scroll(app, state, PAGE_ROWS as isize),
        KeyCode::PageUp => scroll(app, state, -(PAGE_ROWS as isize)),
        KeyCode::Home | KeyCode::Char('t') => match app.active_pane {
            ActivePane::Stream => app.selected = 0,
            ActivePane::Log => app.log_scroll = app.logs.len(),
        },
        KeyCode::End => match app.active_pane {
            ActivePane::Stream => {
                app.selected = with_window(state, |m| m.len().saturating_sub(1));
                request_more_if_near_end(app, state);
            }
            ActivePane::Log => app.log_scroll = 0,
        },
        _ => {}
    }
}

fn open_prompt(app: &mut App, mode: InputMode) {
    app.input_mode = mode;
    app.input_buffer.clear();
    app.status_message = None;
}

fn handle_prompt_key(key: KeyEvent, app: &mut App, state: &SharedWindow) {
    match key.code {
        KeyCode::Esc => {
            app.input_buffer.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            let text = std::mem::take(&mut app.input_buffer);
            let mode = app.input_mode;
            app.input_mode = InputMode::Normal;
            match mode {
                InputMode::Search => submit_search(app, state, &text),
                InputMode::Jump => submit_jump(app, state, &text),
                InputMode::Normal => {}
            }
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}

/// Move the active pane by `delta` rows.
fn scroll(app: &mut App, state: &SharedWindow, delta: isize) {
    match app.active_pane {
        ActivePane::Stream => {
            let len = with_window(state, |m| m.len());
            if len == 0 {
                return;
            }
            app.selected = app.selected.saturating_add_signed(delta).min(len - 1);
            request_more_if_near_end(app, state);
        }
        // Log offsets count up from the bottom.
        ActivePane::Log => {
            app.log_scroll = app.log_scroll.saturating_add_signed(-delta);
        }
    }
}

/// Proximity trigger: once the selection is within `proximity_rows` of the
/// last entry, ask for another batch. Eviction shifts every surviving entry
/// toward the head, so the selection shifts with it.
pub(crate) fn request_more_if_near_end(app: &mut App, state: &SharedWindow) {
    let len = with_window(state, |m| m.len());
    if app.selected + app.proximity_rows >= len {
        let evicted = signal_proximity(state);
        app.selected = app.selected.saturating_sub(evicted);
    }
}

fn submit_search(app: &mut App, state: &SharedWindow, text: &str) {
    match lookup(state, text) {
        Ok(index) => {
            let position = with_window(state, |m| m.entries().position(|e| e.index == index));
            if let Some(position) = position {
                app.selected = position;
            }
            app.status_message = Some(format!("Index: {}", group_thousands(index.value())));
        }
        Err(e) => {
            app.status_message = Some(format!("Not a password: {e}"));
        }
    }
}

fn submit_jump(app: &mut App, state: &SharedWindow, text: &str) {
    match jump(state, text) {
        Ok(()) => {
            app.selected = 0;
            let first = with_window(state, |m| m.first_index().cloned());
            app.status_message =
                first.map(|index| format!("Jumped to #{}", group_thousands(index.value())));
        }
        Err(_) => {
            app.status_message = Some("Enter a positive integer".into());
        }
    }
}
