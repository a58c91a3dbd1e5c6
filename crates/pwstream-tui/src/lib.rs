//! Terminal viewer for the `pwstream` password stream.
//!
//! Renders a [`SharedWindow`] as a scrollable list (ratatui + crossterm).
//! Scrolling near the end of the list asks the window manager for another
//! batch; `/` looks a password up and `g` jumps to an index.
//!
//! # Quick start
//!
//! ```ignore
//! use pwstream::prelude::*;
//! use pwstream_tui::{TuiConfig, spawn_tui};
//!
//! let state = new_shared(Codec::new(), WindowConfig::default());
//! let handle = spawn_tui(state.clone(), TuiConfig::default());
//! handle.join().unwrap();
//! ```

use std::io;
use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use pwstream::log::LogBuffer;
use pwstream::shared::SharedWindow;
use ratatui::prelude::*;

mod app;
mod input;
mod render;

pub use render::{log_level_style, truncate_str};

use app::App;
use input::handle_key_event;
use render::render;

/// Default number of rows from the end of the window that triggers a
/// proximity signal.
pub const DEFAULT_PROXIMITY_ROWS: usize = 6;

/// Configuration for the TUI.
pub struct TuiConfig {
    /// Rows from the end at which more entries are requested.
    pub proximity_rows: usize,
    /// Optional log buffer from the capture layer.
    ///
    /// When set, the TUI drains pending log lines once per frame into its
    /// own log pane, so logging never writes over the alternate screen.
    pub log_buffer: Option<LogBuffer>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            proximity_rows: DEFAULT_PROXIMITY_ROWS,
            log_buffer: None,
        }
    }
}

impl TuiConfig {
    pub fn with_proximity_rows(mut self, rows: usize) -> Self {
        self.proximity_rows = rows;
        self
    }

    pub fn with_log_buffer(mut self, buffer: LogBuffer) -> Self {
        self.log_buffer = Some(buffer);
        self
    }
}

/// Spawn the TUI on a dedicated OS thread.
pub fn spawn_tui(state: SharedWindow, config: TuiConfig) -> JoinHandle<()> {
    std::thread::spawn(move || {
        if let Err(e) = run_tui(state, &config) {
            eprintln!("TUI error: {e}");
        }
    })
}

/// Run the TUI event loop (blocking) until the user quits.
pub fn run_tui(state: SharedWindow, config: &TuiConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let result = event_loop(&mut terminal, &state, config);

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &SharedWindow,
    config: &TuiConfig,
) -> io::Result<()> {
    let mut app = App::new(config.proximity_rows);

    while !app.should_quit {
        if let Some(ref log_buf) = config.log_buffer {
            log_buf.drain_into(&mut app.logs);
        }

        terminal.draw(|frame| render(frame, state, &app))?;

        // 100ms poll keeps log lines flowing without input.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key_event(key, &mut app, state);
        }
    }
    Ok(())
}
