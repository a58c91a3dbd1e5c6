//! TUI-local state (not shared with the window manager).

use pwstream::log::LogLine;

/// Input mode for the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputMode {
    /// Normal mode: arrow keys move the selection, `q` quits.
    Normal,
    /// Typing a password to look up. Enter submits, Esc cancels.
    Search,
    /// Typing a decimal index to jump to. Enter submits, Esc cancels.
    Jump,
}

/// Which pane currently receives scroll input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ActivePane {
    Stream,
    Log,
}

pub(crate) struct App {
    pub(crate) input_mode: InputMode,
    pub(crate) input_buffer: String,
    pub(crate) active_pane: ActivePane,
    /// Whether the logs pane is visible (toggled with `,`).
    pub(crate) show_logs: bool,
    /// Offset from the bottom of the log (0 = follow tail).
    pub(crate) log_scroll: usize,
    /// Selected row, as a position inside the current window.
    pub(crate) selected: usize,
    /// Rows from the end of the window at which more entries are requested.
    pub(crate) proximity_rows: usize,
    /// Captured log lines, drained from the tracing buffer each frame.
    pub(crate) logs: Vec<LogLine>,
    /// Status message shown in the input bar.
    pub(crate) status_message: Option<String>,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new(proximity_rows: usize) -> Self {
        Self {
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            active_pane: ActivePane::Stream,
            show_logs: false,
            log_scroll: 0,
            selected: 0,
            proximity_rows,
            logs: Vec::new(),
            status_message: None,
            should_quit: false,
        }
    }
}
