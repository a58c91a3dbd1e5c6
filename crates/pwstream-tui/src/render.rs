//! Rendering for the stream view.

use pwstream::Entry;
use pwstream::format::group_thousands;
use pwstream::log::{LogLevel, LogLine};
use pwstream::shared::{SharedWindow, with_window};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{ActivePane, App, InputMode};

// ── Public Utilities ──────────────────────────────────────────────────

/// Truncate a string to at most `max` characters, appending "..." if truncated.
pub fn truncate_str(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", s.get(..cut).unwrap_or(s)),
        None => s.to_string(),
    }
}

/// Map a log level to a ratatui [`Style`].
pub fn log_level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
        LogLevel::Debug => Style::default().fg(Color::Cyan),
        LogLevel::Info => Style::default().fg(Color::Green),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

// ── Root Render ───────────────────────────────────────────────────────

/// Everything a frame needs from the window, cloned under the lock so no
/// widget construction happens while it is held.
struct RenderSnapshot {
    cursor: String,
    capacity: String,
    entries: Vec<Entry>,
}

pub(crate) fn render(frame: &mut Frame, state: &SharedWindow, app: &App) {
    let area = frame.area();

    // Outer layout: [3] status | [flex] middle | [3] input bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    let snap = with_window(state, |m| RenderSnapshot {
        cursor: group_thousands(m.cursor()),
        capacity: group_thousands(m.codec().capacity()),
        entries: m.entries().cloned().collect(),
    });

    render_status(frame, chunks[0], &snap);
    render_input(frame, chunks[2], app);

    if app.show_logs {
        let mid = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        render_stream(frame, mid[0], &snap.entries, app);
        render_logs(frame, mid[1], &app.logs, app);
    } else {
        render_stream(frame, chunks[1], &snap.entries, app);
    }
}

// ── Status Pane ───────────────────────────────────────────────────────

fn render_status(frame: &mut Frame, area: Rect, snap: &RenderSnapshot) {
    let label = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled("window ", label),
        Span::styled(
            format!("{} ", snap.entries.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("from ", label),
        Span::styled(
            snap.entries
                .first()
                .map(|e| format!("#{} ", group_thousands(e.index.value())))
                .unwrap_or_else(|| "- ".into()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(" cursor ", label),
        Span::styled(format!("#{} ", snap.cursor), Style::default().fg(Color::Cyan)),
        Span::styled(" exact up to ", label),
        Span::raw(truncate_str(&snap.capacity, 48)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" pwstream ");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

// ── Stream Pane ───────────────────────────────────────────────────────

fn render_stream(frame: &mut Frame, area: Rect, entries: &[Entry], app: &App) {
    let width = entries
        .last()
        .map(|e| group_thousands(e.index.value()).len())
        .unwrap_or(1);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$}  ", group_thousands(e.index.value())),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(e.password.clone()),
            ]))
        })
        .collect();

    let border_color = if app.active_pane == ActivePane::Stream {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Stream ");

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !entries.is_empty() {
        list_state.select(Some(app.selected.min(entries.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

// ── Log Pane ──────────────────────────────────────────────────────────

fn render_logs(frame: &mut Frame, area: Rect, logs: &[LogLine], app: &App) {
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = logs
        .iter()
        .map(|log| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", log.time),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", log.level.label()),
                    log_level_style(log.level),
                ),
                Span::raw(log.message.as_str()),
            ])
        })
        .collect();

    let scroll = lines
        .len()
        .saturating_sub(inner_height)
        .saturating_sub(app.log_scroll);

    let border_color = if app.active_pane == ActivePane::Log {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Log ");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ── Input Bar ─────────────────────────────────────────────────────────

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let (title, style) = match app.input_mode {
        InputMode::Normal => {
            let hint = app.status_message.clone().unwrap_or_else(|| {
                "[q] quit  [/] search  [g] jump  [t] top  [,] logs  [Up/Down] scroll".to_string()
            });
            (format!(" {hint} "), Style::default().fg(Color::DarkGray))
        }
        InputMode::Search => (
            " Password to find: [Enter] search  [Esc] cancel ".to_string(),
            Style::default().fg(Color::Green),
        ),
        InputMode::Jump => (
            " Index to jump to: [Enter] jump  [Esc] cancel ".to_string(),
            Style::default().fg(Color::Yellow),
        ),
    };

    let input_text = match app.input_mode {
        InputMode::Normal => String::new(),
        InputMode::Search | InputMode::Jump => format!("> {}\u{2588}", app.input_buffer),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);
    frame.render_widget(Paragraph::new(input_text).block(block), area);
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pwstream::shared::new_shared;
    use pwstream::{Codec, WindowConfig};
    use ratatui::backend::TestBackend;

    #[test]
    fn truncate_str_short() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn truncate_str_long() {
        assert_eq!(truncate_str("hello world", 5), "hello...");
    }

    #[test]
    fn truncate_str_counts_chars() {
        assert_eq!(truncate_str("\u{e9}\u{e9}\u{e9}", 2), "\u{e9}\u{e9}...");
    }

    #[test]
    fn log_level_style_colors() {
        assert_eq!(log_level_style(LogLevel::Info).fg, Some(Color::Green));
        assert_eq!(log_level_style(LogLevel::Warn).fg, Some(Color::Yellow));
        assert!(
            log_level_style(LogLevel::Error)
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }

    fn draw(app: &App) -> String {
        let state = new_shared(Codec::new(), WindowConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, &state, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn renders_first_entries() {
        let screen = draw(&App::new(6));
        assert!(screen.contains("aaaaaaaa"));
        assert!(screen.contains("aaaaaaab"));
        assert!(screen.contains("cursor #36"));
    }

    #[test]
    fn renders_prompt() {
        let mut app = App::new(6);
        app.input_mode = InputMode::Jump;
        app.input_buffer.push_str("42");
        let screen = draw(&app);
        assert!(screen.contains("Index to jump to"));
        assert!(screen.contains("> 42"));
    }
}
