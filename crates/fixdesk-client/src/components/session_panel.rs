// crates/fixdesk-client/src/components/session_panel.rs

use fixdesk_core::messages::{text_or_placeholder, PLACEHOLDER};
use fixdesk_core::{FixStatus, SessionState, StatusTone};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Panel};
use crate::components::panel_border;

/// Label/value pairs shown under the status badge.
pub fn session_rows(session: &SessionState) -> Vec<(&'static str, String)> {
    let fallback = FixStatus::default();
    let status = session.status().unwrap_or(&fallback);

    let sessions = if status.sessions.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        status.sessions.join(", ")
    };

    vec![
        ("Session", status.session_line()),
        ("Endpoint", status.endpoint()),
        ("Details", text_or_placeholder(status.details.as_deref())),
        ("Sessions", sessions),
        ("Last event", text_or_placeholder(status.diagnostics.last_event.as_deref())),
        ("Last error", text_or_placeholder(status.diagnostics.last_error.as_deref())),
        ("Updated", text_or_placeholder(status.diagnostics.last_updated_at.as_deref())),
    ]
}

pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Up => Color::Green,
        StatusTone::Down => Color::Gray,
        StatusTone::Faulted => Color::Red,
        StatusTone::Neutral => Color::Cyan,
    }
}

pub fn draw_session_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" FIX Session ")
        .borders(Borders::ALL)
        .border_style(panel_border(app.current_panel == Panel::Session));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Badge
            Constraint::Min(3),     // Fields
            Constraint::Length(1),  // Actions
        ])
        .split(inner);

    let session = &app.session;
    let badge = Line::from(vec![
        Span::raw("Status: "),
        Span::styled(
            session.current_status(),
            Style::default()
                .fg(tone_color(session.tone()))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(badge), chunks[0]);

    let mut lines: Vec<Line> = session_rows(session)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<11}"), Style::default().fg(Color::Gray)),
                Span::raw(value),
            ])
        })
        .collect();

    if let Some(err) = session.error() {
        lines.push(Line::from(Span::styled(err, Style::default().fg(Color::Red))));
    }

    let fields = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(fields, chunks[1]);

    let actions = Paragraph::new("[g] Start  [x] Stop")
        .style(Style::default().fg(Color::Gray));
    f.render_widget(actions, chunks[2]);
}
