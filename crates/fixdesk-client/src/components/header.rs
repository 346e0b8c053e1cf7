// crates/fixdesk-client/src/components/header.rs

use fixdesk_core::messages::HEALTH_CHECKING;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(area);

    // Left: title and backend health
    let health = app.health.message();
    let health_color = if app.health.is_ok() {
        Color::Green
    } else if health == HEALTH_CHECKING {
        Color::Yellow
    } else {
        Color::Red
    };

    let left_text = vec![
        Span::styled("FIX Desk", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" - "),
        Span::styled(health, Style::default().fg(health_color)),
    ];
    let left_paragraph = Paragraph::new(Line::from(left_text))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(left_paragraph, header_chunks[0]);

    // Center: backend origin and traffic
    let center_text = format!(
        "{} | Msgs: {} | Pending: {}",
        app.backend_label(),
        app.message_count,
        app.pending_requests()
    );
    let center_paragraph = Paragraph::new(center_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(center_paragraph, header_chunks[1]);

    // Right: help hints
    let help_text = "[F1]Help [Tab]Panel [r]Retry";
    let right_paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[2]);
}
