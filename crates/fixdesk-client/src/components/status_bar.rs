// crates/fixdesk-client/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = match app.input_mode {
        InputMode::Normal => {
            let shortcuts = vec![
                Span::styled("[G]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" Start FIX "),
                Span::styled("[X]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" Stop FIX "),
                Span::styled("[N]", Style::default().fg(Color::Yellow)),
                Span::raw("ew Order "),
                Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
                Span::raw(" Details "),
                Span::styled("[R]", Style::default().fg(Color::Magenta)),
                Span::raw("efresh "),
                Span::styled("[Q]", Style::default().fg(Color::Gray)),
                Span::raw("uit"),
            ];
            (Line::from(shortcuts), Style::default())
        }
        InputMode::Editing => {
            let input = vec![
                Span::raw("Editing "),
                Span::styled(app.ticket_field.label(), Style::default().fg(Color::Yellow)),
                Span::raw(" [↑↓] Field [←→/Space] Cycle [Enter] Submit [Esc] Done"),
            ];
            (Line::from(input), Style::default().fg(Color::Yellow))
        }
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
