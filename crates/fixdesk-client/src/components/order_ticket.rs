// crates/fixdesk-client/src/components/order_ticket.rs

use fixdesk_core::{OrderForm, Side, SubmitKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, Panel, TicketField};
use crate::components::panel_border;

/// Text shown for one ticket field.
pub fn field_value(form: &OrderForm, field: TicketField) -> String {
    match field {
        TicketField::Symbol => form.symbol.clone(),
        TicketField::Side => form.side.as_str().to_string(),
        TicketField::Qty => form.qty.clone(),
        TicketField::Type => form.order_type.as_str().to_string(),
        TicketField::Price if !form.order_type.is_limit() && form.price.is_empty() => {
            "MARKET".to_string()
        }
        TicketField::Price => form.price.clone(),
        TicketField::Tif => form.tif.as_str().to_string(),
    }
}

pub fn draw_order_ticket(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" New Order ")
        .borders(Borders::ALL)
        .border_style(panel_border(app.current_panel == Panel::Ticket));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TicketField::ALL.len() as u16), // Fields
            Constraint::Min(2),                                // Notices
            Constraint::Length(1),                             // Actions
        ])
        .split(inner);

    let editing = app.input_mode == InputMode::Editing;
    let form = &app.ticket.form;

    let field_lines: Vec<Line> = TicketField::ALL
        .iter()
        .map(|&field| {
            let focused = editing && app.ticket_field == field;
            let marker = if focused { "> " } else { "  " };

            let mut value_style = match field {
                TicketField::Side => match form.side {
                    Side::Buy => Style::default().fg(Color::Green),
                    Side::Sell => Style::default().fg(Color::Red),
                },
                TicketField::Price if !form.order_type.is_limit() => {
                    Style::default().fg(Color::DarkGray)
                }
                _ => Style::default().fg(Color::Cyan),
            };
            if focused {
                value_style = value_style.add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::raw(marker),
                Span::styled(format!("{:<9}", field.label()), Style::default().fg(Color::Gray)),
                Span::styled(field_value(form, field), value_style),
            ];
            if focused {
                let cursor = if field.is_text() { "_" } else { " ◀▶" };
                spans.push(Span::styled(cursor, Style::default().add_modifier(Modifier::SLOW_BLINK)));
            }
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(field_lines), chunks[0]);

    // Notices: validation error, then submit state or last result
    let mut notices = Vec::new();
    if let Some(err) = app.ticket.form_error() {
        notices.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    if app.ticket.is_submitting() {
        notices.push(Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(result) = app.ticket.result() {
        let color = match result.kind {
            SubmitKind::Success => Color::Green,
            SubmitKind::Error => Color::Red,
        };
        notices.push(Line::from(Span::styled(
            result.message.as_str(),
            Style::default().fg(color),
        )));
    }
    f.render_widget(Paragraph::new(notices).wrap(Wrap { trim: true }), chunks[1]);

    let actions_text = if editing {
        "[Enter] Submit | [Esc] Done"
    } else {
        "[n]/[Enter] Edit Order"
    };
    let actions_widget = Paragraph::new(actions_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(actions_widget, chunks[2]);
}
