// crates/fixdesk-client/src/components/order_detail.rs

use fixdesk_core::messages::{
    number_or_placeholder, text_or_placeholder, DETAIL_LOADING, DETAIL_PROMPT,
};
use fixdesk_core::OrderDetails;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Order attributes, always present (missing values as `--`).
pub fn detail_rows(details: &OrderDetails) -> Vec<(&'static str, String)> {
    let s = &details.summary;
    vec![
        ("Order ID", s.id.clone()),
        ("Status", text_or_placeholder(s.status.as_deref())),
        ("Symbol", text_or_placeholder(s.symbol.as_deref())),
        ("Side", text_or_placeholder(s.side.as_deref())),
        ("Quantity", number_or_placeholder(s.qty)),
        ("Type", text_or_placeholder(s.order_type.as_deref())),
        ("Price", number_or_placeholder(s.price)),
        ("TIF", text_or_placeholder(s.tif.as_deref())),
        ("Updated", text_or_placeholder(s.updated_at.as_deref())),
        ("Message", text_or_placeholder(s.message.as_deref())),
    ]
}

/// Execution block. `None` until the order has any execution data.
pub fn execution_rows(details: &OrderDetails) -> Option<Vec<(&'static str, String)>> {
    if !details.has_execution_fields() {
        return None;
    }
    let e = &details.execution;
    Some(vec![
        ("Last Exec Type", text_or_placeholder(e.last_exec_type.as_deref())),
        ("Last Ord Status", text_or_placeholder(e.last_ord_status.as_deref())),
        ("Cum Qty", number_or_placeholder(e.cum_qty)),
        ("Leaves Qty", number_or_placeholder(e.leaves_qty)),
        ("Avg Px", number_or_placeholder(e.avg_px)),
        ("Last Px", number_or_placeholder(e.last_px)),
        ("Transact Time", text_or_placeholder(e.transact_time.as_deref())),
        ("Text", text_or_placeholder(e.text.as_deref())),
    ])
}

fn field_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

pub fn draw_order_detail(f: &mut Frame, area: Rect, app: &App) {
    let detail = &app.detail;
    let title = match detail.selected() {
        Some(id) => format!(" Order {id} - [R]efresh [Esc]Close "),
        None => " Order Detail ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = Vec::new();

    if detail.selected().is_none() {
        lines.push(Line::from(Span::styled(DETAIL_PROMPT, Style::default().fg(Color::Gray))));
    } else if detail.is_loading() {
        lines.push(Line::from(Span::styled(DETAIL_LOADING, Style::default().fg(Color::Yellow))));
    }

    if let Some(err) = detail.error() {
        lines.push(Line::from(Span::styled(err, Style::default().fg(Color::Red))));
    }

    if let Some(details) = detail.visible_details() {
        lines.extend(
            detail_rows(details)
                .into_iter()
                .map(|(label, value)| field_line(label, value)),
        );

        if let Some(execution) = execution_rows(details) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Execution",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            lines.extend(
                execution
                    .into_iter()
                    .map(|(label, value)| field_line(label, value)),
            );
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
