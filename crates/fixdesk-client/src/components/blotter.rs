// crates/fixdesk-client/src/components/blotter.rs

use fixdesk_core::messages::{number_or_placeholder, text_or_placeholder};
use fixdesk_core::{OrderSummary, StatusTone};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::{App, Panel};
use crate::components::panel_border;
use crate::components::session_panel::tone_color;

pub const COLUMNS: [&str; 10] = [
    "ID", "Symbol", "Side", "Qty", "Type", "Price", "TIF", "Status", "Updated", "Message",
];

/// One rendered row, in [`COLUMNS`] order.
pub fn row_cells(order: &OrderSummary) -> [String; 10] {
    [
        order.id.clone(),
        text_or_placeholder(order.symbol.as_deref()),
        text_or_placeholder(order.side.as_deref()),
        number_or_placeholder(order.qty),
        text_or_placeholder(order.order_type.as_deref()),
        number_or_placeholder(order.price),
        text_or_placeholder(order.tif.as_deref()),
        text_or_placeholder(order.status.as_deref()),
        text_or_placeholder(order.updated_at.as_deref()),
        text_or_placeholder(order.message.as_deref()),
    ]
}

pub fn draw_blotter(f: &mut Frame, area: Rect, app: &App) {
    let blotter = &app.blotter;
    let focused = app.current_panel == Panel::Blotter;

    let title = match app.last_orders_sync {
        Some(at) => format!(" Orders ({}) - synced {} ", blotter.rows().len(), at.format("%H:%M:%S")),
        None => " Orders ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(panel_border(focused));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let error_height = if blotter.error().is_some() { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(error_height),
            Constraint::Min(1),
        ])
        .split(inner);

    if let Some(err) = blotter.error() {
        let error = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)))
            .wrap(Wrap { trim: true });
        f.render_widget(error, chunks[0]);
    }

    if blotter.rows().is_empty() {
        let hint = Paragraph::new(blotter.empty_hint()).style(Style::default().fg(Color::Gray));
        f.render_widget(hint, chunks[1]);
        return;
    }

    let header = Row::new(COLUMNS.to_vec())
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let selected_id = app.detail.selected();
    let rows: Vec<Row> = blotter
        .rows()
        .iter()
        .enumerate()
        .map(|(i, order)| {
            let mut style = Style::default();
            if focused && i == blotter.cursor() {
                style = style.bg(Color::DarkGray);
            }
            if selected_id == Some(order.id.as_str()) {
                style = style.add_modifier(Modifier::BOLD);
            }

            let side_style = match order.side.as_deref() {
                Some(s) if s.eq_ignore_ascii_case("BUY") => style.fg(Color::Green),
                Some(s) if s.eq_ignore_ascii_case("SELL") => style.fg(Color::Red),
                _ => style,
            };
            let status_style = order
                .status
                .as_deref()
                .map_or(style, |s| style.fg(tone_color(StatusTone::of(s))));

            let cells = row_cells(order);
            Row::new(
                cells
                    .into_iter()
                    .enumerate()
                    .map(|(col, text)| {
                        let cell_style = match col {
                            2 => side_style,
                            7 => status_style,
                            _ => style,
                        };
                        Cell::from(text).style(cell_style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths = [
        Constraint::Length(10),  // ID
        Constraint::Length(7),   // Symbol
        Constraint::Length(5),   // Side
        Constraint::Length(7),   // Qty
        Constraint::Length(7),   // Type
        Constraint::Length(9),   // Price
        Constraint::Length(4),   // TIF
        Constraint::Length(14),  // Status
        Constraint::Length(20),  // Updated
        Constraint::Min(10),     // Message
    ];

    let table = Table::new(rows, widths).header(header);
    f.render_widget(table, chunks[1]);
}
