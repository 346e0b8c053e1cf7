// crates/fixdesk-client/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, Color, &str)] = &[
    ("g", Color::Green, "Start FIX Session"),
    ("x", Color::Red, "Stop FIX Session"),
    ("r", Color::Yellow, "Retry Backend Health"),
    ("n / Enter", Color::Yellow, "Edit Order Ticket (on ticket panel)"),
    ("Enter", Color::Cyan, "Open Order Details (on blotter)"),
    ("R", Color::Magenta, "Refresh Order Details"),
    ("Esc / c", Color::Magenta, "Close Order Details"),
    ("Tab", Color::Blue, "Next Panel"),
    ("Shift+Tab", Color::Blue, "Previous Panel"),
    ("↑/k", Color::White, "Move Up"),
    ("↓/j", Color::White, "Move Down"),
    ("F1", Color::Gray, "Toggle Help"),
    ("Q/q", Color::Red, "Quit"),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let mut help_items: Vec<ListItem> = BINDINGS
        .iter()
        .map(|(key, color, action)| {
            ListItem::new(Line::from(vec![
                Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)),
                Span::raw(format!(" - {action}")),
            ]))
        })
        .collect();

    help_items.push(ListItem::new(""));
    help_items.push(ListItem::new(Line::from(Span::styled(
        "Order ticket: ↑/↓ field, ←/→/Space cycle Side/Type/TIF, Enter submit",
        Style::default().fg(Color::Gray),
    ))));

    let help_list = List::new(help_items)
        .block(Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(help_list, area);

    // Footer with close instruction
    if area.height < 3 {
        return;
    }
    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height - 2,
        width: area.width,
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
