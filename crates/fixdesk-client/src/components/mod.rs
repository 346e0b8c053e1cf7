// crates/fixdesk-client/src/components/mod.rs

use ratatui::style::{Color, Style};

pub mod blotter;
pub mod header;
pub mod help;
pub mod order_detail;
pub mod order_ticket;
pub mod session_panel;
pub mod status_bar;

/// Border colour for a panel: highlighted when it has focus.
pub(crate) fn panel_border(focused: bool) -> Style {
    Style::default().fg(if focused { Color::Yellow } else { Color::White })
}
