// crates/fixdesk-client/src/input.rs

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode, Panel};

/// Apply one key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Some terminals report releases and repeats too.
    if key.kind == KeyEventKind::Release {
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal(app, key),
        InputMode::Editing => handle_editing(app, key),
    }
}

fn handle_normal(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        // Global hotkeys
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }
        KeyCode::Tab => {
            app.next_panel();
        }
        KeyCode::BackTab => {
            app.prev_panel();
        }
        KeyCode::F(1) => {
            app.toggle_help();
        }
        KeyCode::Esc => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.close_detail();
            }
        }

        // Backend / session
        KeyCode::Char('r') => {
            app.check_health();
        }
        KeyCode::Char('g') | KeyCode::Char('G') => {
            app.start_session();
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.stop_session();
        }

        // Ticket
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.start_ticket_edit();
        }

        // Blotter / detail
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
        }
        KeyCode::Enter => match app.current_panel {
            Panel::Ticket => app.start_ticket_edit(),
            Panel::Blotter => app.open_selected_order(),
            Panel::Session => {}
        },
        KeyCode::Char('R') => {
            app.refresh_detail();
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.close_detail();
        }

        _ => {}
    }
}

fn handle_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_input();
        }
        KeyCode::Esc => {
            app.cancel_input();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.prev_field();
        }
        KeyCode::Left => {
            app.cycle_field(false);
        }
        KeyCode::Right => {
            app.cycle_field(true);
        }
        KeyCode::Backspace => {
            app.delete_char();
        }
        KeyCode::Char(' ') if !app.ticket_field.is_text() => {
            app.cycle_field(true);
        }
        KeyCode::Char(c) => {
            app.enter_char(c);
        }
        _ => {}
    }
}
