// crates/fixdesk-client/src/app.rs

use std::time::Duration;

use chrono::{DateTime, Local};
use fixdesk_core::messages::PLACEHOLDER;
use fixdesk_core::{
    ApiCall, Blotter, DetailPane, HealthState, OrderForm, OrderTicket, Request, SessionCommand,
    SessionState, SubmitRejected,
};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::dispatcher::{Completion, Dispatcher};
use crate::poller::{PollTimer, TickTx};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Session,
    Ticket,
    Blotter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketField {
    Symbol,
    Side,
    Qty,
    Type,
    Price,
    Tif,
}

impl TicketField {
    pub const ALL: [TicketField; 6] = [
        TicketField::Symbol,
        TicketField::Side,
        TicketField::Qty,
        TicketField::Type,
        TicketField::Price,
        TicketField::Tif,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TicketField::Symbol => "Symbol",
            TicketField::Side => "Side",
            TicketField::Qty => "Quantity",
            TicketField::Type => "Type",
            TicketField::Price => "Price",
            TicketField::Tif => "TIF",
        }
    }

    /// Free-text fields take typed characters; the rest cycle.
    pub fn is_text(self) -> bool {
        matches!(self, TicketField::Symbol | TicketField::Qty | TicketField::Price)
    }

    fn index(self) -> usize {
        TicketField::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        TicketField::ALL[(self.index() + 1) % TicketField::ALL.len()]
    }

    fn prev(self) -> Self {
        let len = TicketField::ALL.len();
        TicketField::ALL[(self.index() + len - 1) % len]
    }
}

/// Composition root: owns every view-state slice and the only handle
/// allowed to issue requests.
///
/// All mutation happens on the UI loop. Replies come back through
/// [`App::handle_completion`], which routes them to the owning slice.
pub struct App {
    // Synchronized state
    pub health: HealthState,
    pub session: SessionState,
    pub ticket: OrderTicket,
    pub blotter: Blotter,
    pub detail: DetailPane,

    // UI state
    pub input_mode: InputMode,
    pub current_panel: Panel,
    pub ticket_field: TicketField,
    pub should_quit: bool,
    pub show_help: bool,

    // Statistics
    pub last_orders_sync: Option<DateTime<Local>>,
    pub message_count: u64,

    backend_label: String,
    dispatcher: Dispatcher,
    poll_interval: Duration,
    poll_timer: Option<PollTimer>,
}

impl App {
    pub fn new(config: &ClientConfig, dispatcher: Dispatcher) -> Self {
        let form = OrderForm::with_defaults(
            &config.default_symbol,
            &config.default_quantity.to_string(),
        );

        Self {
            health: HealthState::new(),
            session: SessionState::new(),
            ticket: OrderTicket::new(form),
            blotter: Blotter::new(),
            detail: DetailPane::new(),
            input_mode: InputMode::Normal,
            current_panel: Panel::Session,
            ticket_field: TicketField::Symbol,
            should_quit: false,
            show_help: false,
            last_orders_sync: None,
            message_count: 0,
            backend_label: config.backend_url.clone(),
            dispatcher,
            poll_interval: config.poll_interval(),
            poll_timer: None,
        }
    }

    pub fn backend_label(&self) -> &str {
        &self.backend_label
    }

    // ----- lifecycle -----

    /// Initial fetches plus the shared poll timer. Mounting twice is a
    /// no-op: there is only ever one timer.
    pub fn mount(&mut self, ticks: TickTx) {
        if self.poll_timer.is_some() {
            warn!("mount called while already mounted; ignoring");
            return;
        }
        info!(backend = %self.backend_label, "mounting dashboard");

        self.check_health();
        self.fetch_status();
        self.fetch_orders();
        self.poll_timer = Some(PollTimer::start(self.poll_interval, ticks));
    }

    /// Stop polling. Requests already in flight are left to finish and
    /// are filtered by their slice's gate if anything cares.
    pub fn unmount(&mut self) {
        if let Some(mut timer) = self.poll_timer.take() {
            timer.stop();
            info!("dashboard unmounted");
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poll_timer.as_ref().is_some_and(PollTimer::is_running)
    }

    /// One poll cycle: status and order list together.
    pub fn on_tick(&mut self) {
        self.fetch_status();
        self.fetch_orders();
    }

    pub fn pending_requests(&self) -> usize {
        self.dispatcher.in_flight()
    }

    // ----- requests -----

    fn send(&mut self, request: Request) {
        self.dispatcher.dispatch(request);
    }

    pub fn check_health(&mut self) {
        let request = self.health.begin_check();
        self.send(request);
    }

    pub fn fetch_status(&mut self) {
        let request = self.session.begin_fetch();
        self.send(request);
    }

    pub fn start_session(&mut self) {
        self.session_command(SessionCommand::Start);
    }

    pub fn stop_session(&mut self) {
        self.session_command(SessionCommand::Stop);
    }

    fn session_command(&mut self, command: SessionCommand) {
        info!(?command, "FIX session command");
        let request = self.session.begin_command(command);
        self.send(request);
    }

    pub fn fetch_orders(&mut self) {
        let request = self.blotter.begin_fetch();
        self.send(request);
    }

    /// Returns `true` if a request went out.
    pub fn submit_order(&mut self) -> bool {
        match self.ticket.begin_submit() {
            Ok(request) => {
                self.send(request);
                true
            }
            Err(SubmitRejected::InFlight) => {
                debug!("submit ignored: previous submission still in flight");
                false
            }
            Err(SubmitRejected::Invalid(err)) => {
                debug!(%err, "order ticket rejected");
                false
            }
        }
    }

    pub fn select_order(&mut self, order_id: Option<String>) {
        if let Some(request) = self.detail.select(order_id) {
            self.send(request);
        }
    }

    /// Open the detail pane for the blotter row under the cursor.
    pub fn open_selected_order(&mut self) {
        let Some(id) = self.blotter.selected_row().map(|row| row.id.clone()) else {
            return;
        };
        // Rows without an id carry the placeholder; there is nothing to fetch.
        if id == PLACEHOLDER {
            debug!("selected row has no order id");
            return;
        }
        self.select_order(Some(id));
    }

    pub fn close_detail(&mut self) {
        self.select_order(None);
    }

    pub fn refresh_detail(&mut self) {
        if let Some(request) = self.detail.refresh() {
            self.send(request);
        }
    }

    // ----- completions -----

    /// Route a finished request to the slice that issued it, and run any
    /// follow-up it asks for.
    pub fn handle_completion(&mut self, completion: Completion) {
        self.dispatcher.settle();
        self.message_count += 1;

        let Completion { request, outcome } = completion;
        let path = request.call.path();
        match &outcome {
            Ok(reply) => debug!(%path, status = reply.status, "completion"),
            Err(err) => warn!(%path, %err, "request failed"),
        }

        match &request.call {
            ApiCall::Health => {
                if !self.health.apply(&request, outcome) {
                    debug!(%path, "stale health reply dropped");
                }
            }
            ApiCall::FixStatus => {
                if !self.session.apply_status(&request, outcome) {
                    debug!(%path, "stale status reply dropped");
                }
            }
            ApiCall::FixStart | ApiCall::FixStop => {
                if self.session.apply_command(&request, outcome) {
                    self.fetch_status();
                }
            }
            ApiCall::ListOrders => {
                if self.blotter.apply(&request, outcome) {
                    self.last_orders_sync = Some(Local::now());
                }
            }
            ApiCall::SubmitOrder(_) => {
                if self.ticket.apply_submit(&request, outcome) {
                    self.fetch_orders();
                }
            }
            ApiCall::OrderDetails(_) => {
                if !self.detail.apply(&request, outcome) {
                    debug!(%path, "stale detail reply dropped");
                }
            }
        }
    }

    // ----- navigation -----

    pub fn next_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Session => Panel::Ticket,
            Panel::Ticket => Panel::Blotter,
            Panel::Blotter => Panel::Session,
        };
    }

    pub fn prev_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Session => Panel::Blotter,
            Panel::Ticket => Panel::Session,
            Panel::Blotter => Panel::Ticket,
        };
    }

    pub fn move_selection_up(&mut self) {
        if self.current_panel == Panel::Blotter {
            self.blotter.move_up();
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.current_panel == Panel::Blotter {
            self.blotter.move_down();
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ----- ticket editing -----

    pub fn start_ticket_edit(&mut self) {
        self.current_panel = Panel::Ticket;
        self.input_mode = InputMode::Editing;
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Submit from the editor. Leaves editing only if the order went out,
    /// so a validation error can be fixed in place.
    pub fn submit_input(&mut self) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        if self.submit_order() {
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn next_field(&mut self) {
        self.ticket_field = self.ticket_field.next();
    }

    pub fn prev_field(&mut self) {
        self.ticket_field = self.ticket_field.prev();
    }

    /// Cycle the focused choice field. Text fields are untouched.
    pub fn cycle_field(&mut self, forward: bool) {
        let form = &mut self.ticket.form;
        match self.ticket_field {
            TicketField::Side => form.side = form.side.toggled(),
            TicketField::Type => form.order_type = form.order_type.toggled(),
            TicketField::Tif => {
                form.tif = if forward { form.tif.next() } else { form.tif.prev() };
            }
            TicketField::Symbol | TicketField::Qty | TicketField::Price => {}
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let field = self.ticket_field;
        let Some(buffer) = self.text_buffer_mut(field) else {
            return;
        };
        let accepted = match field {
            TicketField::Symbol => !c.is_control() && !c.is_whitespace(),
            _ => c.is_ascii_digit() || c == '.',
        };
        if accepted {
            buffer.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        let field = self.ticket_field;
        if let Some(buffer) = self.text_buffer_mut(field) {
            buffer.pop();
        }
    }

    fn text_buffer_mut(&mut self, field: TicketField) -> Option<&mut String> {
        let form = &mut self.ticket.form;
        match field {
            TicketField::Symbol => Some(&mut form.symbol),
            TicketField::Qty => Some(&mut form.qty),
            TicketField::Price => Some(&mut form.price),
            TicketField::Side | TicketField::Type | TicketField::Tif => None,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}
