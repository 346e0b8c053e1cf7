//! Order blotter: the polled, normalized order list.

use crate::endpoints::{ApiCall, Outcome, Request};
use crate::gate::RequestGate;
use crate::messages;
use crate::normalize::parse_order_list;
use crate::order::OrderSummary;

#[derive(Debug, Clone, Default)]
pub struct Blotter {
    rows: Vec<OrderSummary>,
    error: Option<String>,
    /// Raised after the first completed fetch, whatever its outcome, so the
    /// view can tell "still loading" from "confirmed empty".
    ready: bool,
    cursor: usize,
    gate: RequestGate,
}

impl Blotter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[OrderSummary] {
        &self.rows
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Text for the empty table.
    pub fn empty_hint(&self) -> &'static str {
        if self.ready {
            messages::ORDERS_EMPTY
        } else {
            messages::ORDERS_LOADING
        }
    }

    pub fn begin_fetch(&mut self) -> Request {
        Request::new(self.gate.issue(), ApiCall::ListOrders)
    }

    /// Apply a `GET /orders` outcome. Returns `true` only when the reply
    /// was newer than the last one applied and replaced the row set.
    pub fn apply(&mut self, request: &Request, outcome: Outcome) -> bool {
        if !self.gate.accept(request.token) {
            return false;
        }
        self.ready = true;

        match outcome {
            Ok(reply) if !reply.is_success() => {
                self.error = Some(messages::orders_failed(reply.status));
                false
            }
            Ok(reply) => match reply.body {
                Some(body) => {
                    self.rows = parse_order_list(&body);
                    self.error = None;
                    self.clamp_cursor();
                    true
                }
                None => {
                    self.error = Some(messages::ORDERS_UNREACHABLE.to_string());
                    false
                }
            },
            Err(_) => {
                self.error = Some(messages::ORDERS_UNREACHABLE.to_string());
                false
            }
        }
    }

    // Row cursor

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_row(&self) -> Option<&OrderSummary> {
        self.rows.get(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor < self.rows.len().saturating_sub(1) {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }
}
