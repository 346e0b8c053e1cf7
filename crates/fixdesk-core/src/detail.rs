//! Order detail pane, keyed by the selected order id.
//!
//! Transition rules:
//! - none -> id, or id -> other id: one `GET /orders/{id}`
//! - id -> same id: nothing
//! - anything -> none: clear detail, error and loading; no request
//!
//! A reply only lands if it belongs to the latest request for the
//! current selection.

use crate::endpoints::{ApiCall, Outcome, Request};
use crate::gate::RequestGate;
use crate::messages;
use crate::normalize::parse_order_details;
use crate::order::OrderDetails;

#[derive(Debug, Clone, Default)]
pub struct DetailPane {
    selected: Option<String>,
    details: Option<OrderDetails>,
    error: Option<String>,
    loading: bool,
    gate: RequestGate,
}

impl DetailPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn details(&self) -> Option<&OrderDetails> {
        self.details.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Details to render: only once loaded, and only for an open pane.
    pub fn visible_details(&self) -> Option<&OrderDetails> {
        if self.selected.is_some() && !self.loading {
            self.details.as_ref()
        } else {
            None
        }
    }

    /// Change the selection. Returns the request to issue, if any.
    pub fn select(&mut self, order_id: Option<String>) -> Option<Request> {
        match order_id {
            None => {
                self.gate.invalidate();
                self.selected = None;
                self.details = None;
                self.error = None;
                self.loading = false;
                None
            }
            Some(id) if self.selected.as_deref() == Some(id.as_str()) => None,
            Some(id) => {
                self.selected = Some(id);
                self.details = None;
                self.load()
            }
        }
    }

    /// Re-issue the detail request for the current selection.
    pub fn refresh(&mut self) -> Option<Request> {
        self.load()
    }

    fn load(&mut self) -> Option<Request> {
        let id = self.selected.clone()?;
        self.loading = true;
        self.error = None;
        Some(Request::new(self.gate.issue(), ApiCall::OrderDetails(id)))
    }

    /// Apply a `GET /orders/{id}` outcome. Returns `false` if the reply
    /// was stale (selection changed, pane closed, or a newer refresh).
    pub fn apply(&mut self, request: &Request, outcome: Outcome) -> bool {
        if !self.gate.is_current(request.token) {
            return false;
        }
        let ApiCall::OrderDetails(requested_id) = &request.call else {
            return false;
        };

        self.loading = false;

        match outcome {
            Ok(reply) if !reply.is_success() => {
                self.details = None;
                self.error = Some(messages::detail_failed(reply.status));
            }
            Ok(reply) => match reply.body {
                Some(body) => {
                    self.details = Some(parse_order_details(requested_id, &body));
                    self.error = None;
                }
                None => {
                    self.details = None;
                    self.error = Some(messages::DETAIL_UNREACHABLE.to_string());
                }
            },
            Err(_) => {
                self.details = None;
                self.error = Some(messages::DETAIL_UNREACHABLE.to_string());
            }
        }
        true
    }
}
