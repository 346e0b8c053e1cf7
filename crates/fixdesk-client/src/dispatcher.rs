//! Request dispatch.
//!
//! Each request runs as its own tokio task. The result is posted back
//! to the UI loop as a [`Completion`] on an unbounded channel, so the
//! only code that ever touches view state is the UI loop itself.
//!
//! In-flight requests are never aborted. Whether a completion still
//! matters is decided by the owning slice's request gate.

use std::sync::Arc;

use fixdesk_core::{Outcome, Request};
use tokio::sync::mpsc;
use tracing::debug;

use crate::api::Backend;

/// A finished request and what it resolved to.
#[derive(Debug)]
pub struct Completion {
    pub request: Request,
    pub outcome: Outcome,
}

pub type CompletionTx = mpsc::UnboundedSender<Completion>;
pub type CompletionRx = mpsc::UnboundedReceiver<Completion>;

pub struct Dispatcher {
    backend: Arc<dyn Backend>,
    tx: CompletionTx,
    in_flight: usize,
}

impl Dispatcher {
    /// Create a dispatcher and the receiving end of its completion channel.
    pub fn new(backend: Arc<dyn Backend>) -> (Self, CompletionRx) {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher {
            backend,
            tx,
            in_flight: 0,
        };
        (dispatcher, rx)
    }

    /// Spawn `request`. Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, request: Request) {
        self.in_flight += 1;
        debug!(
            token = request.token.value(),
            method = request.call.method().as_str(),
            path = %request.call.path(),
            "dispatch"
        );

        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = backend.execute(request.call.clone()).await;
            if tx.send(Completion { request, outcome }).is_err() {
                debug!("completion receiver closed; reply discarded");
            }
        });
    }

    /// Record that one completion has been consumed.
    pub fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Requests spawned whose completion has not been consumed yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
