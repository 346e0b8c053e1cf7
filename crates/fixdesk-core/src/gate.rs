//! Per-resource request gating.
//!
//! Every logical resource (session status, order list, order detail, ...)
//! owns one `RequestGate`. Issuing a request takes a fresh token, and a
//! reply may only write state if its token passes the gate. There are two
//! checks:
//!
//! - [`RequestGate::accept`] for polled resources: a reply lands if it is
//!   newer than the last reply that landed. Polls that overlap because the
//!   backend is slower than the poll interval still make progress, while a
//!   late reply can never roll the view back past a newer one.
//! - [`RequestGate::is_current`] for one-shot resources (detail, session
//!   commands, submissions): only the latest issued token counts, so a
//!   reply for an order the operator already moved away from is dropped.

/// Opaque, monotonically increasing request identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct RequestGate {
    latest: u64,
    applied: u64,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Make every outstanding token stale without issuing a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
        self.applied = self.latest;
    }

    /// Latest-only check. Does not record anything.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest && token.0 > self.applied
    }

    /// Newer-than-applied check. On success `token` becomes the floor
    /// every later reply has to beat.
    pub fn accept(&mut self, token: RequestToken) -> bool {
        if token.0 <= self.applied || token.0 > self.latest {
            return false;
        }
        self.applied = token.0;
        true
    }
}
