//! Backend liveness line.

use serde_json::Value;

use crate::endpoints::{ApiCall, Outcome, Request};
use crate::gate::RequestGate;
use crate::messages;

/// Single free-text health message. Every outcome, including transport
/// failure and malformed JSON, overwrites it with a display string.
#[derive(Debug, Clone)]
pub struct HealthState {
    message: String,
    gate: RequestGate,
}

impl Default for HealthState {
    fn default() -> Self {
        HealthState {
            message: messages::HEALTH_CHECKING.to_string(),
            gate: RequestGate::new(),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_ok(&self) -> bool {
        self.message == messages::HEALTH_OK
    }

    pub fn begin_check(&mut self) -> Request {
        Request::new(self.gate.issue(), ApiCall::Health)
    }

    /// Apply a `/health` outcome. Returns `false` if the reply was stale.
    pub fn apply(&mut self, request: &Request, outcome: Outcome) -> bool {
        if !self.gate.accept(request.token) {
            return false;
        }

        self.message = match outcome {
            Ok(reply) if !reply.is_success() => messages::health_unavailable(reply.status),
            Ok(reply) => match reply.body {
                Some(body) => Self::interpret(&body),
                None => messages::HEALTH_UNREACHABLE.to_string(),
            },
            Err(_) => messages::HEALTH_UNREACHABLE.to_string(),
        };
        true
    }

    fn interpret(body: &Value) -> String {
        match body.get("status") {
            Some(Value::String(s)) if s == "ok" => messages::HEALTH_OK.to_string(),
            Some(Value::String(s)) if !s.is_empty() => messages::health_unexpected(Some(s)),
            _ => messages::health_unexpected(None),
        }
    }
}
