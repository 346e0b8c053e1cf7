//! FIX session status and start/stop control.
//!
//! The status is an opaque label: the client never checks transitions
//! and never refuses a command based on the current status. Styling is
//! derived from the label for display only (see [`StatusTone`]).
//!
//! Status and error are independent slots. A failed poll or command sets
//! the error and leaves the last good status in place.

use crate::endpoints::{ApiCall, Outcome, Request};
use crate::gate::RequestGate;
use crate::messages::{self, PLACEHOLDER, STATUS_LOADING};
use crate::normalize::parse_fix_status;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixConfig {
    pub sender_comp_id: Option<String>,
    pub target_comp_id: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixDiagnostics {
    pub last_event: Option<String>,
    pub last_error: Option<String>,
    pub last_updated_at: Option<String>,
}

/// Last status reported by `/fix/status`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixStatus {
    pub status: Option<String>,
    pub details: Option<String>,
    pub sessions: Vec<String>,
    pub config: FixConfig,
    pub diagnostics: FixDiagnostics,
}

impl FixStatus {
    /// `"SENDER → TARGET"`, with `--` for either missing side.
    pub fn session_line(&self) -> String {
        format!(
            "{} → {}",
            or_placeholder(self.config.sender_comp_id.as_deref()),
            or_placeholder(self.config.target_comp_id.as_deref()),
        )
    }

    /// `"host:port"`, with `--` for either missing part.
    pub fn endpoint(&self) -> String {
        let port = self
            .config
            .port
            .map(|p| p.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        format!("{}:{}", or_placeholder(self.config.host.as_deref()), port)
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}

/// Display-only classification of a status label.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusTone {
    Up,
    Down,
    Faulted,
    Neutral,
}

impl StatusTone {
    pub fn of(label: &str) -> Self {
        let upper = label.to_ascii_uppercase();
        match upper.as_str() {
            "RUNNING" | "STARTED" | "LOGGED_ON" | "CONNECTED" | "ACTIVE" => StatusTone::Up,
            "STOPPED" | "DISCONNECTED" | "LOGGED_OUT" | "IDLE" => StatusTone::Down,
            _ if upper.contains("ERROR") || upper.contains("FAIL") => StatusTone::Faulted,
            _ => StatusTone::Neutral,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    Stop,
}

impl SessionCommand {
    pub fn call(self) -> ApiCall {
        match self {
            SessionCommand::Start => ApiCall::FixStart,
            SessionCommand::Stop => ApiCall::FixStop,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    status: Option<FixStatus>,
    error: Option<String>,
    status_gate: RequestGate,
    command_gate: RequestGate,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<&FixStatus> {
        self.status.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The label to show: the server's last word, or "Loading...".
    pub fn current_status(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.status.as_deref())
            .unwrap_or(STATUS_LOADING)
    }

    pub fn tone(&self) -> StatusTone {
        StatusTone::of(self.current_status())
    }

    pub fn begin_fetch(&mut self) -> Request {
        Request::new(self.status_gate.issue(), ApiCall::FixStatus)
    }

    /// Apply a `/fix/status` outcome. Returns `false` if a newer status
    /// reply has already been applied.
    pub fn apply_status(&mut self, request: &Request, outcome: Outcome) -> bool {
        if !self.status_gate.accept(request.token) {
            return false;
        }

        match outcome {
            Ok(reply) if !reply.is_success() => {
                self.error = Some(messages::fix_status_failed(reply.status));
            }
            Ok(reply) => match reply.body {
                Some(body) => {
                    self.status = Some(parse_fix_status(&body));
                    self.error = None;
                }
                None => self.error = Some(messages::FIX_STATUS_UNREACHABLE.to_string()),
            },
            Err(_) => self.error = Some(messages::FIX_STATUS_UNREACHABLE.to_string()),
        }
        true
    }

    pub fn begin_command(&mut self, command: SessionCommand) -> Request {
        Request::new(self.command_gate.issue(), command.call())
    }

    /// Apply a start/stop outcome.
    ///
    /// Returns `true` when the command succeeded and the status must be
    /// re-fetched. The reply body is never taken as the new status.
    pub fn apply_command(&mut self, request: &Request, outcome: Outcome) -> bool {
        if !self.command_gate.is_current(request.token) {
            return false;
        }

        match outcome {
            Ok(reply) if reply.is_success() => {
                self.error = None;
                true
            }
            Ok(reply) => {
                self.error = Some(messages::fix_command_failed(reply.status));
                false
            }
            Err(_) => {
                self.error = Some(messages::FIX_CONTROL_UNREACHABLE.to_string());
                false
            }
        }
    }
}
