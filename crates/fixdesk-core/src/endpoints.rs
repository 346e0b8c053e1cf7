//! Backend REST surface consumed by the dashboard.
//!
//! | Method | Path           | Body              |
//! |--------|----------------|-------------------|
//! | GET    | `/health`      | -                 |
//! | GET    | `/fix/status`  | -                 |
//! | POST   | `/fix/start`   | -                 |
//! | POST   | `/fix/stop`    | -                 |
//! | GET    | `/orders`      | -                 |
//! | POST   | `/orders`      | `NewOrderRequest` |
//! | GET    | `/orders/{id}` | -                 |
//!
//! The transport itself lives in the client crate; this module only
//! describes calls and the reply shape they come back as.

use serde_json::Value;

use crate::error::TransportError;
use crate::gate::RequestToken;
use crate::ticket::NewOrderRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Health,
    FixStatus,
    FixStart,
    FixStop,
    ListOrders,
    SubmitOrder(NewOrderRequest),
    OrderDetails(String),
}

impl ApiCall {
    pub fn method(&self) -> Method {
        match self {
            ApiCall::FixStart | ApiCall::FixStop | ApiCall::SubmitOrder(_) => Method::Post,
            ApiCall::Health
            | ApiCall::FixStatus
            | ApiCall::ListOrders
            | ApiCall::OrderDetails(_) => Method::Get,
        }
    }

    /// Unencoded path segments, in order.
    ///
    /// The transport is responsible for percent-encoding each segment
    /// (order ids are backend-chosen and may contain anything).
    pub fn segments(&self) -> Vec<&str> {
        match self {
            ApiCall::Health => vec!["health"],
            ApiCall::FixStatus => vec!["fix", "status"],
            ApiCall::FixStart => vec!["fix", "start"],
            ApiCall::FixStop => vec!["fix", "stop"],
            ApiCall::ListOrders | ApiCall::SubmitOrder(_) => vec!["orders"],
            ApiCall::OrderDetails(id) => vec!["orders", id.as_str()],
        }
    }

    /// Human-readable path, e.g. `/orders/ord-2`. Used for logging and
    /// for matching in test backends; not for building URLs.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for seg in self.segments() {
            out.push('/');
            out.push_str(seg);
        }
        out
    }

    /// JSON body, if the call carries one.
    pub fn body(&self) -> Option<&NewOrderRequest> {
        match self {
            ApiCall::SubmitOrder(req) => Some(req),
            _ => None,
        }
    }
}

/// A completed HTTP exchange.
///
/// `body` is `None` when the response carried no body or the body was
/// not valid JSON. Whether that matters is up to each component.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Option<Value>,
}

impl HttpReply {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        HttpReply { status, body }
    }

    /// 200 with a JSON body.
    pub fn ok(body: Value) -> Self {
        HttpReply::new(200, Some(body))
    }

    /// Bare status with no (or unparseable) body.
    pub fn status_only(status: u16) -> Self {
        HttpReply::new(status, None)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What a call resolves to: a reply with some status, or no reply at all.
pub type Outcome = Result<HttpReply, TransportError>;

/// A call paired with the token its owning component issued for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub token: RequestToken,
    pub call: ApiCall,
}

impl Request {
    pub fn new(token: RequestToken, call: ApiCall) -> Self {
        Request { token, call }
    }
}
