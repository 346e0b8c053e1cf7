//! New-order ticket: form state, validation, submission bookkeeping.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::endpoints::{ApiCall, Outcome, Request};
use crate::error::{SubmitRejected, ValidationError};
use crate::gate::RequestGate;
use crate::messages;
use crate::normalize::to_string_or_undefined;
use crate::order_type::{OrderType, TimeInForce};
use crate::side::Side;

/// Form contents. Text inputs stay as typed; numbers are only derived
/// at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pub symbol: String,
    pub side: Side,
    pub qty: String,
    pub order_type: OrderType,
    pub price: String,
    pub tif: TimeInForce,
}

impl Default for OrderForm {
    fn default() -> Self {
        OrderForm::with_defaults("AAPL", "100")
    }
}

impl OrderForm {
    pub fn with_defaults(symbol: &str, qty: &str) -> Self {
        OrderForm {
            symbol: symbol.to_string(),
            side: Side::Buy,
            qty: qty.to_string(),
            order_type: OrderType::Market,
            price: String::new(),
            tif: TimeInForce::Day,
        }
    }

    /// Validate and build the outgoing payload.
    ///
    /// Rules, first failure wins:
    /// 1. symbol non-empty after trimming
    /// 2. quantity a finite number > 0
    /// 3. LIMIT only: price a finite number > 0
    pub fn validate(&self) -> Result<NewOrderRequest, ValidationError> {
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            return Err(ValidationError::MissingSymbol);
        }

        let qty = parse_positive(&self.qty).ok_or(ValidationError::InvalidQuantity)?;

        let price = if self.order_type.is_limit() {
            Some(parse_positive(&self.price).ok_or(ValidationError::InvalidLimitPrice)?)
        } else {
            None
        };

        Ok(NewOrderRequest {
            symbol: symbol.to_uppercase(),
            side: self.side,
            qty,
            order_type: self.order_type,
            tif: self.tif,
            price,
        })
    }
}

fn parse_positive(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// `POST /orders` body. `price` is left out entirely unless LIMIT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrderRequest {
    pub symbol: String,
    pub side: Side,
    #[serde(serialize_with = "serialize_plain_number")]
    pub qty: f64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub tif: TimeInForce,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_plain_number"
    )]
    pub price: Option<f64>,
}

/// Whole numbers go out as integers (`100`, not `100.0`).
fn serialize_plain_number<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE {
        s.serialize_i64(*value as i64)
    } else {
        s.serialize_f64(*value)
    }
}

fn serialize_optional_plain_number<S: Serializer>(
    value: &Option<f64>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_plain_number(v, s),
        None => s.serialize_none(),
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitKind {
    Success,
    Error,
}

/// One-shot notice for the latest submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub kind: SubmitKind,
    pub message: String,
}

impl SubmitResult {
    fn success(message: impl Into<String>) -> Self {
        SubmitResult { kind: SubmitKind::Success, message: message.into() }
    }

    fn error(message: impl Into<String>) -> Self {
        SubmitResult { kind: SubmitKind::Error, message: message.into() }
    }
}

/// Ticket slice: the form plus the state of the last submission.
#[derive(Debug, Clone, Default)]
pub struct OrderTicket {
    pub form: OrderForm,
    form_error: Option<ValidationError>,
    result: Option<SubmitResult>,
    submitting: Option<OrderType>,
    gate: RequestGate,
}

impl OrderTicket {
    pub fn new(form: OrderForm) -> Self {
        OrderTicket { form, ..Default::default() }
    }

    pub fn form_error(&self) -> Option<ValidationError> {
        self.form_error
    }

    pub fn result(&self) -> Option<&SubmitResult> {
        self.result.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    /// Start a submission.
    ///
    /// Refused while another submission is in flight (nothing is reset in
    /// that case). Otherwise the previous notice and form error are
    /// cleared, and a validation failure is recorded without producing a
    /// request.
    pub fn begin_submit(&mut self) -> Result<Request, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }

        self.result = None;
        self.form_error = None;

        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(err) => {
                self.form_error = Some(err);
                return Err(err.into());
            }
        };

        self.submitting = Some(payload.order_type);
        Ok(Request::new(self.gate.issue(), ApiCall::SubmitOrder(payload)))
    }

    /// Apply the `POST /orders` outcome.
    ///
    /// Returns `true` when the order was accepted and the blotter should
    /// be refreshed out of band.
    pub fn apply_submit(&mut self, request: &Request, outcome: Outcome) -> bool {
        if !self.gate.is_current(request.token) {
            return false;
        }
        let Some(submitted_type) = self.submitting.take() else {
            return false;
        };

        match outcome {
            Ok(reply) => {
                let body_message = reply.body.as_ref().map(reply_message).unwrap_or_default();

                if !reply.is_success() {
                    let message = if body_message.is_empty() {
                        messages::submit_failed(reply.status)
                    } else {
                        body_message
                    };
                    self.result = Some(SubmitResult::error(message));
                    return false;
                }

                let message = if body_message.is_empty() {
                    messages::SUBMIT_OK.to_string()
                } else {
                    body_message
                };
                self.result = Some(SubmitResult::success(message));

                if !submitted_type.is_limit() {
                    self.form.price.clear();
                }
                true
            }
            Err(_) => {
                self.result = Some(SubmitResult::error(messages::SUBMIT_UNREACHABLE));
                false
            }
        }
    }
}

/// Human message from a submit reply: `message`, then `status`, then
/// `orderId`; the first non-blank string wins.
pub fn reply_message(body: &Value) -> String {
    ["message", "status", "orderId"]
        .iter()
        .find_map(|key| to_string_or_undefined(body.get(*key)))
        .unwrap_or_default()
}
