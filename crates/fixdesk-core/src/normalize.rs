//! Total normalizers for backend payloads.
//!
//! The backend is not consistent about field names: the same attribute
//! can arrive under a plain name (`status`) or its FIX alias
//! (`ordStatus`). Each normalized field is read from a priority-ordered
//! alias list; the first alias whose key is present and not `null` is
//! the one used. If that value does not coerce, the field is absent.
//! Later aliases are not consulted.
//!
//! None of these functions can fail. Anything malformed degrades to
//! `None` (or `"--"` for the id), never to an error.

use serde_json::{Map, Value};

use crate::messages::PLACEHOLDER;
use crate::order::{ExecutionFields, OrderDetails, OrderSummary};
use crate::session::{FixConfig, FixDiagnostics, FixStatus};

pub const ID_ALIASES: &[&str] = &["id", "orderId", "clOrdId"];
pub const STATUS_ALIASES: &[&str] = &["status", "ordStatus"];
pub const QTY_ALIASES: &[&str] = &["qty", "orderQty"];
pub const TYPE_ALIASES: &[&str] = &["type", "ordType"];
pub const TIF_ALIASES: &[&str] = &["tif", "timeInForce"];
pub const UPDATED_AT_ALIASES: &[&str] = &["updatedAt", "lastUpdatedAt"];
pub const MESSAGE_ALIASES: &[&str] = &["message", "text"];

/// First alias present with a non-null value.
pub fn first_present<'a>(raw: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|key| raw.get(*key))
        .find(|v| !v.is_null())
}

/// Finite number from a JSON number or a numeric string.
pub fn to_number_or_null(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Non-blank string, kept verbatim (not trimmed).
pub fn to_string_or_undefined(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Identifier from a string, number or boolean. Blank strings and
/// structured values do not count as an id.
fn to_identifier(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text(raw: &Map<String, Value>, aliases: &[&str]) -> Option<String> {
    to_string_or_undefined(first_present(raw, aliases))
}

fn number(raw: &Map<String, Value>, aliases: &[&str]) -> Option<f64> {
    to_number_or_null(first_present(raw, aliases))
}

fn as_record(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    }
}

fn summary_from_record(raw: &Map<String, Value>) -> (Option<String>, OrderSummary) {
    let id = to_identifier(first_present(raw, ID_ALIASES));
    let summary = OrderSummary {
        id: id.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        status: text(raw, STATUS_ALIASES),
        symbol: text(raw, &["symbol"]),
        side: text(raw, &["side"]),
        qty: number(raw, QTY_ALIASES),
        order_type: text(raw, TYPE_ALIASES),
        price: number(raw, &["price"]),
        tif: text(raw, TIF_ALIASES),
        updated_at: text(raw, UPDATED_AT_ALIASES),
        message: text(raw, MESSAGE_ALIASES),
    };
    (id, summary)
}

/// Normalize one order-like value into a blotter row.
pub fn parse_order_summary(value: &Value) -> OrderSummary {
    summary_from_record(&as_record(value)).1
}

/// Normalize an order list payload. Non-arrays become an empty list;
/// every array element yields exactly one row.
pub fn parse_order_list(value: &Value) -> Vec<OrderSummary> {
    match value {
        Value::Array(items) => items.iter().map(parse_order_summary).collect(),
        _ => Vec::new(),
    }
}

/// Normalize an order-detail payload for `order_id`.
///
/// When the payload carries none of the id aliases the requested id is
/// used, so the detail pane always has a stable key.
pub fn parse_order_details(order_id: &str, value: &Value) -> OrderDetails {
    let raw = as_record(value);
    let (id, mut summary) = summary_from_record(&raw);
    if id.is_none() && !order_id.trim().is_empty() {
        summary.id = order_id.to_string();
    }

    let execution = ExecutionFields {
        last_exec_type: text(&raw, &["lastExecType"]),
        last_ord_status: text(&raw, &["lastOrdStatus"]),
        cum_qty: number(&raw, &["cumQty"]),
        leaves_qty: number(&raw, &["leavesQty"]),
        avg_px: number(&raw, &["avgPx"]),
        last_px: number(&raw, &["lastPx"]),
        transact_time: text(&raw, &["transactTime"]),
        text: text(&raw, &["text"]),
    };

    OrderDetails { summary, execution }
}

/// Normalize a `/fix/status` payload.
pub fn parse_fix_status(value: &Value) -> FixStatus {
    let raw = as_record(value);
    let config = raw.get("config").map(as_record).unwrap_or_default();
    let diagnostics = raw.get("diagnostics").map(as_record).unwrap_or_default();

    let sessions = match raw.get("sessions") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| to_string_or_undefined(Some(v)))
            .collect(),
        _ => Vec::new(),
    };

    FixStatus {
        status: text(&raw, &["status"]),
        details: text(&raw, &["details"]),
        sessions,
        config: FixConfig {
            sender_comp_id: text(&config, &["senderCompId"]),
            target_comp_id: text(&config, &["targetCompId"]),
            host: text(&config, &["host"]),
            port: to_port(config.get("port")),
        },
        diagnostics: FixDiagnostics {
            last_event: text(&diagnostics, &["lastEvent"]),
            last_error: text(&diagnostics, &["lastError"]),
            last_updated_at: text(&diagnostics, &["lastUpdatedAt"]),
        },
    }
}

fn to_port(value: Option<&Value>) -> Option<u16> {
    to_number_or_null(value)
        .filter(|p| p.fract() == 0.0 && *p >= 0.0 && *p <= f64::from(u16::MAX))
        .map(|p| p as u16)
}
