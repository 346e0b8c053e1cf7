//! Operator-facing strings.
//!
//! Every failure path ends up as one of these; keeping them in one place
//! keeps wording consistent between components and lets tests assert on
//! exact text.

/// Appended to 404s on the orders resource: the usual cause is a backend
/// origin pointing at a service that does not expose `/orders`.
pub const ORDERS_PROXY_HINT: &str = "Check the backend origin: the configured backend must serve /orders (set FIXDESK_BACKEND_URL or --backend to the service that exposes it).";

/// Placeholder for any value the backend did not supply.
pub const PLACEHOLDER: &str = "--";

// Health

pub const HEALTH_CHECKING: &str = "Checking backend health...";
pub const HEALTH_OK: &str = "Backend: ok";
pub const HEALTH_UNREACHABLE: &str = "Backend: unreachable. Make sure the API is running.";

pub fn health_unavailable(status: u16) -> String {
    format!("Backend: unavailable (request failed with status {status})")
}

pub fn health_unexpected(reported: Option<&str>) -> String {
    match reported {
        Some(s) => format!("Backend: unexpected response (status={s})"),
        None => "Backend: unexpected response".to_string(),
    }
}

// FIX session

pub const STATUS_LOADING: &str = "Loading...";
pub const FIX_STATUS_UNREACHABLE: &str = "Unable to load FIX status right now. Please try again.";
pub const FIX_CONTROL_UNREACHABLE: &str = "Unable to reach FIX controls right now. Please try again.";

pub fn fix_status_failed(status: u16) -> String {
    format!("Unable to load FIX status (request failed with status {status}).")
}

pub fn fix_command_failed(status: u16) -> String {
    format!("FIX request failed with status {status}. Please try again.")
}

// Orders

pub const ORDERS_UNREACHABLE: &str = "Unable to load orders right now. Please try again.";
pub const ORDERS_LOADING: &str = "Loading orders...";
pub const ORDERS_EMPTY: &str = "No orders yet.";

pub fn orders_failed(status: u16) -> String {
    with_proxy_hint(
        status,
        format!("Unable to load orders (request failed with status {status})."),
    )
}

// Submission

pub const SUBMIT_OK: &str = "Order submitted successfully.";
pub const SUBMIT_UNREACHABLE: &str = "Unable to submit order right now. Please try again.";

pub fn submit_failed(status: u16) -> String {
    with_proxy_hint(status, format!("Order submit failed with status {status}."))
}

// Detail

pub const DETAIL_UNREACHABLE: &str = "Unable to load order details right now. Please try again.";
pub const DETAIL_PROMPT: &str = "Select an order from the blotter.";
pub const DETAIL_LOADING: &str = "Loading details...";

pub fn detail_failed(status: u16) -> String {
    format!("Unable to load order details (request failed with status {status}).")
}

fn with_proxy_hint(status: u16, base: String) -> String {
    if status == 404 {
        format!("{base} {ORDERS_PROXY_HINT}")
    } else {
        base
    }
}

/// Display a possibly-missing text value.
pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Display a possibly-missing number. Whole numbers print without a
/// fractional part (`410`, not `410.0`).
pub fn number_or_placeholder(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}
