//! Error types for the dashboard core.
//!
//! None of these ever escape to the operator as a failure of the view:
//! each component converts them into its own display string. They exist
//! so the conversion points are typed instead of stringly.

use thiserror::Error;

/// A request that never produced an HTTP status.
///
/// Covers connection refused, DNS failure, timeouts and a body that
/// could not be read off the socket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Other(String),
}

/// Client-side ticket validation failure.
///
/// The `Display` text is exactly what the operator sees; checks run in
/// declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Symbol is required.")]
    MissingSymbol,

    #[error("Quantity must be a positive number.")]
    InvalidQuantity,

    #[error("LIMIT orders require a valid price.")]
    InvalidLimitPrice,
}

/// Why a submission was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// Another submission is still waiting for its reply.
    #[error("an order submission is already in flight")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
