//! Order type (Market vs Limit) and time-in-force.
//!
//! Both are closed selections on the ticket, so they are enums rather
//! than free text. They serialize to the uppercase labels the backend
//! expects (`"MARKET"`, `"LIMIT"`, `"DAY"`, ...).

use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// No price is sent.
    #[default]
    Market,
    /// Requires a positive price.
    Limit,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            OrderType::Market => OrderType::Limit,
            OrderType::Limit => OrderType::Market,
        }
    }

    pub fn is_limit(self) -> bool {
        matches!(self, OrderType::Limit)
    }
}

/// Order lifetime policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    #[default]
    Day,
    Ioc,
    Fok,
    Gtc,
}

impl TimeInForce {
    pub const ALL: [TimeInForce; 4] = [
        TimeInForce::Day,
        TimeInForce::Ioc,
        TimeInForce::Fok,
        TimeInForce::Gtc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeInForce::Day => "DAY",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::Gtc => "GTC",
        }
    }

    /// Next value in `ALL`, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous value in `ALL`, wrapping around.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
