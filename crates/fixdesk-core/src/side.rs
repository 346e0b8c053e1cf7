//! Side (Buy / Sell) for new orders.

use serde::Serialize;

/// Order side as the backend spells it on the wire: `"BUY"` / `"SELL"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    #[default]
    Buy,
    Sell,
}

impl Side {
    /// Wire / display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }

    /// The other side. Used by the ticket's selection toggle.
    pub fn toggled(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}
