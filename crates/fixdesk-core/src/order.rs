//! Normalized order rows and order detail.
//!
//! These are what the view renders. They are only ever produced by the
//! normalizers in [`crate::normalize`], which never fail, so every field
//! except `id` is optional.

/// One blotter row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderSummary {
    /// Always non-empty: a backend id, or `"--"` when none was supplied.
    pub id: String,
    pub status: Option<String>,
    pub symbol: Option<String>,
    pub side: Option<String>,
    pub qty: Option<f64>,
    pub order_type: Option<String>,
    pub price: Option<f64>,
    pub tif: Option<String>,
    pub updated_at: Option<String>,
    pub message: Option<String>,
}

/// Fill-related attributes. Populated only once an order has
/// partially or fully executed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExecutionFields {
    pub last_exec_type: Option<String>,
    pub last_ord_status: Option<String>,
    pub cum_qty: Option<f64>,
    pub leaves_qty: Option<f64>,
    pub avg_px: Option<f64>,
    pub last_px: Option<f64>,
    pub transact_time: Option<String>,
    pub text: Option<String>,
}

impl ExecutionFields {
    /// True when no execution attribute carries a value.
    ///
    /// Text fields are already blank-filtered by the normalizer, so
    /// presence is enough.
    pub fn is_empty(&self) -> bool {
        self.last_exec_type.is_none()
            && self.last_ord_status.is_none()
            && self.cum_qty.is_none()
            && self.leaves_qty.is_none()
            && self.avg_px.is_none()
            && self.last_px.is_none()
            && self.transact_time.is_none()
            && self.text.is_none()
    }
}

/// Full view of one order, as shown in the detail pane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderDetails {
    pub summary: OrderSummary,
    pub execution: ExecutionFields,
}

impl OrderDetails {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    /// Whether the execution block should be rendered at all.
    pub fn has_execution_fields(&self) -> bool {
        !self.execution.is_empty()
    }
}
