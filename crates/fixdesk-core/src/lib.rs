//! fixdesk-core
//!
//! Pure state-synchronization logic for the FIX session dashboard:
//! - order side / type / time-in-force
//! - backend endpoint table and reply shape
//! - per-resource request gating (stale-response guard)
//! - total normalizers for order and session payloads
//! - one view-state slice per component (health, session, ticket,
//!   blotter, detail), each with its own reducer
//!
//! Nothing in here performs I/O. The client crate issues the requests
//! this crate describes and feeds the replies back in.

pub mod side;
pub mod order_type;
pub mod error;
pub mod endpoints;
pub mod gate;
pub mod messages;
pub mod normalize;
pub mod order;
pub mod health;
pub mod session;
pub mod ticket;
pub mod blotter;
pub mod detail;

pub use side::Side;
pub use order_type::{OrderType, TimeInForce};

pub use error::{SubmitRejected, TransportError, ValidationError};
pub use endpoints::{ApiCall, HttpReply, Method, Outcome, Request};
pub use gate::{RequestGate, RequestToken};

pub use order::{ExecutionFields, OrderDetails, OrderSummary};
pub use normalize::{parse_fix_status, parse_order_details, parse_order_list, parse_order_summary};

pub use health::HealthState;
pub use session::{FixConfig, FixDiagnostics, FixStatus, SessionCommand, SessionState, StatusTone};
pub use ticket::{NewOrderRequest, OrderForm, OrderTicket, SubmitKind, SubmitResult};
pub use blotter::Blotter;
pub use detail::DetailPane;
