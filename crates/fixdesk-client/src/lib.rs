//! fixdesk-client
//!
//! Terminal front end for the FIX session dashboard.
//!
//! - [`api`]: `Backend` trait and the `reqwest` implementation
//! - [`dispatcher`]: runs requests as tasks, funnels completions back
//! - [`poller`]: the scoped poll timer
//! - [`app`]: composition root owning every view-state slice
//! - [`input`]: key bindings
//! - [`ui`] / [`components`]: ratatui rendering

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod dispatcher;
pub mod input;
pub mod poller;
pub mod ui;
