//! Restaurant order dashboard.
//!
//! Polls an orders REST API, keeps a local copy of the order list, raises
//! an alert when new orders arrive, and lets an admin flip an order between
//! pending and completed.

pub mod board;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod mutator;
pub mod poller;
pub mod tls;
pub mod tui;

pub use error::{OrderDeskError, Result};
