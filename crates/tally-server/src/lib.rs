//! Tally server library entry.
//!
//! Wires the counter registry from `tally-core` into an axum HTTP service:
//! config loading, shared state, counter routes, ops endpoints, and request
//! metrics. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
