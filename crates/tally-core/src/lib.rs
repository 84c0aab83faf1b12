//! Tally core: the in-memory counter registry and its error surface.
//!
//! This crate owns the counter state machine (create, increment, delete,
//! read) and the concurrency-safe storage behind it. It carries no transport
//! or runtime dependencies; the HTTP server in `tally-server` is a thin
//! consumer of [`CounterRegistry`].
//!
//! # Guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every registry
//! operation reports its outcome as a [`Result`] with a [`CounterError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod registry;

pub use error::{CounterError, ErrorKind, Result};
pub use registry::CounterRegistry;
