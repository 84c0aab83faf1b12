//! HTTP transport for counter operations.

pub mod counters;
pub mod rejection;

pub use rejection::CounterRejection;
