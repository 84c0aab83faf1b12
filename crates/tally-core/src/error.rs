//! Counter outcomes that callers are expected to handle.

use thiserror::Error;

/// Stable discriminant of a [`CounterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `create` on a name that is already present.
    AlreadyExists,
    /// `increment`, `delete` or `get` on an absent name.
    NotFound,
}

impl ErrorKind {
    /// Label used in metrics and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::NotFound => "not_found",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CounterError>;

/// The two ways a registry operation can be refused.
///
/// The display text is client-facing: the HTTP layer sends it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("Counter {0} already exists")]
    AlreadyExists(String),
    #[error("Counter {0} does not exist")]
    NotFound(String),
}

impl CounterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CounterError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            CounterError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// Name of the counter the operation targeted.
    pub fn name(&self) -> &str {
        match self {
            CounterError::AlreadyExists(name) | CounterError::NotFound(name) => name,
        }
    }
}
