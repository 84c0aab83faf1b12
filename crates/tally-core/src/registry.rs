//! Named counter storage.
//!
//! Every operation holds the shard lock of the key it touches for the whole
//! read-modify-write, so per-name transitions are linearizable:
//! - `Absent --create--> Present(0)`
//! - `Present(v) --increment--> Present(v + 1)`
//! - `Present(v) --delete--> Absent`
//!
//! Everything else is refused with a [`CounterError`] and leaves the map
//! untouched.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{CounterError, Result};

/// In-memory registry: `name -> value`.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    counters: DashMap<String, u64>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Create `name` with value 0.
    ///
    /// Fails with [`CounterError::AlreadyExists`] if the name is present.
    /// Concurrent creates of the same name have exactly one winner.
    pub fn create(&self, name: &str) -> Result<u64> {
        match self.counters.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(CounterError::AlreadyExists(name.to_owned())),
            Entry::Vacant(slot) => {
                slot.insert(0);
                tracing::debug!(counter = %name, "counter created");
                Ok(0)
            }
        }
    }

    /// Add 1 to `name` and return the new value.
    pub fn increment(&self, name: &str) -> Result<u64> {
        let mut value = self
            .counters
            .get_mut(name)
            .ok_or_else(|| CounterError::NotFound(name.to_owned()))?;
        *value += 1;
        Ok(*value)
    }

    /// Remove `name`. A second delete reports [`CounterError::NotFound`].
    pub fn delete(&self, name: &str) -> Result<()> {
        self.counters
            .remove(name)
            .ok_or_else(|| CounterError::NotFound(name.to_owned()))?;
        tracing::debug!(counter = %name, "counter deleted");
        Ok(())
    }

    /// Current value of `name`.
    pub fn get(&self, name: &str) -> Result<u64> {
        self.counters
            .get(name)
            .map(|r| *r.value())
            .ok_or_else(|| CounterError::NotFound(name.to_owned()))
    }

    /// Number of live counters.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
