//! Lazy read-time migrations
//!
//! A migration supplies a value for a key the backend has never seen under
//! the current schema. Reading an absent key consults the migration
//! registered for it, persists what it yields, and hands the value to the
//! caller in the same call.

use serde_json::Value;

/// Fallback computed by a migration for one read of an absent key.
pub struct Migration {
    /// Value to persist and return
    pub value: Value,
    /// Invoked once the persist succeeds, skipped when it fails
    pub on_complete: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Migration {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            on_complete: None,
        }
    }

    /// Attach a completion callback fired only after a successful persist.
    pub fn with_on_complete(mut self, callback: impl FnOnce() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }
}

/// Per-key migration source registered at build time. Returning `None` means
/// no fallback exists and the read resolves like any other absent key.
pub type MigrationFn = Box<dyn Fn() -> Option<Migration> + Send + Sync>;
