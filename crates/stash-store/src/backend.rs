//! Raw storage backend contract

use crate::error::BackendResult;

/// Synchronous string-keyed storage the store wraps.
///
/// Implementations treat records as opaque strings; envelope encoding and
/// decoding stay in the store. Any method may fail, and the store downgrades
/// those failures to error reports so its own operations stay total.
pub trait StorageBackend: Send + Sync {
    /// Fetch the raw record for a key, `None` when no record exists.
    fn get_item(&self, key: &str) -> BackendResult<Option<String>>;

    /// Write the raw record for a key, replacing any previous record.
    fn set_item(&self, key: &str, value: &str) -> BackendResult<()>;

    /// Delete the record for a key. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> BackendResult<()>;

    /// Delete every record.
    fn clear(&self) -> BackendResult<()>;
}
