//! Typed key-value store
//!
//! `KeyedStore` wraps a raw backend and keeps every operation total: backend
//! and codec failures are downgraded to error reports plus sentinel returns,
//! never propagated. Values persist as `{"value": ...}` JSON envelopes so an
//! absent key and a stored null stay distinguishable.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::migration::{Migration, MigrationFn};
use crate::paths::default_database_path;
use crate::report::{ErrorReport, Op};
use crate::sqlite::SqliteBackend;

/// Build-time error handler, consulted by every operation that has no
/// call-site override.
pub type ErrorHandler = dyn Fn(&ErrorReport) + Send + Sync;

#[derive(Serialize)]
struct Envelope<V> {
    value: V,
}

/// Result of inspecting a key without touching the error channel.
///
/// `has_record` says whether the backend holds a readable record for the
/// key; `has_value` whether that record carries a value. A record that
/// parses but lacks a value field counts as a record without a value, while
/// an unreadable record counts as no record at all, with the failure in
/// `error`.
#[derive(Debug)]
pub struct FindResult {
    pub key: String,
    pub has_record: bool,
    pub has_value: bool,
    pub value: Option<Value>,
    pub error: Option<StoreError>,
}

/// Configuration collected before a store is constructed.
#[derive(Default)]
pub struct StoreBuilder {
    backend: Option<Arc<dyn StorageBackend>>,
    on_error: Option<Arc<ErrorHandler>>,
    migrations: HashMap<String, MigrationFn>,
}

impl StoreBuilder {
    pub fn backend(mut self, backend: Arc<dyn StorageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Install the handler failed operations fall back to when the call site
    /// supplies none.
    pub fn on_error(mut self, handler: impl Fn(&ErrorReport) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(handler));
        self
    }

    /// Register a migration consulted when `key` is read while absent.
    pub fn migration(
        mut self,
        key: impl Into<String>,
        source: impl Fn() -> Option<Migration> + Send + Sync + 'static,
    ) -> Self {
        self.migrations.insert(key.into(), Box::new(source));
        self
    }

    /// Construct the store, opening the ambient SQLite database when no
    /// backend was supplied. Failing to resolve a backend is the single way
    /// construction can fail; everything after construction is total.
    pub fn build(self) -> crate::Result<KeyedStore> {
        let backend = match self.backend {
            Some(backend) => backend,
            None => ambient_backend()?,
        };

        Ok(KeyedStore {
            backend,
            on_error: self.on_error,
            migrations: Arc::new(self.migrations),
        })
    }
}

/// Open the platform-default SQLite database, creating its directory.
fn ambient_backend() -> crate::Result<Arc<dyn StorageBackend>> {
    let path = default_database_path()
        .ok_or_else(|| StoreError::NoBackend("no platform data directory".to_string()))?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| StoreError::NoBackend(format!("{}: {}", dir.display(), e)))?;
    }

    let backend = SqliteBackend::open(&path)
        .map_err(|e| StoreError::NoBackend(format!("{}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), "Opened ambient store database");
    Ok(Arc::new(backend))
}

/// Typed facade over a raw string-keyed backend.
pub struct KeyedStore {
    backend: Arc<dyn StorageBackend>,
    on_error: Option<Arc<ErrorHandler>>,
    migrations: Arc<HashMap<String, MigrationFn>>,
}

impl KeyedStore {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Wrap an explicit backend with no handler and no migrations.
    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            on_error: None,
            migrations: Arc::new(HashMap::new()),
        }
    }

    /// Persist `value` under `key`. Returns `true` on success; on failure
    /// the report goes to the build-time handler and `false` comes back.
    pub fn set_item<V: Serialize>(&self, key: &str, value: &V) -> bool {
        self.set_inner(key, value, None)
    }

    /// Like `set_item`, reporting failures to `on_error` instead of the
    /// build-time handler.
    pub fn set_item_with<V: Serialize>(
        &self,
        key: &str,
        value: &V,
        on_error: impl Fn(&ErrorReport),
    ) -> bool {
        self.set_inner(key, value, Some(&on_error))
    }

    fn set_inner<V: Serialize>(
        &self,
        key: &str,
        value: &V,
        on_error: Option<&dyn Fn(&ErrorReport)>,
    ) -> bool {
        let encoded = match serde_json::to_string(&Envelope { value }) {
            Ok(encoded) => encoded,
            Err(e) => {
                self.report(
                    ErrorReport {
                        key: Some(key.to_string()),
                        op: Op::Set,
                        value: snapshot(value),
                        error: StoreError::Serialize(e),
                    },
                    on_error,
                );
                return false;
            }
        };

        match self.backend.set_item(key, &encoded) {
            Ok(()) => true,
            Err(e) => {
                self.report(
                    ErrorReport {
                        key: Some(key.to_string()),
                        op: Op::Set,
                        value: snapshot(value),
                        error: StoreError::Backend(e),
                    },
                    on_error,
                );
                false
            }
        }
    }

    /// Read the value for `key`. `None` when the key is absent with no
    /// migration to fall back to, or when the read fails.
    pub fn get_item<V: DeserializeOwned>(&self, key: &str) -> Option<V> {
        self.get_inner(key, None)
    }

    /// Like `get_item`, reporting failures to `on_error` instead of the
    /// build-time handler.
    pub fn get_item_with<V: DeserializeOwned>(
        &self,
        key: &str,
        on_error: impl Fn(&ErrorReport),
    ) -> Option<V> {
        self.get_inner(key, Some(&on_error))
    }

    /// Read the value for `key`, resolving to `default` when the key is
    /// absent or the read fails.
    pub fn get_item_or_default<V: DeserializeOwned>(&self, key: &str, default: V) -> V {
        self.get_inner(key, None).unwrap_or(default)
    }

    /// Like `get_item_or_default`, reporting failures to `on_error` instead
    /// of the build-time handler.
    pub fn get_item_or_default_with<V: DeserializeOwned>(
        &self,
        key: &str,
        default: V,
        on_error: impl Fn(&ErrorReport),
    ) -> V {
        self.get_inner(key, Some(&on_error)).unwrap_or(default)
    }

    fn get_inner<V: DeserializeOwned>(
        &self,
        key: &str,
        on_error: Option<&dyn Fn(&ErrorReport)>,
    ) -> Option<V> {
        let raw = match self.backend.get_item(key) {
            Ok(raw) => raw,
            Err(e) => {
                self.report(get_report(key, StoreError::Backend(e)), on_error);
                return None;
            }
        };

        let raw = match raw {
            Some(raw) => raw,
            None => return self.migrate(key, on_error),
        };

        let parsed: Value = match serde_json::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.report(get_report(key, StoreError::Parse(e)), on_error);
                return None;
            }
        };

        // Records that are valid JSON but not envelopes are legacy data: the
        // read resolves like an absent key, without a report.
        let value = match parsed {
            Value::Object(mut map) => match map.remove("value") {
                Some(value) => value,
                None => return None,
            },
            _ => return None,
        };

        match serde_json::from_value(value) {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(get_report(key, StoreError::Parse(e)), on_error);
                None
            }
        }
    }

    /// Run the migration registered for an absent `key`, if any.
    fn migrate<V: DeserializeOwned>(
        &self,
        key: &str,
        on_error: Option<&dyn Fn(&ErrorReport)>,
    ) -> Option<V> {
        let migration = self.migrations.get(key).and_then(|source| source())?;

        // Persist through the plain set path, so its failures reach the
        // build-time handler. The computed value is returned either way.
        let persisted = self.set_inner(key, &migration.value, None);
        if persisted {
            tracing::debug!(key = %key, "Migrated absent key");
            if let Some(on_complete) = migration.on_complete {
                on_complete();
            }
        }

        match serde_json::from_value(migration.value) {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(get_report(key, StoreError::Parse(e)), on_error);
                None
            }
        }
    }

    /// Delete `key`. Fire-and-forget: pair with `find_item` when the caller
    /// needs confirmation.
    pub fn remove_item(&self, key: &str) {
        self.remove_inner(key, None)
    }

    /// Like `remove_item`, reporting failures to `on_error` instead of the
    /// build-time handler.
    pub fn remove_item_with(&self, key: &str, on_error: impl Fn(&ErrorReport)) {
        self.remove_inner(key, Some(&on_error))
    }

    fn remove_inner(&self, key: &str, on_error: Option<&dyn Fn(&ErrorReport)>) {
        if let Err(e) = self.backend.remove_item(key) {
            self.report(
                ErrorReport {
                    key: Some(key.to_string()),
                    op: Op::Remove,
                    value: None,
                    error: StoreError::Backend(e),
                },
                on_error,
            );
        }
    }

    /// Inspect a key without touching the error channel; failures land in
    /// the returned `error` field instead.
    pub fn find_item(&self, key: &str) -> FindResult {
        let mut found = FindResult {
            key: key.to_string(),
            has_record: false,
            has_value: false,
            value: None,
            error: None,
        };

        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return found,
            Err(e) => {
                found.error = Some(StoreError::Backend(e));
                return found;
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(mut map)) => {
                found.has_record = true;
                if let Some(value) = map.remove("value") {
                    found.has_value = true;
                    found.value = Some(value);
                }
            }
            Ok(_) => found.has_record = true,
            Err(e) => found.error = Some(StoreError::Parse(e)),
        }

        found
    }

    /// Drop every record. Unlike the keyed operations there is no per-call
    /// handler override; failures go to the build-time handler only.
    pub fn clear(&self) -> bool {
        match self.backend.clear() {
            Ok(()) => true,
            Err(e) => {
                self.report(
                    ErrorReport {
                        key: None,
                        op: Op::Clear,
                        value: None,
                        error: StoreError::Backend(e),
                    },
                    None,
                );
                false
            }
        }
    }

    /// Pick the handler for a failure: the call-site override wins over the
    /// build-time handler, and with neither the report is only logged.
    fn resolve_handler<'a>(
        &'a self,
        specific: Option<&'a dyn Fn(&ErrorReport)>,
    ) -> Option<&'a dyn Fn(&ErrorReport)> {
        specific.or_else(|| {
            self.on_error
                .as_deref()
                .map(|handler| handler as &dyn Fn(&ErrorReport))
        })
    }

    fn report(&self, report: ErrorReport, specific: Option<&dyn Fn(&ErrorReport)>) {
        tracing::warn!(
            op = %report.op,
            key = ?report.key,
            error = %report.error,
            "Store operation failed"
        );

        if let Some(handler) = self.resolve_handler(specific) {
            handler(&report);
        }
    }
}

impl Clone for KeyedStore {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            on_error: self.on_error.clone(),
            migrations: Arc::clone(&self.migrations),
        }
    }
}

fn get_report(key: &str, error: StoreError) -> ErrorReport {
    ErrorReport {
        key: Some(key.to_string()),
        op: Op::Get,
        value: None,
        error,
    }
}

/// JSON snapshot of a rejected value for its report, when the value itself
/// can be captured.
fn snapshot<V: Serialize>(value: &V) -> Option<Value> {
    serde_json::to_value(value).ok()
}
