//! STASH Store
//!
//! Typed key-value persistence over raw string-keyed backends. Values travel
//! as JSON envelopes, failures travel through a callback channel instead of
//! `Result`, and absent keys can be backfilled lazily by per-key migrations.

mod backend;
mod error;
mod memory;
mod migration;
mod paths;
mod report;
mod schema;
mod sqlite;
mod store;

pub use backend::StorageBackend;
pub use error::{BackendError, BackendResult, StoreError};
pub use memory::MemoryBackend;
pub use migration::{Migration, MigrationFn};
pub use paths::default_database_path;
pub use report::{ErrorReport, Op};
pub use sqlite::SqliteBackend;
pub use store::{ErrorHandler, FindResult, KeyedStore, StoreBuilder};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
