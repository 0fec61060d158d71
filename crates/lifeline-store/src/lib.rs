// Local key-value persistence
// One logical writer per session; no locking

mod error;
mod kv;
mod schema;
mod sqlite;
mod timestamp;

// Public API
pub use error::{Error, Result};
pub use kv::{KeyValueStore, MemoryStore};
pub use schema::SCHEMA_VERSION;
pub use sqlite::SqliteStore;
pub use timestamp::{TimestampStore, CALL_LOG_KEY, LAST_UPDATED_KEY};
