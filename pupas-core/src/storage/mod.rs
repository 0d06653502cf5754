//! Blob storage
//!
//! Persistence is a flat key/value space of opaque strings. Each collection
//! (the group order, the table-order list) lives under a single key and is
//! rewritten whole on every change, so concurrent writers are
//! last-writer-wins at collection granularity.
//!
//! | Key | Value |
//! |-----|-------|
//! | [`GROUP_ORDER_KEY`] | JSON `GroupOrder` |
//! | [`TABLE_ORDERS_KEY`] | JSON `Vec<TableOrder>` |

mod memory;
mod redb_store;

pub use memory::MemoryBlobStore;
pub use redb_store::RedbBlobStore;

use thiserror::Error;

/// Key of the serialized group order
pub const GROUP_ORDER_KEY: &str = "pupas-order";

/// Key of the serialized table-order list
pub const TABLE_ORDERS_KEY: &str = "pupuseria-orders";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored value is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key/value store over opaque string values
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}
