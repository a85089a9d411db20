use async_trait::async_trait;
use gateway_item::Item;
use scylla::{
    cql_to_rust::FromRowError,
    transport::{
        errors::{NewSessionError, QueryError},
        query_result::{MaybeFirstRowTypedError, RowsExpectedError},
    },
};
use thiserror::Error;

mod memory;
mod scylla_store;

pub use memory::MemoryStore;
pub use scylla_store::ScyllaStore;

pub const KEYSPACE: &str = "test_ks";
pub const TABLE: &str = "test_table";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Couldn't open session: {0}")]
    Session(#[from] NewSessionError),

    #[error("Cql Query Error: {0}")]
    Query(#[from] QueryError),

    #[error("Expected rows: {0}")]
    RowsExpected(#[from] RowsExpectedError),

    #[error("Unexpected row shape: {0}")]
    Row(#[from] FromRowError),

    #[error("Unexpected row shape: {0}")]
    FirstRow(#[from] MaybeFirstRowTypedError),

    #[error("Unconfigured table {0}")]
    UnconfiguredTable(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = core::result::Result<T, StoreError>;

/// Destination of decoded items.
/// Both operations are single statements without retries, an error is handed
/// straight back to the caller.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Create the keyspace and table if they are absent. Safe to repeat.
    async fn ensure_schema(&self) -> StoreResult<()>;

    /// Upsert one row keyed by `item.id`.
    async fn write(&self, item: &Item) -> StoreResult<()>;
}
