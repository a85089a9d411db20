use gateway_item::ItemDecodeError;
use thiserror::Error;

use crate::store::StoreError;

/// Every failure ends the current invocation; nothing is retried in here.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Config Error: {0}")]
    Config(#[from] clap::Error),

    #[error("Connection Error: {0}")]
    Connection(#[source] StoreError),

    #[error("Schema Bootstrap Error: {0}")]
    SchemaBootstrap(#[source] StoreError),

    #[error("Decode Error at record {position} (sequence number {sequence_number}): {source}")]
    Decode {
        position: usize,
        sequence_number: String,
        source: ItemDecodeError,
    },

    #[error("Write Error for item {id} at record {position}: {source}")]
    Write {
        position: usize,
        id: i32,
        source: StoreError,
    },
}
