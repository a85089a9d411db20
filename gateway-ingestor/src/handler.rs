use chrono::{DateTime, Utc};
use gateway_item::Item;
use tracing::{debug, error, info, warn};

use crate::{errors::GatewayError, store::ItemStore, Result};

/// One record as delivered by the stream.
/// Only the payload feeds the write path, the rest is there for the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub sequence_number: String,
    pub partition_key: String,
    pub arrival: DateTime<Utc>,
    pub payload: Vec<u8>,
}

impl RawRecord {
    pub fn new(
        sequence_number: impl Into<String>,
        partition_key: impl Into<String>,
        arrival: DateTime<Utc>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            sequence_number: sequence_number.into(),
            partition_key: partition_key.into(),
            arrival,
            payload: payload.into(),
        }
    }
}

/// Decodes every record of a batch and writes it to the store, one record at
/// a time and in delivery order.
pub struct ItemIngestor<S> {
    store: S,
}

impl<S: ItemStore> ItemIngestor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ingest one invocation's batch.
    /// The first record that fails to decode or write stops the batch: earlier
    /// records stay written, later ones are never attempted. Redelivery is up
    /// to the invocation host.
    #[tracing::instrument(name = "batch_handler", skip_all, fields(records = batch.len()))]
    pub async fn ingest(&self, batch: &[RawRecord]) -> Result<()> {
        if batch.is_empty() {
            warn!("no records present in batch");
            return Ok(());
        }
        debug!("received batch of {} records", batch.len());

        for (position, record) in batch.iter().enumerate() {
            debug!(
                position,
                sequence_number = %record.sequence_number,
                partition_key = %record.partition_key,
                arrival = %record.arrival,
                "received record"
            );

            let item = match Item::decode(&record.payload) {
                Ok(item) => item,
                Err(source) => {
                    error!(
                        position,
                        sequence_number = %record.sequence_number,
                        "couldn't decode record: {source}"
                    );
                    return Err(GatewayError::Decode {
                        position,
                        sequence_number: record.sequence_number.clone(),
                        source,
                    });
                }
            };
            debug!(?item, "decoded item");

            if let Err(source) = self.store.write(&item).await {
                error!(
                    position,
                    sequence_number = %record.sequence_number,
                    id = item.id,
                    "couldn't write item: {source}"
                );
                return Err(GatewayError::Write {
                    position,
                    id: item.id,
                    source,
                });
            }
        }

        info!("wrote {} items", batch.len());
        Ok(())
    }
}
