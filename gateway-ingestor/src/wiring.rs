//! Startup: one session per process, schema ensured before the first batch.

use tracing::info;

use crate::{
    config::Config,
    errors::GatewayError,
    handler::ItemIngestor,
    store::{ItemStore, ScyllaStore},
    Result,
};

/// Connect to the configured column store and bootstrap its schema.
/// The returned ingestor owns the session and is meant to outlive every invocation.
pub async fn connect(config: &Config) -> Result<ItemIngestor<ScyllaStore>> {
    let address = config.node_address();
    info!("connecting to column store at {address}");

    let store = ScyllaStore::connect(&address)
        .await
        .map_err(GatewayError::Connection)?;

    bootstrap(store).await
}

/// Ensure the schema exists on `store` before anything is written to it.
pub async fn bootstrap<S: ItemStore>(store: S) -> Result<ItemIngestor<S>> {
    store
        .ensure_schema()
        .await
        .map_err(GatewayError::SchemaBootstrap)?;
    info!("schema ready");

    Ok(ItemIngestor::new(store))
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::*;
    use crate::store::{MemoryStore, KEYSPACE, TABLE};

    #[tokio::test]
    async fn bootstrapping_twice_leaves_one_keyspace_and_table() -> anyhow::Result<()> {
        let ingestor = bootstrap(MemoryStore::new()).await?;
        ingestor.store().ensure_schema().await?;

        assert_eq!(vec![KEYSPACE.to_owned()], ingestor.store().keyspaces());
        assert_eq!(
            vec![(KEYSPACE.to_owned(), TABLE.to_owned())],
            ingestor.store().tables()
        );
        Ok(())
    }

    #[tokio::test]
    async fn a_failed_bootstrap_yields_no_ingestor() {
        let store = MemoryStore::new();
        store.fail_schema_with("keyspace creation rejected");

        let err = bootstrap(store).await.err().unwrap();

        assert!(matches!(err, GatewayError::SchemaBootstrap(_)), "{err:?}");
    }

    #[tokio::test]
    async fn an_unreachable_store_is_a_connection_error() {
        let config = Config {
            cassandra_host: "127.0.0.1".to_owned(),
            cassandra_port: 1,
            log_level: Level::INFO,
        };

        let err = connect(&config).await.err().unwrap();

        assert!(matches!(err, GatewayError::Connection(_)), "{err:?}");
    }
}
