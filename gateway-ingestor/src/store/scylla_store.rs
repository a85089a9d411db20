use async_trait::async_trait;
use gateway_item::Item;
use scylla::{Session, SessionBuilder};

use super::{ItemStore, StoreResult, KEYSPACE, TABLE};

/// Column store backed by one long lived driver session.
/// The session is opened once per process and reused by every invocation.
pub struct ScyllaStore {
    session: Session,
}

impl ScyllaStore {
    /// Open a session against a single contact point, `host:port`.
    pub async fn connect(address: &str) -> StoreResult<Self> {
        let session = SessionBuilder::new().known_node(address).build().await?;
        Ok(Self { session })
    }

    /// Read back the row stored under `id`
    pub async fn fetch(&self, id: i32) -> StoreResult<Option<Item>> {
        let select = format!("SELECT description, count FROM {KEYSPACE}.{TABLE} WHERE id = ?");
        let row = self
            .session
            .query(select, (id,))
            .await?
            .maybe_first_row_typed::<(String, i32)>()?;

        Ok(row.map(|(description, count)| Item {
            id,
            description,
            count,
        }))
    }

    /// Names of the tables living in our keyspace
    pub async fn table_names(&self) -> StoreResult<Vec<String>> {
        let rows = self
            .session
            .query(
                "SELECT table_name FROM system_schema.tables WHERE keyspace_name = ?",
                (KEYSPACE,),
            )
            .await?
            .rows_typed::<(String,)>()?;

        let mut names = Vec::new();
        for row in rows {
            let (name,) = row?;
            names.push(name);
        }
        Ok(names)
    }
}

#[async_trait]
impl ItemStore for ScyllaStore {
    #[tracing::instrument(name = "schema_bootstrap", skip_all)]
    async fn ensure_schema(&self) -> StoreResult<()> {
        let create_keyspace = format!(
            "CREATE KEYSPACE IF NOT EXISTS {KEYSPACE} \
             WITH REPLICATION = {{ 'class' : 'SimpleStrategy', 'replication_factor' : 1 }}"
        );
        self.session.query(create_keyspace, ()).await?;
        tracing::debug!("keyspace {KEYSPACE} present");

        let create_table = format!(
            "CREATE TABLE IF NOT EXISTS {KEYSPACE}.{TABLE} (\
                id int PRIMARY KEY, \
                description text, \
                count int\
             )"
        );
        self.session.query(create_table, ()).await?;

        let version = self.session.await_schema_agreement().await?;
        tracing::info!(%version, "table {KEYSPACE}.{TABLE} present");
        Ok(())
    }

    #[tracing::instrument(name = "storage_writer", skip_all, fields(id = item.id))]
    async fn write(&self, item: &Item) -> StoreResult<()> {
        let insert = format!("INSERT INTO {KEYSPACE}.{TABLE} (id, description, count) VALUES (?, ?, ?)");
        self.session
            .query(insert, (item.id, item.description.as_str(), item.count))
            .await?;
        Ok(())
    }
}
