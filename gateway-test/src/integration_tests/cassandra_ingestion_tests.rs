//! Tests against a real cluster, reachable through `CASSANDRA_HOST` / `CASSANDRA_PORT`.
//! Run with `--ignored` once a node is up.

use anyhow::Result;
use rand::Rng;

use gateway_ingestor::{
    store::{KEYSPACE, TABLE},
    wiring, Config, GatewayError, ItemIngestor, ItemStore, ScyllaStore,
};
use gateway_item::Item;

use crate::test_util::{raw_record, records};

async fn ingestor() -> Result<ItemIngestor<ScyllaStore>> {
    let config = Config::from_env()?;
    Ok(wiring::connect(&config).await?)
}

/// Ids far apart per run so reruns against the same table don't see stale rows
fn fresh_ids<const N: usize>() -> [i32; N] {
    let base = rand::thread_rng().gen_range(0..i32::MAX - N as i32);
    std::array::from_fn(|i| base + i as i32)
}

#[ignore = "needs a running cassandra"]
#[tokio::test(flavor = "multi_thread")]
async fn connecting_creates_keyspace_and_table() -> Result<()> {
    let ingestor = ingestor().await?;

    // a second bootstrap on a live session is a no-op
    ingestor.store().ensure_schema().await?;

    let tables = ingestor.store().table_names().await?;
    assert_eq!(1, tables.iter().filter(|t| *t == TABLE).count(), "{KEYSPACE}: {tables:?}");
    Ok(())
}

#[ignore = "needs a running cassandra"]
#[tokio::test(flavor = "multi_thread")]
async fn a_single_record_reads_back() -> Result<()> {
    let ingestor = ingestor().await?;
    let [id] = fresh_ids::<1>();
    let item = Item::new(id, "blah", 0);

    ingestor.ingest(&records(&[item.clone()])?).await?;

    assert_eq!(Some(item), ingestor.store().fetch(id).await?);
    Ok(())
}

#[ignore = "needs a running cassandra"]
#[tokio::test(flavor = "multi_thread")]
async fn same_id_upserts() -> Result<()> {
    let ingestor = ingestor().await?;
    let [id] = fresh_ids::<1>();

    ingestor
        .ingest(&records(&[Item::new(id, "old", 1), Item::new(id, "new", 2)])?)
        .await?;

    assert_eq!(Some(Item::new(id, "new", 2)), ingestor.store().fetch(id).await?);
    Ok(())
}

#[ignore = "needs a running cassandra"]
#[tokio::test(flavor = "multi_thread")]
async fn a_malformed_record_leaves_the_tail_unwritten() -> Result<()> {
    let ingestor = ingestor().await?;
    let [first, _, third] = fresh_ids::<3>();
    let batch = vec![
        raw_record(0, Item::new(first, "written", 1).encode()?),
        raw_record(1, r#"{"id": "nope", "description": "bad", "count": 2}"#),
        raw_record(2, Item::new(third, "skipped", 3).encode()?),
    ];

    let err = ingestor.ingest(&batch).await.unwrap_err();

    assert!(matches!(err, GatewayError::Decode { position: 1, .. }), "{err:?}");
    assert_eq!(
        Some(Item::new(first, "written", 1)),
        ingestor.store().fetch(first).await?
    );
    assert_eq!(None, ingestor.store().fetch(third).await?);
    Ok(())
}
