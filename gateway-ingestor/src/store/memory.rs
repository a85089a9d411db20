use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    sync::{Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use gateway_item::Item;

use super::{ItemStore, StoreError, StoreResult, KEYSPACE, TABLE};

/// In-process stand-in for the column store.
/// Keeps the observable behavior that matters to the write path: the schema
/// has to exist before a write, and writes upsert by `id`. Failures can be
/// injected for the schema and for individual ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    keyspaces: BTreeSet<String>,
    tables: BTreeSet<(String, String)>,
    rows: BTreeMap<i32, Item>,
    writes: Vec<i32>,
    failing_ids: HashSet<i32>,
    schema_failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write of `id` fails from now on
    pub fn fail_writes_for(&self, id: i32) {
        self.state().failing_ids.insert(id);
    }

    pub fn fail_schema_with(&self, reason: impl Into<String>) {
        self.state().schema_failure = Some(reason.into());
    }

    pub fn row(&self, id: i32) -> Option<Item> {
        self.state().rows.get(&id).cloned()
    }

    pub fn row_count(&self) -> usize {
        self.state().rows.len()
    }

    /// Ids of every successful write, in the order they landed
    pub fn writes(&self) -> Vec<i32> {
        self.state().writes.clone()
    }

    pub fn keyspaces(&self) -> Vec<String> {
        self.state().keyspaces.iter().cloned().collect()
    }

    pub fn tables(&self) -> Vec<(String, String)> {
        self.state().tables.iter().cloned().collect()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        let mut state = self.state();
        if let Some(reason) = &state.schema_failure {
            return Err(StoreError::Unavailable(reason.clone()));
        }

        state.keyspaces.insert(KEYSPACE.to_owned());
        state.tables.insert((KEYSPACE.to_owned(), TABLE.to_owned()));
        Ok(())
    }

    async fn write(&self, item: &Item) -> StoreResult<()> {
        let mut state = self.state();
        if !state.tables.contains(&(KEYSPACE.to_owned(), TABLE.to_owned())) {
            return Err(StoreError::UnconfiguredTable(format!("{KEYSPACE}.{TABLE}")));
        }
        if state.failing_ids.contains(&item.id) {
            return Err(StoreError::Unavailable(format!(
                "write of item {} timed out",
                item.id
            )));
        }

        state.rows.insert(item.id, item.clone());
        state.writes.push(item.id);
        Ok(())
    }
}
