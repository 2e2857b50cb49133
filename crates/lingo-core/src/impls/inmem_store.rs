//! In-memory item store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Item, ItemKey};
use crate::ports::{ItemStore, Revision, StoreError, Versioned};

/// A record plus the revision it was last written at.
#[derive(Debug, Clone)]
struct StoredItem {
    item: Item,
    revision: Revision,
}

/// In-memory store state.
#[derive(Default)]
struct InMemoryStoreState {
    /// All records (single source of truth for items).
    records: HashMap<ItemKey, StoredItem>,
}

impl InMemoryStoreState {
    fn put(&mut self, item: Item) -> Option<Item> {
        let key = item.key();
        let revision = self
            .records
            .get(&key)
            .map_or(Revision::INITIAL, |stored| stored.revision.next());
        self.records
            .insert(key, StoredItem { item, revision })
            .map(|previous| previous.item)
    }

    fn put_if_revision(&mut self, item: Item, expected: Revision) -> Result<Revision, StoreError> {
        let key = item.key();
        let Some(stored) = self.records.get_mut(&key) else {
            return Err(StoreError::Conflict {
                key: key.to_string(),
            });
        };
        if stored.revision != expected {
            return Err(StoreError::Conflict {
                key: key.to_string(),
            });
        }

        stored.item = item;
        stored.revision = expected.next();
        Ok(stored.revision)
    }
}

/// In-memory implementation of [`ItemStore`].
///
/// Cloning shares the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryItemStore {
    state: Arc<Mutex<InMemoryStoreState>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn put(&self, item: Item) -> Result<Option<Item>, StoreError> {
        let mut state = self.state.lock().await;
        Ok(state.put(item))
    }

    async fn get_versioned(&self, key: &ItemKey) -> Result<Option<Versioned<Item>>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.records.get(key).map(|stored| Versioned {
            value: stored.item.clone(),
            revision: stored.revision,
        }))
    }

    async fn put_if_revision(
        &self,
        item: Item,
        expected: Revision,
    ) -> Result<Revision, StoreError> {
        let mut state = self.state.lock().await;
        state.put_if_revision(item, expected)
    }

    async fn query(
        &self,
        partition_id: &str,
        filter: Option<&str>,
    ) -> Result<Vec<Item>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .records
            .values()
            .map(|stored| &stored.item)
            .filter(|item| item.partition_id() == partition_id)
            .filter(|item| filter.is_none_or(|f| item.description().contains(f)))
            .cloned()
            .collect())
    }

    async fn scan_all(&self) -> Result<Vec<Item>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .records
            .values()
            .map(|stored| stored.item.clone())
            .collect())
    }
}
