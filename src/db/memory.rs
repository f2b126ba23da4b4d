//! In-memory implementation of the database traits.
//!
//! Rows live in a mutex-guarded vector kept in ascending-id order. The
//! observable contract matches the SQL backends, which makes this the backend
//! of choice for API tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::db::{
    Database, DbError, DbResult, Item, ItemListQuery, ItemPatch, ItemRepository, NewItem,
};

struct Store {
    items: Vec<Item>,
    next_id: i64,
}

/// In-memory database implementation.
pub struct MemoryDatabase {
    inner: Mutex<Store>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Store {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for MemoryDatabase {
    type Items<'a> = MemoryItemRepository<'a>;

    fn items(&self) -> Self::Items<'_> {
        MemoryItemRepository { inner: &self.inner }
    }
}

/// Item repository over the in-memory store.
pub struct MemoryItemRepository<'a> {
    inner: &'a Mutex<Store>,
}

impl MemoryItemRepository<'_> {
    fn lock(&self) -> DbResult<MutexGuard<'_, Store>> {
        self.inner.lock().map_err(|e| DbError::Database {
            message: format!("Failed to acquire store lock: {}", e),
        })
    }
}

fn not_null_violation(column: &str) -> DbError {
    DbError::Constraint {
        message: format!(
            "null value in column \"{}\" of relation \"items\" violates not-null constraint",
            column
        ),
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository<'_> {
    async fn list(&self, query: &ItemListQuery) -> DbResult<Vec<Item>> {
        let store = self.lock()?;
        let needle = query.search.as_ref().map(|s| s.to_lowercase());
        let skip = query.skip.max(0) as usize;
        let limit = query.limit.max(0) as usize;

        Ok(store
            .items
            .iter()
            .filter(|item| {
                needle
                    .as_ref()
                    .is_none_or(|n| item.name.to_lowercase().contains(n))
            })
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> DbResult<Item> {
        let store = self.lock()?;
        store
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(DbError::NotFound { id })
    }

    async fn create(&self, new: &NewItem) -> DbResult<Item> {
        let mut store = self.lock()?;

        let name = new.name.clone().ok_or_else(|| not_null_violation("name"))?;
        let price = new.price.ok_or_else(|| not_null_violation("price"))?;

        let id = store.next_id;
        store.next_id += 1;

        let item = Item {
            id,
            name,
            description: new.description.clone(),
            price,
            is_active: new.is_active.unwrap_or(true),
        };
        store.items.push(item.clone());

        Ok(item)
    }

    async fn update(&self, id: i64, patch: &ItemPatch) -> DbResult<Item> {
        let mut store = self.lock()?;

        let item = store
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(DbError::NotFound { id })?;
        patch.apply(item);

        Ok(item.clone())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let mut store = self.lock()?;

        let position = store
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(DbError::NotFound { id })?;
        store.items.remove(position);

        Ok(())
    }
}
