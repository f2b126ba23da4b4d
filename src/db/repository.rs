//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the API layer.

use async_trait::async_trait;

use crate::db::{DbResult, Item, ItemListQuery, ItemPatch, NewItem};

/// Repository for item operations.
#[async_trait]
pub trait ItemRepository {
    /// List items ordered by ascending id, windowed by `skip`/`limit` and
    /// optionally filtered by a case-insensitive substring match on name.
    /// An empty result is not an error.
    async fn list(&self, query: &ItemListQuery) -> DbResult<Vec<Item>>;

    /// Get an item by id. Returns [`DbError::NotFound`] when no row matches.
    ///
    /// [`DbError::NotFound`]: crate::db::DbError::NotFound
    async fn get(&self, id: i64) -> DbResult<Item>;

    /// Insert a new item and return it with its database-assigned id.
    /// `is_active` defaults to active when omitted. Missing required fields
    /// surface as a constraint violation from the backend.
    async fn create(&self, new: &NewItem) -> DbResult<Item>;

    /// Merge the patch over the stored row and write the full row back,
    /// returning the updated item. Fields absent from the patch keep their
    /// stored values. Returns not-found without writing when the id is absent.
    async fn update(&self, id: i64, patch: &ItemPatch) -> DbResult<Item>;

    /// Delete an item by id. Returns not-found when the id is absent.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    /// Backend-specific item repository, borrowed from the database handle.
    type Items<'a>: ItemRepository + Send + Sync
    where
        Self: 'a;

    /// Get the item repository.
    fn items(&self) -> Self::Items<'_>;
}
