//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access, allowing
//! different storage backends (PostgreSQL, in-memory, etc.) to be swapped
//! without changing the API layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: The Item entity and its create/patch/list shapes
//! - `dialect`: Supported SQL dialects and selection from configuration
//! - `queries`: Per-dialect SQL template registry with schema substitution
//! - `repository`: Trait definitions for data access
//! - `postgres`: SQLx-backed PostgreSQL implementation
//! - `memory`: In-memory implementation (useful for testing)

mod dialect;
mod error;
mod memory;
mod models;
mod postgres;
mod queries;
mod repository;

#[cfg(test)]
mod memory_test;

pub use dialect::Dialect;
pub use error::{DbError, DbResult};
pub use memory::{MemoryDatabase, MemoryItemRepository};
pub use models::{Item, ItemListQuery, ItemPatch, NewItem};
pub use postgres::{PgDatabase, PgItemRepository};
pub use queries::{QueryKind, QueryRegistry};
pub use repository::{Database, ItemRepository};
