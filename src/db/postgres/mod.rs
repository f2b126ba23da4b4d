//! PostgreSQL implementation of the database traits.
//!
//! Statements come from the [`QueryRegistry`](crate::db::QueryRegistry);
//! this module only executes them against a SQLx connection pool.

mod connection;
mod items;

pub use connection::PgDatabase;
pub use items::PgItemRepository;
