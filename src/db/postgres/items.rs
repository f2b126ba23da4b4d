//! PostgreSQL ItemRepository implementation.
//!
//! Expects an `items` table under the configured schema:
//! `id BIGSERIAL PRIMARY KEY, name TEXT NOT NULL, description TEXT,
//! price DOUBLE PRECISION NOT NULL, is_active BOOLEAN NOT NULL`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::db::{
    DbError, DbResult, Item, ItemListQuery, ItemPatch, ItemRepository, NewItem, QueryKind,
    QueryRegistry,
};

/// SQLx-backed item repository.
pub struct PgItemRepository<'a> {
    pub(crate) pool: &'a PgPool,
    pub(crate) queries: &'a QueryRegistry,
}

fn item_from_row(row: &PgRow) -> Item {
    Item {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        price: row.get("price"),
        is_active: row.get("is_active"),
    }
}

fn db_err(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository<'_> {
    async fn list(&self, query: &ItemListQuery) -> DbResult<Vec<Item>> {
        let rows = match &query.search {
            Some(search) => {
                let pattern = format!("%{}%", search);
                sqlx::query(&self.queries.sql(QueryKind::ListSearch))
                    .bind(pattern)
                    .bind(query.skip)
                    .bind(query.limit)
                    .fetch_all(self.pool)
                    .await
            }
            None => {
                sqlx::query(&self.queries.sql(QueryKind::List))
                    .bind(query.skip)
                    .bind(query.limit)
                    .fetch_all(self.pool)
                    .await
            }
        }
        .map_err(db_err)?;

        Ok(rows.iter().map(item_from_row).collect())
    }

    async fn get(&self, id: i64) -> DbResult<Item> {
        let row = sqlx::query(&self.queries.sql(QueryKind::GetById))
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(db_err)?;

        match row {
            Some(row) => Ok(item_from_row(&row)),
            None => Err(DbError::NotFound { id }),
        }
    }

    async fn create(&self, new: &NewItem) -> DbResult<Item> {
        let is_active = new.is_active.unwrap_or(true);

        let row = sqlx::query(&self.queries.sql(QueryKind::Insert))
            .bind(&new.name)
            .bind(&new.description)
            .bind(new.price)
            .bind(is_active)
            .fetch_one(self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) => DbError::Constraint {
                    message: db.message().to_string(),
                },
                _ => db_err(e),
            })?;

        let id: i64 = row.get("id");

        // The not-null constraints guarantee name and price were present once
        // the insert succeeded.
        Ok(Item {
            id,
            name: new.name.clone().unwrap_or_default(),
            description: new.description.clone(),
            price: new.price.unwrap_or_default(),
            is_active,
        })
    }

    async fn update(&self, id: i64, patch: &ItemPatch) -> DbResult<Item> {
        let get_sql = self.queries.sql(QueryKind::GetById);

        // Existence check, merge, and write share one transaction so a
        // concurrent delete cannot slip between them.
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        let row = sqlx::query(&get_sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_err)?;

        let mut item = match row {
            Some(row) => item_from_row(&row),
            None => return Err(DbError::NotFound { id }),
        };
        patch.apply(&mut item);

        sqlx::query(&self.queries.sql(QueryKind::Update))
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(item.is_active)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        let row = sqlx::query(&get_sql)
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_err)?;
        let updated = item_from_row(&row);

        tx.commit().await.map_err(db_err)?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        // The affected-row count stands in for a separate existence check.
        let result = sqlx::query(&self.queries.sql(QueryKind::Delete))
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        Ok(())
    }
}
