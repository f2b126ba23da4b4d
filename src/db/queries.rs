//! Per-dialect SQL template registry.
//!
//! Each dialect carries a fixed set of statement templates keyed by
//! [`QueryKind`]. Templates contain a single `{schema}` placeholder that is
//! substituted with the configured schema name at resolution time. The schema
//! comes from trusted configuration; all data values are bound parameters and
//! are never interpolated into the SQL text.

use crate::config::Settings;
use crate::db::Dialect;

/// Logical statement names understood by the registry.
///
/// The set is closed: requesting an operation outside this enum is a compile
/// error, which is the fail-fast contract for programming mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    List,
    ListSearch,
    GetById,
    Insert,
    Update,
    Delete,
}

// PostgreSQL templates use positional $n binds.
const PG_LIST: &str = "SELECT id, name, description, price, is_active FROM {schema}.items ORDER BY id OFFSET $1 LIMIT $2";
const PG_LIST_SEARCH: &str = "SELECT id, name, description, price, is_active FROM {schema}.items WHERE name ILIKE $1 ORDER BY id OFFSET $2 LIMIT $3";
const PG_GET_BY_ID: &str =
    "SELECT id, name, description, price, is_active FROM {schema}.items WHERE id = $1";
const PG_INSERT: &str = "INSERT INTO {schema}.items (name, description, price, is_active) VALUES ($1, $2, $3, $4) RETURNING id";
const PG_UPDATE: &str = "UPDATE {schema}.items SET name = $1, description = $2, price = $3, is_active = $4 WHERE id = $5";
const PG_DELETE: &str = "DELETE FROM {schema}.items WHERE id = $1";

// Oracle templates use named :binds; the insert returns the generated id
// through the output-bound :id parameter.
const ORA_LIST: &str =
    "SELECT * FROM {schema}.ITEMS ORDER BY ID OFFSET :skip ROWS FETCH NEXT :limit ROWS ONLY";
const ORA_LIST_SEARCH: &str = "SELECT * FROM {schema}.ITEMS WHERE UPPER(NAME) LIKE UPPER(:search) ORDER BY ID OFFSET :skip ROWS FETCH NEXT :limit ROWS ONLY";
const ORA_GET_BY_ID: &str = "SELECT * FROM {schema}.ITEMS WHERE ID = :id";
const ORA_INSERT: &str = "INSERT INTO {schema}.ITEMS (NAME, DESCRIPTION, PRICE, IS_ACTIVE) VALUES (:name, :description, :price, :is_active) RETURNING ID INTO :id";
const ORA_UPDATE: &str = "UPDATE {schema}.ITEMS SET NAME = :name, DESCRIPTION = :description, PRICE = :price, IS_ACTIVE = :is_active WHERE ID = :id";
const ORA_DELETE: &str = "DELETE FROM {schema}.ITEMS WHERE ID = :id";

impl Dialect {
    /// The fixed template for a statement in this dialect.
    fn template(self, kind: QueryKind) -> &'static str {
        match self {
            Dialect::Postgres => match kind {
                QueryKind::List => PG_LIST,
                QueryKind::ListSearch => PG_LIST_SEARCH,
                QueryKind::GetById => PG_GET_BY_ID,
                QueryKind::Insert => PG_INSERT,
                QueryKind::Update => PG_UPDATE,
                QueryKind::Delete => PG_DELETE,
            },
            Dialect::Oracle => match kind {
                QueryKind::List => ORA_LIST,
                QueryKind::ListSearch => ORA_LIST_SEARCH,
                QueryKind::GetById => ORA_GET_BY_ID,
                QueryKind::Insert => ORA_INSERT,
                QueryKind::Update => ORA_UPDATE,
                QueryKind::Delete => ORA_DELETE,
            },
        }
    }
}

/// Resolves logical statement names to ready-to-execute SQL for one dialect
/// and one schema. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct QueryRegistry {
    dialect: Dialect,
    schema: String,
}

impl QueryRegistry {
    pub fn new(dialect: Dialect, schema: impl Into<String>) -> Self {
        Self {
            dialect,
            schema: schema.into(),
        }
    }

    /// Build a registry from settings: dialect from `DB_TYPE`, schema from
    /// `DB_SCHEMA`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Dialect::from_config(&settings.db_type), settings.db_schema.clone())
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Resolve a statement to SQL text with the schema substituted in.
    pub fn sql(&self, kind: QueryKind) -> String {
        self.dialect.template(kind).replace("{schema}", &self.schema)
    }
}
