//! Supported SQL dialects.

/// One of the two supported SQL template variants.
///
/// The dialects differ in pagination syntax (`OFFSET/LIMIT` vs
/// `OFFSET ... ROWS FETCH NEXT ... ROWS ONLY`), case folding for search
/// (`ILIKE` vs `UPPER(...) LIKE UPPER(...)`), and the id-return mechanism on
/// insert (`RETURNING id` vs an output-bound `RETURNING ID INTO :id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    Postgres,
    #[default]
    Oracle,
}

impl Dialect {
    /// Select the dialect for a configured database type.
    ///
    /// Anything other than `postgresql` falls back to the Oracle dialect,
    /// including the empty string. This mirrors the long-standing behavior of
    /// the deployed service; see DESIGN.md for the startup-error alternative.
    pub fn from_config(db_type: &str) -> Self {
        match db_type {
            "postgresql" => Dialect::Postgres,
            _ => Dialect::Oracle,
        }
    }
}
