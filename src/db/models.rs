//! Domain model for the items catalog.
//!
//! The model is storage-agnostic; the dialect-specific representation of
//! `is_active` (native boolean vs 0/1 column) is a backend concern.

use serde::{Deserialize, Serialize};

/// A single catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Database-assigned identifier. Immutable once created.
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_active: bool,
}

/// Fields accepted when creating an item.
///
/// `name` and `price` are required by the table's not-null constraints; they
/// are kept optional here so that an absent field travels all the way to the
/// backend and surfaces as a constraint violation rather than being rejected
/// up front.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    /// Defaults to active when omitted.
    pub is_active: Option<bool>,
}

/// A partial update to an item.
///
/// Each field is applied independently: `None` preserves the stored value.
/// `description` is doubly optional so that an explicit null clears it while
/// an omitted field leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl ItemPatch {
    /// Merge this patch over an existing item, field by field.
    pub fn apply(&self, target: &mut Item) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(description) = &self.description {
            target.description = description.clone();
        }
        if let Some(price) = self.price {
            target.price = price;
        }
        if let Some(is_active) = self.is_active {
            target.is_active = is_active;
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.is_active.is_none()
    }
}

/// Pagination and search parameters for listing items.
#[derive(Debug, Clone)]
pub struct ItemListQuery {
    /// Number of rows to skip. Must be non-negative.
    pub skip: i64,
    /// Maximum number of rows to return. Valid range is 1..=100.
    pub limit: i64,
    /// Case-insensitive substring filter on `name`.
    pub search: Option<String>,
}

impl Default for ItemListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
            search: None,
        }
    }
}
