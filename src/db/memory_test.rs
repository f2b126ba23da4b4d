//! Tests for the in-memory item repository.

use crate::db::{
    Database, DbError, ItemListQuery, ItemPatch, ItemRepository, MemoryDatabase, NewItem,
};

fn new_item(name: &str, price: f64) -> NewItem {
    NewItem {
        name: Some(name.to_string()),
        description: None,
        price: Some(price),
        is_active: None,
    }
}

fn list_query(skip: i64, limit: i64, search: Option<&str>) -> ItemListQuery {
    ItemListQuery {
        skip,
        limit,
        search: search.map(str::to_string),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_round_trip() {
    let db = MemoryDatabase::new();
    let items = db.items();

    let created = items
        .create(&NewItem {
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some(9.99),
            is_active: None,
        })
        .await
        .expect("Create should succeed");

    let fetched = items.get(created.id).await.expect("Get should succeed");
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Widget");
    assert_eq!(fetched.description.as_deref(), Some("A widget"));
    assert_eq!(fetched.price, 9.99);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_defaults_to_active() {
    let db = MemoryDatabase::new();
    let items = db.items();

    let created = items.create(&new_item("Widget", 9.99)).await.unwrap();
    assert!(created.is_active);

    let inactive = items
        .create(&NewItem {
            is_active: Some(false),
            ..new_item("Gadget", 1.0)
        })
        .await
        .unwrap();
    assert!(!inactive.is_active);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_required_fields_is_constraint_violation() {
    let db = MemoryDatabase::new();
    let items = db.items();

    let missing_name = items
        .create(&NewItem {
            price: Some(1.0),
            ..NewItem::default()
        })
        .await;
    assert!(matches!(missing_name, Err(DbError::Constraint { .. })));

    let missing_price = items
        .create(&NewItem {
            name: Some("Widget".to_string()),
            ..NewItem::default()
        })
        .await;
    assert!(matches!(missing_price, Err(DbError::Constraint { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn ids_ascend_from_one() {
    let db = MemoryDatabase::new();
    let items = db.items();

    for (index, name) in ["a", "b", "c"].iter().enumerate() {
        let created = items.create(&new_item(name, 1.0)).await.unwrap();
        assert_eq!(created.id, index as i64 + 1);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn list_pagination_window() {
    let db = MemoryDatabase::new();
    let items = db.items();

    for name in ["a", "b", "c", "d", "e"] {
        items.create(&new_item(name, 1.0)).await.unwrap();
    }

    let page = items.list(&list_query(1, 2, None)).await.unwrap();
    let ids: Vec<i64> = page.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![2, 3]);

    let tail = items.list(&list_query(4, 100, None)).await.unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].id, 5);

    let beyond = items.list(&list_query(10, 100, None)).await.unwrap();
    assert!(beyond.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_search_is_case_insensitive_substring() {
    let db = MemoryDatabase::new();
    let items = db.items();

    for name in ["Widget", "Gadget", "wIdGeTron", "Sprocket"] {
        items.create(&new_item(name, 1.0)).await.unwrap();
    }

    let matches = items.list(&list_query(0, 100, Some("idge"))).await.unwrap();
    let names: Vec<&str> = matches.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Widget", "wIdGeTron"]);

    let none = items.list(&list_query(0, 100, Some("zzz"))).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn update_merges_partial_fields() {
    let db = MemoryDatabase::new();
    let items = db.items();

    let created = items
        .create(&NewItem {
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some(9.99),
            is_active: None,
        })
        .await
        .unwrap();

    let updated = items
        .update(
            created.id,
            &ItemPatch {
                price: Some(19.99),
                ..ItemPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 19.99);
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.description.as_deref(), Some("A widget"));
    assert!(updated.is_active);

    // The merge is persisted, not just echoed.
    let fetched = items.get(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_explicit_null_clears_description() {
    let db = MemoryDatabase::new();
    let items = db.items();

    let created = items
        .create(&NewItem {
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some(9.99),
            is_active: None,
        })
        .await
        .unwrap();

    let updated = items
        .update(
            created.id,
            &ItemPatch {
                description: Some(None),
                ..ItemPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.description, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_id_signals_not_found_without_mutation() {
    let db = MemoryDatabase::new();
    let items = db.items();

    items.create(&new_item("Widget", 9.99)).await.unwrap();

    assert!(matches!(items.get(999).await, Err(DbError::NotFound { id: 999 })));
    assert!(matches!(
        items.update(999, &ItemPatch::default()).await,
        Err(DbError::NotFound { id: 999 })
    ));
    assert!(matches!(items.delete(999).await, Err(DbError::NotFound { id: 999 })));

    let all = items.list(&ItemListQuery::default()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Widget");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_is_final() {
    let db = MemoryDatabase::new();
    let items = db.items();

    let created = items.create(&new_item("Widget", 9.99)).await.unwrap();
    items.delete(created.id).await.expect("Delete should succeed");

    assert!(matches!(
        items.get(created.id).await,
        Err(DbError::NotFound { .. })
    ));
}
