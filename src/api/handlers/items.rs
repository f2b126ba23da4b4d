//! Item management handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::db::{Database, DbError, Item, ItemListQuery, ItemPatch, ItemRepository, NewItem};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Item response DTO
#[derive(Serialize, ToSchema)]
pub struct ItemResponse {
    /// Database-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "A widget")]
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = true)]
    pub is_active: bool,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            is_active: item.is_active,
        }
    }
}

/// Create item request DTO
///
/// `name` and `price` are required by the table; leaving them optional here
/// lets the backend's constraint violation drive the 400 response.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(example = "Widget")]
    pub name: Option<String>,
    #[schema(example = "A widget")]
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: Option<f64>,
    /// Defaults to true when omitted
    #[schema(example = true)]
    pub is_active: Option<bool>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            is_active: req.is_active,
        }
    }
}

/// Distinguishes an absent field from an explicit null.
fn double_option<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Option<String>>, D::Error> {
    Option::<String>::deserialize(de).map(Some)
}

/// Update item request DTO. Any subset of fields may be supplied; omitted
/// fields keep their stored values.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    #[schema(example = "Updated Widget")]
    pub name: Option<String>,
    /// An explicit null clears the description; omitting the field keeps it
    #[serde(default, deserialize_with = "double_option")]
    #[schema(example = "Updated description")]
    pub description: Option<Option<String>>,
    #[schema(example = 19.99)]
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            is_active: req.is_active,
        }
    }
}

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Item not found")]
    pub error: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListItemsQuery {
    /// Number of items to skip (default 0)
    #[param(example = 0)]
    pub skip: Option<i64>,
    /// Maximum number of items to return, between 1 and 100 (default 100)
    #[param(example = 100)]
    pub limit: Option<i64>,
    /// Case-insensitive substring filter on item name
    #[param(example = "widget")]
    pub search: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Item not found".to_string(),
        }),
    )
}

fn internal_error(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn unprocessable(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// List items with optional search
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "List of items", body = [ItemResponse]),
        (status = 422, description = "Invalid pagination parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_items<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(100);
    if skip < 0 {
        return Err(unprocessable("skip must be greater than or equal to 0"));
    }
    if !(1..=100).contains(&limit) {
        return Err(unprocessable("limit must be between 1 and 100"));
    }

    let db_query = ItemListQuery {
        skip,
        limit,
        search: query.search,
    };

    let items = state
        .db()
        .items()
        .list(&db_query)
        .await
        .map_err(internal_error)?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_item<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    let item = state.db().items().get(id).await.map_err(|e| match e {
        DbError::NotFound { .. } => not_found(),
        _ => internal_error(e),
    })?;

    Ok(Json(ItemResponse::from(item)))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Insert failed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_item<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), (StatusCode, Json<ErrorResponse>)> {
    // Every insert failure maps to 400, with the backend's message attached.
    let item = state
        .db()
        .items()
        .create(&req.into())
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// Update an item by id, preserving omitted fields
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_item<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    let item = state
        .db()
        .items()
        .update(id, &req.into())
        .await
        .map_err(|e| match e {
            DbError::NotFound { .. } => not_found(),
            _ => internal_error(e),
        })?;

    Ok(Json(ItemResponse::from(item)))
}

/// Delete an item by id
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_item<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state.db().items().delete(id).await.map_err(|e| match e {
        DbError::NotFound { .. } => not_found(),
        _ => internal_error(e),
    })?;

    Ok(StatusCode::NO_CONTENT)
}
