//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa::openapi::ServerBuilder;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateItemRequest, ErrorResponse, HealthResponse, ItemResponse, UpdateItemRequest,
    WelcomeResponse,
};
use super::state::AppState;
use crate::config::Settings;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "CRUD API for the items catalog",
        license(name = "MIT")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_items,
        handlers::get_item,
        handlers::create_item,
        handlers::update_item,
        handlers::delete_item,
    ),
    components(
        schemas(
            WelcomeResponse,
            HealthResponse,
            ItemResponse,
            CreateItemRequest,
            UpdateItemRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "items", description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>, settings: &Settings) -> Router {
    let mut api = ApiDoc::openapi();
    api.servers = Some(vec![
        ServerBuilder::new()
            .url(settings.server_url.clone())
            .description(Some(settings.server_description.clone()))
            .build(),
    ]);

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Item routes (generic over Database)
    let item_routes = routes!(D => {
        get "/api/items" => handlers::list_items,
        get "/api/items/{id}" => handlers::get_item,
        post "/api/items" => handlers::create_item,
        put "/api/items/{id}" => handlers::update_item,
        delete "/api/items/{id}" => handlers::delete_item,
    });

    system_routes
        .merge(item_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
