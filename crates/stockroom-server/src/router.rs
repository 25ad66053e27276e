use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use stockroom_engine::InventoryService;
use tower_http::trace::TraceLayer;

use crate::auth::AuthProvider;
use crate::handler;

/// Shared state for all handlers: the inventory service and the auth gate.
///
/// Both are constructed explicitly and injected — handlers never reach for
/// globals.
#[derive(Clone)]
pub struct AppState {
    pub service: InventoryService,
    pub auth: Arc<dyn AuthProvider>,
    pub allow_anonymous_read: bool,
}

/// Build the axum router with all Stockroom endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route(
            "/v1/categories",
            get(handler::list_categories).post(handler::create_category),
        )
        .route(
            "/v1/categories/:id",
            get(handler::get_category)
                .put(handler::update_category)
                .delete(handler::delete_category),
        )
        .route(
            "/v1/parts",
            get(handler::list_parts).post(handler::create_part),
        )
        .route(
            "/v1/parts/:id",
            get(handler::get_part)
                .put(handler::update_part)
                .delete(handler::delete_part),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
