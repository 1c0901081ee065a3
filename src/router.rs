use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::openapi;
use crate::db::CreditStore;
use crate::handlers::credits;

#[derive(Clone)]
pub struct AppState {
    pub store: CreditStore,
}

impl AppState {
    pub fn new(store: CreditStore) -> Self {
        Self { store }
    }
}

/// Build the canonical route set over the given state.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/credits", get(credits::list_credits))
        .route("/credit", post(credits::create_credit))
        .route(
            "/credit/{id}",
            get(credits::get_credit)
                .put(credits::update_credit)
                .delete(credits::delete_credit),
        )
        .route("/api-docs", get(openapi::api_docs))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
