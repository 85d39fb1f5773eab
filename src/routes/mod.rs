// src/routes/mod.rs
pub mod chat;

use crate::{
    services::access_guard::{API_TOKEN_HEADER, authorize},
    state::SharedState,
};
use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::{chat_handler, root_handler};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let chat_routes = Router::new()
        .route("/chat", post(chat_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(|| async { "OK" }))
        .merge(chat_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

async fn auth_middleware(State(state): State<SharedState>, req: Request, next: Next) -> Response {
    let presented = req
        .headers()
        .get(API_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    match authorize(presented, &state.api_token) {
        Ok(()) => next.run(req).await,
        Err(err) => {
            tracing::warn!(uri = %req.uri(), "rejected request with invalid API token");
            err.into_response()
        }
    }
}
